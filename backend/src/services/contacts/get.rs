//! # Contact Retrieval Service
//!
//! This module is responsible for fetching the stored list of contact
//! methods. It provides the backend logic for the `GET /api/contacts`
//! endpoint.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: The `process` function serves as the Actix web
//!     handler for the GET request.
//!
//! 2.  **Data Fetching**: It delegates the core logic to `list_contacts`,
//!     which opens the database through the shared [`Db`] handle and reads
//!     every row of the `contacts` table in insertion order.
//!
//! 3.  **Model Assembly**: Each row is decoded into a
//!     `common::model::contact::Contact`; the stored type column is parsed
//!     back into its `ContactType` value.
//!
//! 4.  **HTTP Response**: The resulting vector is serialized into a JSON
//!     array in a `200 OK` response. A database failure produces
//!     `503 Service Unavailable`.

use actix_web::web;
use common::model::contact::{Contact, ContactType};
use std::str::FromStr;

use super::Db;

/// Actix web handler for the `GET /api/contacts` endpoint.
///
/// # Returns
/// - `200 OK` with the contact list as a JSON array on success.
/// - `503 Service Unavailable` with an error message if the list cannot be read.
pub async fn process(db: web::Data<Db>) -> impl actix_web::Responder {
    match list_contacts(&db) {
        Ok(contacts) => actix_web::HttpResponse::Ok().json(contacts),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error retrieving contacts: {}", e)),
    }
}

/// Reads every stored contact, oldest first.
///
/// Rows whose type column no longer parses into a [`ContactType`] are
/// reported as an error rather than silently dropped.
pub fn list_contacts(db: &Db) -> Result<Vec<Contact>, String> {
    let conn = db.open()?;

    let mut stmt = conn
        .prepare("SELECT id, contact_type, content FROM contacts ORDER BY rowid")
        .map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })
        .map_err(|e| e.to_string())?;

    let mut contacts = Vec::new();
    for row in rows {
        let (id, stored_type, content) = row.map_err(|e| e.to_string())?;
        let contact_type = ContactType::from_str(&stored_type)
            .map_err(|_| format!("Unknown contact type in database: {}", stored_type))?;
        contacts.push(Contact {
            id,
            contact_type,
            content,
        });
    }

    Ok(contacts)
}
