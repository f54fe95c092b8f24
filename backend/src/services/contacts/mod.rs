//! # Contact Service Module
//!
//! This module aggregates all API endpoints related to the management of the
//! profile's contact methods. It acts as a router, directing incoming HTTP
//! requests under the `/api/contacts` path to the appropriate handler logic
//! defined in its sub-modules, and owns the database handle those handlers
//! share.
//!
//! ## Sub-modules:
//! - `add`: Validates and persists a new contact method.
//! - `get`: Handles the retrieval of the stored contact list.

mod add;
mod get;

use actix_web::web::{get, post, scope};
use actix_web::Scope;
use rusqlite::Connection;
use std::path::PathBuf;

/// The base path for all contact-related API endpoints.
const API_PATH: &str = "/api/contacts";

/// Clonable handle to the SQLite database backing the contact list.
///
/// Holds only the file path; every operation opens its own connection via
/// [`Db::open`], which also makes sure the schema exists. One clone lives in
/// the Actix application data and is extracted by the handlers.
#[derive(Clone)]
pub struct Db {
    path: PathBuf,
}

impl Db {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens a connection to the database file, creating the `contacts`
    /// table on first use.
    pub fn open(&self) -> Result<Connection, String> {
        let conn = Connection::open(&self.path).map_err(|e| e.to_string())?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS contacts (
                id TEXT PRIMARY KEY,
                contact_type TEXT NOT NULL,
                content TEXT NOT NULL
            )",
            [],
        )
        .map_err(|e| e.to_string())?;
        Ok(conn)
    }
}

/// Configures and returns the Actix `Scope` for all contact-related routes.
///
/// # Registered Routes:
///
/// *   **`POST /api/contacts`**:
///     - **Handler**: `add::process`
///     - **Description**: Validates an `AddContactRequest` payload and stores
///       it as a new contact with a server-generated ID. Returns the stored
///       `Contact` as JSON, `422` when validation fails, or `503` when the
///       database is unavailable.
///
/// *   **`GET /api/contacts`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns every stored contact as a JSON array, in
///       insertion order.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(add::process))
        .route("", get().to(get::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::contact::{Contact, ContactType};
    use tempfile::TempDir;

    fn temp_db() -> (TempDir, Db) {
        let dir = TempDir::new().unwrap();
        let db = Db::new(dir.path().join("contacts.sqlite"));
        (dir, db)
    }

    #[actix_web::test]
    async fn posting_then_listing_round_trips_a_contact() {
        let (_dir, db) = temp_db();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .service(configure_routes()),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(serde_json::json!({"type": "EMAIL", "content": "person@example.com"}))
            .to_request();
        let saved: Contact = test::call_and_read_body_json(&app, request).await;
        assert_eq!(saved.contact_type, ContactType::Email);
        assert_eq!(saved.content, "person@example.com");
        assert!(!saved.id.is_empty());

        let request = test::TestRequest::get().uri("/api/contacts").to_request();
        let listed: Vec<Contact> = test::call_and_read_body_json(&app, request).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, saved.id);
        assert_eq!(listed[0].content, "person@example.com");
    }

    #[actix_web::test]
    async fn invalid_payload_is_rejected_as_unprocessable() {
        let (_dir, db) = temp_db();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .service(configure_routes()),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(serde_json::json!({"content": ""}))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let request = test::TestRequest::get().uri("/api/contacts").to_request();
        let listed: Vec<Contact> = test::call_and_read_body_json(&app, request).await;
        assert!(listed.is_empty());
    }

    #[actix_web::test]
    async fn listing_preserves_insertion_order() {
        let (_dir, db) = temp_db();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .service(configure_routes()),
        )
        .await;

        for (contact_type, content) in [
            ("PHONE", "+380501234567"),
            ("TELEGRAM", "@someone"),
            ("OTHER", "pigeon post"),
        ] {
            let request = test::TestRequest::post()
                .uri("/api/contacts")
                .set_json(serde_json::json!({"type": contact_type, "content": content}))
                .to_request();
            let response = test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::OK);
        }

        let request = test::TestRequest::get().uri("/api/contacts").to_request();
        let listed: Vec<Contact> = test::call_and_read_body_json(&app, request).await;
        let contents: Vec<&str> = listed.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["+380501234567", "@someone", "pigeon post"]);
        assert_eq!(listed[2].contact_type, ContactType::Other);
    }
}
