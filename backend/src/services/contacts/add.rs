use actix_web::{web, Responder};
use common::model::contact::Contact;
use common::requests::{AddContactRequest, Validate};
use log::info;
use rusqlite::params;
use uuid::Uuid;

use super::Db;

pub async fn process(db: web::Data<Db>, payload: web::Json<AddContactRequest>) -> impl Responder {
    if let Err(errors) = payload.validate() {
        return actix_web::HttpResponse::UnprocessableEntity().body(errors.to_string());
    }

    match add_contact(&db, &payload) {
        Ok(contact) => actix_web::HttpResponse::Ok().json(contact),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error saving contact: {}", e)),
    }
}

pub fn add_contact(db: &Db, payload: &AddContactRequest) -> Result<Contact, String> {
    let contact_type = payload.contact_type.ok_or("Contact type is required")?;

    let contact = Contact {
        id: Uuid::new_v4().to_string(),
        contact_type,
        content: payload.content.clone(),
    };

    let conn = db.open()?;
    conn.execute(
        "INSERT INTO contacts (id, contact_type, content) VALUES (?1, ?2, ?3)",
        params![&contact.id, contact.contact_type.as_ref(), &contact.content],
    )
    .map_err(|e| e.to_string())?;

    info!("Stored contact {} ({})", contact.id, contact.contact_type);
    Ok(contact)
}
