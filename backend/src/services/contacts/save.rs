use actix_web::{web, HttpResponse, Responder};
use common::model::contact::ContactDetails;
use log::error;
use rusqlite::{params, Connection};

use super::Registry;
use crate::db;

pub async fn sender(payload: web::Json<ContactDetails>) -> impl Responder {
    respond(Registry::Senders, payload.into_inner())
}

pub async fn business(payload: web::Json<ContactDetails>) -> impl Responder {
    respond(Registry::Businesses, payload.into_inner())
}

fn respond(registry: Registry, contact: ContactDetails) -> HttpResponse {
    match db::open().and_then(|conn| save_contact(&conn, registry, &contact)) {
        Ok(id) => HttpResponse::Ok().json(ContactDetails {
            id: Some(id),
            ..contact
        }),
        Err(e) => {
            error!("Error saving {}: {}", registry.label(), e);
            HttpResponse::InternalServerError()
                .body(format!("Failed to save {}.", registry.label()))
        }
    }
}

/// Single-row insert, stored exactly as submitted. Returns the new rowid.
pub fn save_contact(
    conn: &Connection,
    registry: Registry,
    contact: &ContactDetails,
) -> Result<i64, String> {
    conn.execute(
        &format!(
            "INSERT INTO {} (name, address1, address2, city, state, country, postcode, email, phone)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            registry.table()
        ),
        params![
            contact.name,
            contact.address1,
            contact.address2,
            contact.city,
            contact.state,
            contact.country,
            contact.postcode,
            contact.email,
            contact.phone,
        ],
    )
    .map_err(|e| e.to_string())?;

    Ok(conn.last_insert_rowid())
}
