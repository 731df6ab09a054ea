use actix_web::{HttpResponse, Responder};
use common::model::contact::ContactDetails;
use log::error;
use rusqlite::Connection;

use super::Registry;
use crate::db;

pub async fn senders() -> impl Responder {
    respond(Registry::Senders)
}

pub async fn businesses() -> impl Responder {
    respond(Registry::Businesses)
}

fn respond(registry: Registry) -> HttpResponse {
    match db::open().and_then(|conn| list_contacts(&conn, registry)) {
        Ok(contacts) => HttpResponse::Ok().json(contacts),
        Err(e) => {
            error!("Error fetching {} records: {}", registry.label(), e);
            HttpResponse::InternalServerError()
                .body(format!("Failed to fetch {} records.", registry.label()))
        }
    }
}

/// Returns every record in the registry, newest first. The `id` tiebreak
/// keeps the order deterministic when `created_at` timestamps collide
/// (CURRENT_TIMESTAMP has one-second resolution).
pub fn list_contacts(conn: &Connection, registry: Registry) -> Result<Vec<ContactDetails>, String> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT id, name, address1, address2, city, state, country, postcode, email, phone, created_at
             FROM {} ORDER BY created_at DESC, id DESC",
            registry.table()
        ))
        .map_err(|e| e.to_string())?;

    let contact_iter = stmt
        .query_map([], |row| {
            Ok(ContactDetails {
                id: row.get(0)?,
                name: row.get(1)?,
                address1: row.get(2)?,
                address2: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                city: row.get(4)?,
                state: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
                country: row.get(6)?,
                postcode: row.get(7)?,
                email: row.get(8)?,
                phone: row.get::<_, Option<String>>(9)?.unwrap_or_default(),
                created_at: row.get(10)?,
            })
        })
        .map_err(|e| e.to_string())?;

    Ok(contact_iter.filter_map(Result::ok).collect())
}
