use actix_web::{web, HttpResponse, Responder};
use common::model::bank::BankDetails;
use log::error;
use rusqlite::{params, Connection};

use crate::db;

pub async fn process(payload: web::Json<BankDetails>) -> impl Responder {
    let details = payload.into_inner();
    match db::open().and_then(|conn| save_bank_details(&conn, &details)) {
        Ok(id) => HttpResponse::Ok().json(BankDetails {
            id: Some(id),
            ..details
        }),
        Err(e) => {
            error!("Error saving bank details: {}", e);
            HttpResponse::InternalServerError().body("Failed to save bank details.")
        }
    }
}

pub fn save_bank_details(conn: &Connection, details: &BankDetails) -> Result<i64, String> {
    conn.execute(
        "INSERT INTO bank_details (account, sort_code, account_name)
         VALUES (?1, ?2, ?3)",
        params![details.account, details.sort_code, details.account_name],
    )
    .map_err(|e| e.to_string())?;

    Ok(conn.last_insert_rowid())
}
