use actix_web::{HttpResponse, Responder};
use common::model::bank::BankDetails;
use log::error;
use rusqlite::Connection;

use crate::db;

pub async fn process() -> impl Responder {
    match db::open().and_then(|conn| list_bank_details(&conn)) {
        Ok(details) => HttpResponse::Ok().json(details),
        Err(e) => {
            error!("Error fetching bank details: {}", e);
            HttpResponse::InternalServerError().body("Failed to fetch bank details.")
        }
    }
}

pub fn list_bank_details(conn: &Connection) -> Result<Vec<BankDetails>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT id, account, sort_code, account_name, created_at
             FROM bank_details ORDER BY created_at DESC, id DESC",
        )
        .map_err(|e| e.to_string())?;

    let detail_iter = stmt
        .query_map([], |row| {
            Ok(BankDetails {
                id: row.get(0)?,
                account: row.get(1)?,
                sort_code: row.get(2)?,
                account_name: row.get(3)?,
                created_at: row.get(4)?,
            })
        })
        .map_err(|e| e.to_string())?;

    Ok(detail_iter.filter_map(Result::ok).collect())
}
