use actix_web::{HttpResponse, Responder};
use common::model::invoice::Invoice;
use log::error;
use rusqlite::Connection;

use super::{InvoiceRow, INVOICE_COLUMNS};
use crate::db;

pub async fn process() -> impl Responder {
    match db::open().and_then(|conn| list_invoices(&conn)) {
        Ok(invoices) => HttpResponse::Ok().json(invoices),
        Err(e) => {
            error!("Error fetching invoices: {}", e);
            HttpResponse::InternalServerError().body("Failed to fetch invoices.")
        }
    }
}

/// Every invoice, fully assembled, ordered by invoice date descending.
/// The history endpoint orders by save time instead; see DESIGN.md.
pub fn list_invoices(conn: &Connection) -> Result<Vec<Invoice>, String> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {} FROM invoices ORDER BY invoiceDate DESC, id DESC",
            INVOICE_COLUMNS
        ))
        .map_err(|e| e.to_string())?;

    let rows = stmt
        .query_map([], InvoiceRow::from_row)
        .map_err(|e| e.to_string())?
        .filter_map(Result::ok)
        .collect::<Vec<_>>();

    rows.into_iter().map(|row| row.assemble(conn)).collect()
}
