use actix_web::{web, HttpResponse, Responder};
use common::model::invoice::Invoice;
use log::error;
use rusqlite::{params, Connection, OptionalExtension};

use super::{InvoiceRow, INVOICE_COLUMNS};
use crate::db;

/// Handler for `GET /api/invoices/{invoice_id}`.
///
/// A missing invoice is answered with `404`, distinct from the generic `500`
/// used for store failures.
pub async fn process(invoice_id: web::Path<i64>) -> impl Responder {
    match db::open().and_then(|conn| get_invoice(&conn, *invoice_id)) {
        Ok(Some(invoice)) => HttpResponse::Ok().json(invoice),
        Ok(None) => HttpResponse::NotFound().body("Invoice not found"),
        Err(e) => {
            error!("Error fetching invoice {}: {}", invoice_id, e);
            HttpResponse::InternalServerError().body("Failed to fetch invoice.")
        }
    }
}

/// Fetches one invoice with decoded snapshots and items, `None` when absent.
pub fn get_invoice(conn: &Connection, invoice_id: i64) -> Result<Option<Invoice>, String> {
    let row = conn
        .query_row(
            &format!("SELECT {} FROM invoices WHERE id = ?1", INVOICE_COLUMNS),
            params![invoice_id],
            InvoiceRow::from_row,
        )
        .optional()
        .map_err(|e| e.to_string())?;

    match row {
        Some(row) => Ok(Some(row.assemble(conn)?)),
        None => Ok(None),
    }
}
