use actix_web::{web, HttpResponse, Responder};
use common::requests::{HistoryPage, HistoryQuery};
use log::error;
use rusqlite::{params, Connection};

use super::{InvoiceRow, INVOICE_COLUMNS};
use crate::db;

pub async fn process(query: web::Query<HistoryQuery>) -> impl Responder {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10).max(1);

    match db::open().and_then(|conn| invoice_history(&conn, page, limit)) {
        Ok(history) => HttpResponse::Ok().json(history),
        Err(e) => {
            error!("Error fetching invoice history: {}", e);
            HttpResponse::InternalServerError().body("Failed to fetch invoice history.")
        }
    }
}

/// One offset/limit page of fully assembled invoices, newest save first,
/// plus the total row count and the ceiling page count.
pub fn invoice_history(conn: &Connection, page: u32, limit: u32) -> Result<HistoryPage, String> {
    let total: u32 = conn
        .query_row("SELECT COUNT(*) FROM invoices", [], |row| row.get(0))
        .map_err(|e| e.to_string())?;

    // Widen before multiplying: page and limit come straight from the query
    // string, and `(page - 1) * limit` overflows u32 for large pages.
    let offset = (page as u64 - 1) * limit as u64;
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {} FROM invoices ORDER BY created_at DESC, id DESC LIMIT ?1 OFFSET ?2",
            INVOICE_COLUMNS
        ))
        .map_err(|e| e.to_string())?;

    let rows = stmt
        .query_map(params![limit, offset], InvoiceRow::from_row)
        .map_err(|e| e.to_string())?
        .filter_map(Result::ok)
        .collect::<Vec<_>>();

    let invoices = rows
        .into_iter()
        .map(|row| row.assemble(conn))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HistoryPage {
        total,
        total_pages: total.div_ceil(limit),
        current_page: page,
        invoices,
    })
}
