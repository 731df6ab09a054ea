use actix_web::{web, HttpResponse, Responder};
use common::requests::{SaveInvoiceRequest, SaveInvoiceResponse};
use log::error;
use rusqlite::{params, Connection};

use crate::db;

pub async fn process(payload: web::Json<SaveInvoiceRequest>) -> impl Responder {
    match db::open().and_then(|mut conn| save_invoice(&mut conn, &payload)) {
        Ok(invoice_id) => HttpResponse::Ok().json(SaveInvoiceResponse {
            message: "Invoice and items saved successfully".to_string(),
            invoice_id,
        }),
        Err(e) => {
            error!("Error saving invoice: {}", e);
            HttpResponse::InternalServerError().body("Failed to save invoice.")
        }
    }
}

/// Writes the invoice row and all of its item rows in one transaction.
///
/// The sender, business and bank details are serialized to JSON and stored
/// inside the invoice row as point-in-time snapshots. A failure on any item
/// insert rolls back the invoice row as well, so a stored invoice can never
/// carry totals computed over items that were silently dropped.
pub fn save_invoice(conn: &mut Connection, request: &SaveInvoiceRequest) -> Result<i64, String> {
    let sender = serde_json::to_string(&request.sender).map_err(|e| e.to_string())?;
    let business = serde_json::to_string(&request.business).map_err(|e| e.to_string())?;
    let bank_details = serde_json::to_string(&request.bank_details).map_err(|e| e.to_string())?;

    let details = &request.invoice_details;
    let tx = conn.transaction().map_err(|e| e.to_string())?;

    tx.execute(
        "INSERT INTO invoices
           (invoiceNo, invoiceDate, dueDate, date, recipient, sender, business, bank_details, tax, subTotal, total)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            details.invoice_no,
            details.invoice_date,
            details.due_date,
            details.date,
            details.recipient,
            sender,
            business,
            bank_details,
            details.tax,
            details.sub_total,
            details.total,
        ],
    )
    .map_err(|e| e.to_string())?;

    let invoice_id = tx.last_insert_rowid();

    {
        let mut stmt = tx
            .prepare(
                "INSERT INTO invoice_items (invoice_id, date, description, qty, rate, amount)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )
            .map_err(|e| e.to_string())?;

        for item in &details.items {
            stmt.execute(params![
                invoice_id,
                item.date,
                item.description,
                item.qty,
                item.rate,
                item.amount,
            ])
            .map_err(|e| e.to_string())?;
        }
    }

    tx.commit().map_err(|e| e.to_string())?;
    Ok(invoice_id)
}
