//! # Invoice Service Module
//!
//! Aggregates all API endpoints for writing and reading invoices, and hosts
//! the row-decoding helpers shared by the three read paths.
//!
//! ## Registered Routes:
//!
//! *   **`GET /api/invoices`**:
//!     - **Handler**: `list::process`
//!     - **Description**: Every invoice with decoded snapshots and items,
//!       ordered by invoice date descending (feeds the "Load invoice" picker,
//!       where the user thinks in invoice dates).
//!
//! *   **`POST /api/invoices`**:
//!     - **Handler**: `save::process`
//!     - **Description**: Persists one invoice and all of its line items in a
//!       single transaction. The sender, business and bank details riding on
//!       the request are frozen into the row as JSON snapshots.
//!
//! *   **`GET /api/invoices/history?page=&limit=`**:
//!     - **Handler**: `history::process`
//!     - **Description**: Offset/limit page of invoices ordered by save time
//!       descending, with a total count and page count. Registered before the
//!       id matcher: a literal `history` segment must not be captured as an
//!       invoice id.
//!
//! *   **`GET /api/invoices/{invoice_id}`**:
//!     - **Handler**: `get::process`
//!     - **Description**: One complete invoice, `404` when the id is unknown.

mod get;
mod history;
mod list;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;
use common::model::bank::BankDetails;
use common::model::contact::ContactDetails;
use common::model::invoice::{Invoice, InvoiceItem};
use rusqlite::{params, Connection, Row};

const API_PATH: &str = "/api/invoices";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(save::process))
        .route("/history", get().to(history::process))
        .route("/{invoice_id}", get().to(get::process))
}

/// Column list shared by every invoice SELECT, in the order `from_row` reads.
pub(crate) const INVOICE_COLUMNS: &str =
    "id, invoiceNo, invoiceDate, dueDate, date, recipient, sender, business, bank_details, \
     tax, subTotal, total, created_at";

/// An invoice row before the snapshot blobs are decoded.
pub(crate) struct InvoiceRow {
    pub invoice: Invoice,
    sender: String,
    business: String,
    bank_details: String,
}

impl InvoiceRow {
    /// Maps a row selected with [`INVOICE_COLUMNS`].
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(InvoiceRow {
            invoice: Invoice {
                id: row.get(0)?,
                invoice_no: row.get(1)?,
                invoice_date: row.get(2)?,
                due_date: row.get(3)?,
                date: row.get(4)?,
                recipient: row.get(5)?,
                sender: ContactDetails::default(),
                business: ContactDetails::default(),
                bank_details: BankDetails::default(),
                tax: row.get(9)?,
                sub_total: row.get(10)?,
                total: row.get(11)?,
                items: Vec::new(),
                created_at: row.get(12)?,
            },
            sender: row.get(6)?,
            business: row.get(7)?,
            bank_details: row.get(8)?,
        })
    }

    /// Decodes the three JSON snapshots and attaches the owned item rows.
    pub(crate) fn assemble(self, conn: &Connection) -> Result<Invoice, String> {
        let mut invoice = self.invoice;
        invoice.sender = serde_json::from_str(&self.sender).map_err(|e| e.to_string())?;
        invoice.business = serde_json::from_str(&self.business).map_err(|e| e.to_string())?;
        invoice.bank_details =
            serde_json::from_str(&self.bank_details).map_err(|e| e.to_string())?;
        invoice.items = load_items(conn, invoice.id.unwrap_or_default())?;
        Ok(invoice)
    }
}

/// Loads the line items owned by one invoice, in insertion order.
pub(crate) fn load_items(conn: &Connection, invoice_id: i64) -> Result<Vec<InvoiceItem>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT id, invoice_id, date, description, qty, rate, amount
             FROM invoice_items WHERE invoice_id = ?1 ORDER BY id",
        )
        .map_err(|e| e.to_string())?;

    let item_iter = stmt
        .query_map(params![invoice_id], |row| {
            Ok(InvoiceItem {
                id: row.get(0)?,
                invoice_id: row.get(1)?,
                date: row.get(2)?,
                description: row.get(3)?,
                qty: row.get(4)?,
                rate: row.get(5)?,
                amount: row.get(6)?,
            })
        })
        .map_err(|e| e.to_string())?;

    Ok(item_iter.filter_map(Result::ok).collect())
}

#[cfg(test)]
mod tests {
    use super::get::get_invoice;
    use super::history::invoice_history;
    use super::list::list_invoices;
    use super::save::save_invoice;
    use crate::db;
    use common::model::bank::BankDetails;
    use common::model::contact::ContactDetails;
    use common::model::invoice::{InvoiceDetails, InvoiceItem};
    use common::requests::SaveInvoiceRequest;
    use common::totals;

    fn item(description: &str, qty: i64, rate: f64) -> InvoiceItem {
        InvoiceItem {
            date: "2025-01-10".to_string(),
            description: description.to_string(),
            qty,
            rate,
            amount: totals::line_amount(qty, rate),
            ..Default::default()
        }
    }

    fn request(invoice_no: &str, invoice_date: &str, items: Vec<InvoiceItem>) -> SaveInvoiceRequest {
        let tax = 20.0;
        let (sub_total, total) = totals::invoice_totals(&items, tax);
        SaveInvoiceRequest {
            invoice_details: InvoiceDetails {
                items,
                invoice_no: invoice_no.to_string(),
                invoice_date: invoice_date.to_string(),
                due_date: "2025-02-10".to_string(),
                recipient: "Wile E. Coyote".to_string(),
                date: "2025-01-10".to_string(),
                tax,
                sub_total,
                total,
            },
            sender: ContactDetails {
                name: "Acme".to_string(),
                address1: "1 Road".to_string(),
                city: "Leeds".to_string(),
                country: "UK".to_string(),
                postcode: "LS1 1AA".to_string(),
                email: "a@acme.com".to_string(),
                ..Default::default()
            },
            business: ContactDetails {
                name: "Roadrunner Ltd".to_string(),
                address1: "2 Desert Way".to_string(),
                city: "Phoenix".to_string(),
                country: "US".to_string(),
                postcode: "85001".to_string(),
                email: "rr@example.com".to_string(),
                ..Default::default()
            },
            bank_details: BankDetails {
                account: "12345678".to_string(),
                sort_code: "123456".to_string(),
                account_name: "Acme Ltd".to_string(),
                ..Default::default()
            },
        }
    }

    #[actix_web::test]
    async fn history_route_is_not_captured_as_an_invoice_id() {
        // The literal `history` segment must reach the history handler, not
        // the `{invoice_id}` matcher (where it would fail id extraction).
        db::open().and_then(|conn| db::init(&conn)).unwrap();

        let app = actix_web::test::init_service(
            actix_web::App::new().service(super::configure_routes()),
        )
        .await;

        let req = actix_web::test::TestRequest::get()
            .uri("/api/invoices/history")
            .to_request();
        let resp = actix_web::test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let page: common::requests::HistoryPage =
            actix_web::test::read_body_json(resp).await;
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn saved_invoice_round_trips_by_id() {
        let mut conn = db::test_conn();
        let req = request(
            "INV-00001",
            "2025-01-10",
            vec![item("design", 2, 50.0), item("hosting", 1, 30.0)],
        );
        let id = save_invoice(&mut conn, &req).unwrap();

        let invoice = get_invoice(&conn, id).unwrap().expect("invoice exists");
        assert_eq!(invoice.id, Some(id));
        assert_eq!(invoice.invoice_no, "INV-00001");
        assert_eq!(invoice.items.len(), 2);
        assert_eq!(invoice.items[0].description, "design");
        assert_eq!(invoice.items[0].qty, 2);
        assert_eq!(invoice.items[0].amount, 100.0);
        assert_eq!(invoice.items[1].description, "hosting");
        assert!(invoice.items.iter().all(|i| i.invoice_id == Some(id)));

        // Snapshots decode back to exactly what was submitted.
        assert_eq!(invoice.sender.name, "Acme");
        assert_eq!(invoice.sender.postcode, "LS1 1AA");
        assert_eq!(invoice.business.name, "Roadrunner Ltd");
        assert_eq!(invoice.bank_details.account, "12345678");
        assert_eq!(invoice.bank_details.sort_code, "123456");
        assert_eq!(invoice.bank_details.account_name, "Acme Ltd");
    }

    #[test]
    fn worked_example_totals_persist() {
        let mut conn = db::test_conn();
        let req = request("INV-00002", "2025-01-11", vec![item("widgets", 2, 50.0)]);
        let id = save_invoice(&mut conn, &req).unwrap();

        let invoice = get_invoice(&conn, id).unwrap().unwrap();
        assert_eq!(invoice.sub_total, 100.0);
        assert_eq!(invoice.total, 120.0);
        assert_eq!(invoice.tax, 20.0);
    }

    #[test]
    fn missing_invoice_is_none_not_error() {
        let conn = db::test_conn();
        assert!(get_invoice(&conn, 9999).unwrap().is_none());
    }

    #[test]
    fn failed_item_insert_rolls_back_the_invoice() {
        let mut conn = db::test_conn();
        // Tighten the items schema so the second item's insert fails.
        conn.execute_batch(
            "DROP TABLE invoice_items;
             CREATE TABLE invoice_items (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 invoice_id INTEGER,
                 date TEXT,
                 description TEXT,
                 qty INTEGER CHECK (qty > 0),
                 rate REAL,
                 amount REAL
             );",
        )
        .unwrap();

        let req = request(
            "INV-00003",
            "2025-01-12",
            vec![item("ok", 1, 10.0), item("bad", 0, 10.0)],
        );
        assert!(save_invoice(&mut conn, &req).is_err());

        // The whole write rolled back: no invoice row, no orphaned items.
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM invoices", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
        let items: i64 = conn
            .query_row("SELECT COUNT(*) FROM invoice_items", [], |row| row.get(0))
            .unwrap();
        assert_eq!(items, 0);
    }

    #[test]
    fn list_orders_by_invoice_date_descending() {
        let mut conn = db::test_conn();
        for (no, date) in [
            ("INV-a", "2025-01-05"),
            ("INV-b", "2025-03-01"),
            ("INV-c", "2025-02-14"),
        ] {
            save_invoice(&mut conn, &request(no, date, vec![item("x", 1, 1.0)])).unwrap();
        }

        let listed = list_invoices(&conn).unwrap();
        let numbers: Vec<&str> = listed.iter().map(|i| i.invoice_no.as_str()).collect();
        assert_eq!(numbers, vec!["INV-b", "INV-c", "INV-a"]);
    }

    #[test]
    fn history_paginates_with_ceiling_page_count() {
        let mut conn = db::test_conn();
        for n in 0..15 {
            let req = request(&format!("INV-{:05}", n), "2025-01-10", vec![item("x", 1, 1.0)]);
            save_invoice(&mut conn, &req).unwrap();
        }

        let page = invoice_history(&conn, 2, 10).unwrap();
        assert_eq!(page.total, 15);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.invoices.len(), 5);
        // Newest save first; page 2 holds the five oldest.
        assert_eq!(page.invoices[4].invoice_no, "INV-00000");
    }

    #[test]
    fn history_page_far_beyond_the_data_is_empty() {
        let mut conn = db::test_conn();
        let req = request("INV-1", "2025-01-10", vec![item("x", 1, 1.0)]);
        save_invoice(&mut conn, &req).unwrap();

        // The offset for a huge page number must not wrap; the page is
        // simply empty.
        let page = invoice_history(&conn, u32::MAX, 10).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.current_page, u32::MAX);
        assert!(page.invoices.is_empty());
    }

    #[test]
    fn history_pages_carry_items_and_snapshots() {
        let mut conn = db::test_conn();
        let req = request("INV-1", "2025-01-10", vec![item("a", 1, 5.0), item("b", 2, 2.5)]);
        save_invoice(&mut conn, &req).unwrap();

        let page = invoice_history(&conn, 1, 10).unwrap();
        assert_eq!(page.invoices.len(), 1);
        assert_eq!(page.invoices[0].items.len(), 2);
        assert_eq!(page.invoices[0].sender.name, "Acme");
    }
}
