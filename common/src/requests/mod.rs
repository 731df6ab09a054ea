use serde::{Deserialize, Serialize};

use crate::model::bank::BankDetails;
use crate::model::contact::ContactDetails;
use crate::model::invoice::{Invoice, InvoiceDetails};

/// Request payload for `POST /api/invoices`.
///
/// The sender, business and bank details ride alongside the invoice header;
/// the backend freezes all three into the invoice row as JSON snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveInvoiceRequest {
    #[serde(rename = "invoiceDetails")]
    pub invoice_details: InvoiceDetails,
    pub sender: ContactDetails,
    pub business: ContactDetails,
    #[serde(rename = "bankDetails")]
    pub bank_details: BankDetails,
}

/// Response payload for `POST /api/invoices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveInvoiceResponse {
    pub message: String,
    #[serde(rename = "invoiceId")]
    pub invoice_id: i64,
}

/// Query parameters for `GET /api/invoices/history`.
/// Both default server-side: page 1, limit 10.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// One page of invoice history, ordered newest save first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPage {
    pub total: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    #[serde(rename = "currentPage")]
    pub current_page: u32,
    pub invoices: Vec<Invoice>,
}
