use serde::{Deserialize, Serialize};

use crate::model::bank::BankDetails;
use crate::model::contact::ContactDetails;

/// A single line item on an invoice.
///
/// `amount` is denormalized (`qty * rate`), recomputed on the client on every
/// edit and trusted as given when the invoice is written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<i64>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub qty: i64,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub amount: f64,
}

/// The editable invoice header plus its items, as assembled by the form.
///
/// Field names follow the wire format of the HTTP API (camelCase for the
/// invoice header, matching the `invoices` table columns).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDetails {
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
    #[serde(rename = "invoiceNo", default)]
    pub invoice_no: String,
    #[serde(rename = "invoiceDate", default)]
    pub invoice_date: String,
    #[serde(rename = "dueDate", default)]
    pub due_date: String,
    #[serde(default)]
    pub recipient: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tax: f64,
    #[serde(rename = "subTotal", default)]
    pub sub_total: f64,
    #[serde(default)]
    pub total: f64,
}

/// A fully persisted invoice as returned by the read endpoints.
///
/// The `sender`, `business` and `bank_details` fields are point-in-time
/// snapshots decoded from the JSON blobs stored inside the invoice row; they
/// are owned copies, not references into the contact/bank registries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "invoiceNo", default)]
    pub invoice_no: String,
    #[serde(rename = "invoiceDate", default)]
    pub invoice_date: String,
    #[serde(rename = "dueDate", default)]
    pub due_date: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub recipient: String,
    #[serde(default)]
    pub sender: ContactDetails,
    #[serde(default)]
    pub business: ContactDetails,
    #[serde(rename = "bankDetails", default)]
    pub bank_details: BankDetails,
    #[serde(default)]
    pub tax: f64,
    #[serde(rename = "subTotal", default)]
    pub sub_total: f64,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
