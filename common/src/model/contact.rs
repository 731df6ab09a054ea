use serde::{Deserialize, Serialize};

/// A reusable address-book entry, used for both the "sender" and the
/// "business" role on an invoice.
///
/// The backend stores senders and businesses in two separate tables with
/// identical columns, so one struct covers both. When an invoice is saved,
/// the chosen contact is embedded into the invoice row as a JSON snapshot;
/// later edits to the saved contact never touch past invoices.
///
/// `id` and `created_at` are assigned by the database and absent on create
/// payloads. Optional address parts (`address2`, `state`, `phone`) default to
/// empty strings rather than `Option`, so the form can bind them directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address1: String,
    #[serde(default)]
    pub address2: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
