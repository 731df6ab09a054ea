use serde::{Deserialize, Serialize};

/// Saved bank details for the payment section of an invoice.
///
/// `account` is expected to be 8 digits and `sort_code` 6 digits; both rules
/// are enforced by the dialog on the client, never by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub sort_code: String,
    #[serde(default)]
    pub account_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
