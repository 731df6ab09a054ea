//! Local draft persistence.
//!
//! The in-progress invoice is mirrored to localStorage on every change and
//! reloaded on the next visit, so an unsaved invoice survives a page reload.
//! This is a convenience cache, not a system of record: it is cleared on
//! explicit Clear and on successful Save.

use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use common::model::bank::BankDetails;
use common::model::contact::ContactDetails;
use common::model::invoice::{InvoiceDetails, InvoiceItem};

use super::state::InvoiceFormComponent;

const DRAFT_KEY: &str = "invoice_draft";

#[derive(Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub items: Vec<InvoiceItem>,
    pub current_item: InvoiceItem,
    pub details: InvoiceDetails,
    pub sender: ContactDetails,
    pub business: ContactDetails,
    pub bank_details: BankDetails,
}

pub fn store(component: &InvoiceFormComponent) {
    let draft = InvoiceDraft {
        items: component.items.clone(),
        current_item: component.current_item.clone(),
        details: component.details.clone(),
        sender: component.sender.clone(),
        business: component.business.clone(),
        bank_details: component.bank_details.clone(),
    };
    if let Err(e) = LocalStorage::set(DRAFT_KEY, &draft) {
        gloo_console::error!(format!("Failed to persist invoice draft: {}", e));
    }
}

pub fn load() -> Option<InvoiceDraft> {
    LocalStorage::get(DRAFT_KEY).ok()
}

pub fn clear() {
    LocalStorage::delete(DRAFT_KEY);
}
