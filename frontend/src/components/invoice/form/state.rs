//! State container for the invoice form.
//!
//! Fields are `pub` because they are accessed by the `view`, `update` and
//! dialog modules.

use std::collections::HashMap;

use common::model::bank::BankDetails;
use common::model::contact::ContactDetails;
use common::model::invoice::{Invoice, InvoiceDetails, InvoiceItem};
use yew::NodeRef;

use super::draft::InvoiceDraft;
use super::messages::{BankField, ContactField, ContactRole};

pub struct InvoiceFormComponent {
    /// Committed line items.
    pub items: Vec<InvoiceItem>,
    /// The item being typed into the "add item" row.
    pub current_item: InvoiceItem,
    /// Invoice header plus derived totals.
    pub details: InvoiceDetails,
    /// Contacts and bank details as they will be frozen into the invoice.
    pub sender: ContactDetails,
    pub business: ContactDetails,
    pub bank_details: BankDetails,

    /// Registry lists fetched when a dialog opens.
    pub saved_senders: Vec<ContactDetails>,
    pub saved_businesses: Vec<ContactDetails>,
    pub saved_bank_details: Vec<BankDetails>,

    /// Which registry the (single, reused) contact dialog is editing.
    pub dialog_role: ContactRole,
    /// Inline validation errors for the open dialog.
    pub contact_errors: HashMap<ContactField, String>,
    pub bank_errors: HashMap<BankField, String>,
    /// Network request in flight for the open dialog (disables its buttons).
    pub dialog_busy: bool,
    /// Validation message under the "add item" row.
    pub item_error: Option<String>,

    /// "Load invoice" side panel.
    pub saved_invoices: Vec<Invoice>,
    pub show_invoice_list: bool,
    pub loading_invoices: bool,

    pub contact_dialog_ref: NodeRef,
    pub bank_dialog_ref: NodeRef,
}

impl InvoiceFormComponent {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            current_item: InvoiceItem::default(),
            details: InvoiceDetails::default(),
            sender: ContactDetails::default(),
            business: ContactDetails::default(),
            bank_details: BankDetails::default(),
            saved_senders: Vec::new(),
            saved_businesses: Vec::new(),
            saved_bank_details: Vec::new(),
            dialog_role: ContactRole::Sender,
            contact_errors: HashMap::new(),
            bank_errors: HashMap::new(),
            dialog_busy: false,
            item_error: None,
            saved_invoices: Vec::new(),
            show_invoice_list: false,
            loading_invoices: false,
            contact_dialog_ref: NodeRef::default(),
            bank_dialog_ref: NodeRef::default(),
        }
    }

    /// The contact the open dialog is editing.
    pub fn active_contact(&self) -> &ContactDetails {
        match self.dialog_role {
            ContactRole::Sender => &self.sender,
            ContactRole::Business => &self.business,
        }
    }

    pub fn active_contact_mut(&mut self) -> &mut ContactDetails {
        match self.dialog_role {
            ContactRole::Sender => &mut self.sender,
            ContactRole::Business => &mut self.business,
        }
    }

    pub fn active_saved_contacts(&self) -> &[ContactDetails] {
        match self.dialog_role {
            ContactRole::Sender => &self.saved_senders,
            ContactRole::Business => &self.saved_businesses,
        }
    }

    /// Restores a previously persisted draft.
    pub fn restore(&mut self, draft: InvoiceDraft) {
        self.items = draft.items;
        self.current_item = draft.current_item;
        self.details = draft.details;
        self.sender = draft.sender;
        self.business = draft.business;
        self.bank_details = draft.bank_details;
    }

    /// Resets every editable piece of state (clear and post-save paths).
    pub fn reset(&mut self) {
        self.items.clear();
        self.current_item = InvoiceItem::default();
        self.details = InvoiceDetails::default();
        self.sender = ContactDetails::default();
        self.business = ContactDetails::default();
        self.bank_details = BankDetails::default();
        self.contact_errors.clear();
        self.bank_errors.clear();
        self.item_error = None;
    }
}
