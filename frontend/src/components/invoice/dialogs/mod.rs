//! Picker dialogs used by the invoice form, each rendered inside a
//! [`TopSheet`](crate::top_sheet::TopSheet): one for the contact registries
//! (sender and business, sharing a single dialog) and one for bank details.

mod bank;
mod contact;

pub use bank::bank_dialog;
pub use contact::contact_dialog;
