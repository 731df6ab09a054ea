pub mod bank_details;
pub mod contacts;
pub mod invoices;
