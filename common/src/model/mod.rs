pub mod bank;
pub mod contact;
pub mod invoice;
