//! Utility functions for the invoice form: client-side validation, digit
//! sanitizing for the bank fields, invoice-number generation, and the toast
//! notifications used for save/load feedback.
//!
//! Validation happens entirely here, before any network call; the backend
//! stores whatever it is given.

use std::collections::HashMap;

use common::model::bank::BankDetails;
use common::model::contact::ContactDetails;
use regex::Regex;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::messages::{BankField, ContactField};

/// Required contact fields plus email/phone format checks, mirrored from the
/// dialog rules: name, address1, city, country, postcode and email must be
/// present; phone is optional but checked when given.
pub fn validate_contact(contact: &ContactDetails) -> HashMap<ContactField, String> {
    let mut errors = HashMap::new();

    let required = [
        (ContactField::Name, &contact.name),
        (ContactField::Address1, &contact.address1),
        (ContactField::City, &contact.city),
        (ContactField::Country, &contact.country),
        (ContactField::Postcode, &contact.postcode),
        (ContactField::Email, &contact.email),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            errors.insert(field, "This field is required".to_string());
        }
    }

    if !contact.email.is_empty() {
        let email_re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
        if !email_re.is_match(&contact.email) {
            errors.insert(ContactField::Email, "Invalid email format".to_string());
        }
    }

    if !contact.phone.is_empty() {
        let phone_re = Regex::new(r"^\+?[\d\s-]{10,}$").unwrap();
        if !phone_re.is_match(&contact.phone) {
            errors.insert(ContactField::Phone, "Invalid phone number".to_string());
        }
    }

    errors
}

/// Bank rules: 8-digit account, 6-digit sort code, account name of at least
/// two characters.
pub fn validate_bank(details: &BankDetails) -> HashMap<BankField, String> {
    let mut errors = HashMap::new();

    let account_re = Regex::new(r"^\d{8}$").unwrap();
    if !account_re.is_match(&details.account) {
        errors.insert(
            BankField::Account,
            "Account number must be 8 digits".to_string(),
        );
    }

    let sort_code_re = Regex::new(r"^\d{6}$").unwrap();
    if !sort_code_re.is_match(&details.sort_code) {
        errors.insert(BankField::SortCode, "Sort code must be 6 digits".to_string());
    }

    if details.account_name.chars().count() < 2 {
        errors.insert(
            BankField::AccountName,
            "Account name is required (minimum 2 characters)".to_string(),
        );
    }

    errors
}

/// Strips non-digits and truncates, applied as the user types into the
/// account and sort-code inputs.
pub fn sanitize_digits(value: &str, max_len: usize) -> String {
    value.chars().filter(char::is_ascii_digit).take(max_len).collect()
}

const INVOICE_NO_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A fresh invoice number: `INV-` plus five random alphanumerics.
pub fn generate_invoice_no() -> String {
    let mut output = String::from("INV-");
    for _ in 0..5 {
        let idx = (js_sys::Math::random() * INVOICE_NO_CHARSET.len() as f64) as usize;
        output.push(INVOICE_NO_CHARSET[idx.min(INVOICE_NO_CHARSET.len() - 1)] as char);
    }
    output
}

/// Displays a temporary notification at the bottom of the screen and removes
/// it after a few seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_contact() -> ContactDetails {
        ContactDetails {
            name: "Acme".to_string(),
            address1: "1 Road".to_string(),
            city: "Leeds".to_string(),
            country: "UK".to_string(),
            postcode: "LS1 1AA".to_string(),
            email: "a@acme.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn complete_contact_passes() {
        assert!(validate_contact(&full_contact()).is_empty());
    }

    #[test]
    fn missing_required_fields_are_reported() {
        let errors = validate_contact(&ContactDetails::default());
        assert_eq!(errors.len(), 6);
        assert_eq!(errors[&ContactField::Name], "This field is required");
    }

    #[test]
    fn bad_email_and_phone_are_rejected() {
        let mut contact = full_contact();
        contact.email = "not-an-email".to_string();
        contact.phone = "abc".to_string();
        let errors = validate_contact(&contact);
        assert_eq!(errors[&ContactField::Email], "Invalid email format");
        assert_eq!(errors[&ContactField::Phone], "Invalid phone number");
    }

    #[test]
    fn valid_bank_details_pass() {
        let details = BankDetails {
            account: "12345678".to_string(),
            sort_code: "123456".to_string(),
            account_name: "Acme Ltd".to_string(),
            ..Default::default()
        };
        assert!(validate_bank(&details).is_empty());
    }

    #[test]
    fn short_bank_fields_are_rejected() {
        let details = BankDetails {
            account: "123".to_string(),
            sort_code: "12a456".to_string(),
            account_name: "A".to_string(),
            ..Default::default()
        };
        let errors = validate_bank(&details);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn sanitize_strips_and_truncates() {
        assert_eq!(sanitize_digits("12-34-56", 6), "123456");
        assert_eq!(sanitize_digits("123456789", 8), "12345678");
        assert_eq!(sanitize_digits("abc", 8), "");
    }
}
