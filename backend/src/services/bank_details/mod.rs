//! Bank details registry: list and create saved payment details.
//!
//! Same append-only contract as the contact registries. The 8-digit account
//! and 6-digit sort-code rules are enforced by the dialog on the client; the
//! store keeps whatever it is given.

mod list;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/bank-details";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(save::process))
}

#[cfg(test)]
mod tests {
    use super::list::list_bank_details;
    use super::save::save_bank_details;
    use crate::db;
    use common::model::bank::BankDetails;

    #[test]
    fn saved_details_reappear_on_list() {
        let conn = db::test_conn();
        let details = BankDetails {
            account: "12345678".to_string(),
            sort_code: "123456".to_string(),
            account_name: "Acme Ltd".to_string(),
            ..Default::default()
        };
        let id = save_bank_details(&conn, &details).unwrap();

        let listed = list_bank_details(&conn).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, Some(id));
        assert_eq!(listed[0].account, "12345678");
        assert_eq!(listed[0].sort_code, "123456");
        assert_eq!(listed[0].account_name, "Acme Ltd");
    }

    #[test]
    fn malformed_input_is_stored_as_provided() {
        // Digit-length rules are a client concern only.
        let conn = db::test_conn();
        let details = BankDetails {
            account: "not-a-number".to_string(),
            sort_code: "12".to_string(),
            account_name: String::new(),
            ..Default::default()
        };
        save_bank_details(&conn, &details).unwrap();

        let listed = list_bank_details(&conn).unwrap();
        assert_eq!(listed[0].account, "not-a-number");
        assert_eq!(listed[0].sort_code, "12");
        assert_eq!(listed[0].account_name, "");
    }

    #[test]
    fn listing_is_newest_first() {
        let conn = db::test_conn();
        for name in ["one", "two"] {
            let details = BankDetails {
                account: "12345678".to_string(),
                sort_code: "123456".to_string(),
                account_name: name.to_string(),
                ..Default::default()
            };
            save_bank_details(&conn, &details).unwrap();
        }

        let listed = list_bank_details(&conn).unwrap();
        assert_eq!(listed[0].account_name, "two");
        assert_eq!(listed[1].account_name, "one");
    }
}
