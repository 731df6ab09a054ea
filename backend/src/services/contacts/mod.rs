//! # Contact Registry Service
//!
//! Senders and businesses are stored in two tables with identical columns and
//! share one list/save implementation, parameterized by [`Registry`]. Both
//! registries are append-only autofill sources: records are created and
//! listed, never updated or deleted, and duplicates are accepted silently.
//!
//! ## Registered Routes:
//!
//! *   **`GET /api/senders`** / **`GET /api/businesses`**:
//!     - **Handler**: `list::senders` / `list::businesses`
//!     - **Description**: Returns all saved records for the registry as a
//!       JSON array, newest first.
//!
//! *   **`POST /api/senders`** / **`POST /api/businesses`**:
//!     - **Handler**: `save::sender` / `save::business`
//!     - **Description**: Inserts one record exactly as submitted (no
//!       server-side validation) and echoes it back with the assigned id.

mod list;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const SENDERS_PATH: &str = "/api/senders";
const BUSINESSES_PATH: &str = "/api/businesses";

/// Which contact registry a request targets.
#[derive(Clone, Copy)]
pub enum Registry {
    Senders,
    Businesses,
}

impl Registry {
    /// Table name. Only ever one of two fixed identifiers, so it is safe to
    /// splice into SQL text.
    pub fn table(self) -> &'static str {
        match self {
            Registry::Senders => "senders",
            Registry::Businesses => "businesses",
        }
    }

    /// Singular noun for log and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Registry::Senders => "sender",
            Registry::Businesses => "business",
        }
    }
}

pub fn sender_routes() -> Scope {
    scope(SENDERS_PATH)
        .route("", get().to(list::senders))
        .route("", post().to(save::sender))
}

pub fn business_routes() -> Scope {
    scope(BUSINESSES_PATH)
        .route("", get().to(list::businesses))
        .route("", post().to(save::business))
}

#[cfg(test)]
mod tests {
    use super::list::list_contacts;
    use super::save::save_contact;
    use super::Registry;
    use crate::db;
    use common::model::contact::ContactDetails;

    fn acme() -> ContactDetails {
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
    fn saved_sender_reappears_on_list() {
        let conn = db::test_conn();
        let id = save_contact(&conn, Registry::Senders, &acme()).unwrap();

        let listed = list_contacts(&conn, Registry::Senders).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, Some(id));
        assert_eq!(listed[0].name, "Acme");
        assert_eq!(listed[0].address1, "1 Road");
        assert_eq!(listed[0].city, "Leeds");
        assert_eq!(listed[0].country, "UK");
        assert_eq!(listed[0].postcode, "LS1 1AA");
        assert_eq!(listed[0].email, "a@acme.com");
        assert!(listed[0].created_at.is_some());
    }

    #[test]
    fn registries_are_independent() {
        let conn = db::test_conn();
        save_contact(&conn, Registry::Senders, &acme()).unwrap();

        assert!(list_contacts(&conn, Registry::Businesses).unwrap().is_empty());
    }

    #[test]
    fn listing_is_newest_first() {
        let conn = db::test_conn();
        for name in ["first", "second", "third"] {
            let contact = ContactDetails {
                name: name.to_string(),
                ..acme()
            };
            save_contact(&conn, Registry::Businesses, &contact).unwrap();
        }

        let listed = list_contacts(&conn, Registry::Businesses).unwrap();
        let names: Vec<&str> = listed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["third", "second", "first"]);
    }

    #[test]
    fn duplicates_are_accepted() {
        let conn = db::test_conn();
        let first = save_contact(&conn, Registry::Senders, &acme()).unwrap();
        let second = save_contact(&conn, Registry::Senders, &acme()).unwrap();

        assert_ne!(first, second);
        assert_eq!(list_contacts(&conn, Registry::Senders).unwrap().len(), 2);
    }
}
