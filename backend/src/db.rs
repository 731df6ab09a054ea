//! SQLite setup for the invoice store.
//!
//! The database lives in a fixed file next to the binary. Every handler opens
//! its own connection; the schema is created once at startup. Store functions
//! elsewhere in `services` take a `&Connection` so tests can run them against
//! in-memory databases.

use rusqlite::Connection;

/// Fixed database file path, relative to the working directory.
pub const DB_PATH: &str = "invoicer.sqlite";

/// Schema for the five tables. Sender, business and bank details are frozen
/// into the invoice row as JSON text at save time; the registries themselves
/// are independent autofill sources, never referenced by foreign key.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS invoices (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    invoiceNo TEXT,
    invoiceDate TEXT,
    dueDate TEXT,
    date TEXT,
    recipient TEXT,
    sender TEXT,
    business TEXT,
    bank_details TEXT,
    tax REAL,
    subTotal REAL,
    total REAL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS invoice_items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    invoice_id INTEGER,
    date TEXT,
    description TEXT,
    qty INTEGER,
    rate REAL,
    amount REAL,
    FOREIGN KEY(invoice_id) REFERENCES invoices(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS senders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    address1 TEXT,
    address2 TEXT,
    city TEXT,
    state TEXT,
    country TEXT,
    postcode TEXT,
    email TEXT,
    phone TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS businesses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    address1 TEXT,
    address2 TEXT,
    city TEXT,
    state TEXT,
    country TEXT,
    postcode TEXT,
    email TEXT,
    phone TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS bank_details (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    account TEXT,
    sort_code TEXT,
    account_name TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);
";

/// Opens a connection to the fixed database file with foreign keys enabled.
pub fn open() -> Result<Connection, String> {
    let conn = Connection::open(DB_PATH).map_err(|e| e.to_string())?;
    conn.pragma_update(None, "foreign_keys", true)
        .map_err(|e| e.to_string())?;
    Ok(conn)
}

/// Creates the tables if they do not exist yet. Called once at startup.
pub fn init(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(SCHEMA).map_err(|e| e.to_string())
}

/// Fresh in-memory database with the full schema, for store tests.
#[cfg(test)]
pub fn test_conn() -> Connection {
    let conn = Connection::open_in_memory().expect("in-memory database");
    conn.pragma_update(None, "foreign_keys", true)
        .expect("enable foreign keys");
    init(&conn).expect("create schema");
    conn
}
