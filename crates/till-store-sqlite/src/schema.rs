//! SQL schema for the Till SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `foreign_keys` and `busy_timeout` are per-connection pragmas; they hold
/// for the lifetime of the store because `tokio_rusqlite` keeps a single
/// long-lived connection.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;
PRAGMA busy_timeout = 5000;

-- Catalog tables are written only through the seed path.
CREATE TABLE IF NOT EXISTS items (
    id     INTEGER PRIMARY KEY,
    name   TEXT NOT NULL,
    price  REAL NOT NULL CHECK (price >= 0)
);

CREATE TABLE IF NOT EXISTS stores (
    id       INTEGER PRIMARY KEY,
    address  TEXT NOT NULL
);

-- The ledger is strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS sales (
    id         INTEGER PRIMARY KEY,
    sale_time  TEXT NOT NULL,   -- ISO 8601 UTC; server-assigned
    item_id    INTEGER NOT NULL REFERENCES items(id),
    store_id   INTEGER NOT NULL REFERENCES stores(id)
);

CREATE INDEX IF NOT EXISTS sales_time_idx  ON sales(sale_time);
CREATE INDEX IF NOT EXISTS sales_item_idx  ON sales(item_id);
CREATE INDEX IF NOT EXISTS sales_store_idx ON sales(store_id);

PRAGMA user_version = 1;
";
