//! SQL schema for the rolodex SQLite store.
//!
//! Executed on every open via `CREATE TABLE IF NOT EXISTS`, so startup
//! never destroys existing data. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Field-level constraints (lengths, email format) are enforced at the API
-- boundary; the table enforces presence and email uniqueness.
CREATE TABLE IF NOT EXISTS contacts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    surname     TEXT NOT NULL,
    email       TEXT NOT NULL UNIQUE,
    phone       TEXT NOT NULL,
    birth_date  TEXT NOT NULL,   -- ISO 8601 calendar date (YYYY-MM-DD)
    extra_info  TEXT
);

CREATE INDEX IF NOT EXISTS contacts_name_idx    ON contacts(name);
CREATE INDEX IF NOT EXISTS contacts_surname_idx ON contacts(surname);

PRAGMA user_version = 1;
";
