//! SQL schema for the Campus SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Records are insert-only; no UPDATE or DELETE is ever issued through the
-- directory interface.
CREATE TABLE IF NOT EXISTS schools (
    school_id   TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    address     TEXT NOT NULL,
    city        TEXT NOT NULL,
    state       TEXT NOT NULL,
    contact     TEXT NOT NULL,
    email_id    TEXT NOT NULL,
    image       TEXT,            -- absolute URL or NULL
    created_at  TEXT NOT NULL,   -- ISO 8601 UTC; store-assigned
    updated_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS schools_created_idx ON schools(created_at);

PRAGMA user_version = 1;
";
