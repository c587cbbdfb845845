//! SQL schema for the Trialex SQLite store.
//!
//! Executed every time a connection is opened; safe to re-run against an
//! existing database.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT keeps ids from being handed out again after the row
-- holding the current maximum is deleted.
CREATE TABLE IF NOT EXISTS trials (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    official_title TEXT NOT NULL,
    acronym        TEXT,
    disease_area   TEXT NOT NULL,
    trial_phase    TEXT NOT NULL,
    status         TEXT NOT NULL,
    start_date     TEXT NOT NULL,   -- YYYY-MM-DD
    end_date       TEXT NOT NULL,   -- YYYY-MM-DD; may precede start_date
    country        TEXT NOT NULL,
    sponsor        TEXT NOT NULL,
    description    TEXT
);

CREATE INDEX IF NOT EXISTS trials_disease_area_idx ON trials(disease_area);
CREATE INDEX IF NOT EXISTS trials_status_idx       ON trials(status);
CREATE INDEX IF NOT EXISTS trials_country_idx      ON trials(country);

PRAGMA user_version = 1;
";
