//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Calendar dates are stored as `YYYY-MM-DD` strings.

use chrono::NaiveDate;
use rusqlite::types::Value;
use trialex_core::{
  query::FilterField,
  trial::{NewTrial, Trial},
};

use crate::{Error, Result};

/// Column list shared by every `SELECT` against `trials`, in [`RawTrial`]
/// field order.
pub const COLUMNS: &str = "id, official_title, acronym, disease_area, trial_phase, \
                           status, start_date, end_date, country, sponsor, description";

// ─── NaiveDate ───────────────────────────────────────────────────────────────

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── FilterField ─────────────────────────────────────────────────────────────

/// The column a filter criterion constrains. Only these fixed names are ever
/// interpolated into SQL.
pub fn encode_field(f: FilterField) -> &'static str {
  match f {
    FilterField::DiseaseArea => "disease_area",
    FilterField::Status => "status",
    FilterField::Country => "country",
  }
}

// ─── NewTrial ────────────────────────────────────────────────────────────────

/// Bind values for the ten mutable columns, in [`COLUMNS`] order (without
/// `id`). Used as `?1`..`?10` by both `INSERT` and `UPDATE`.
pub fn encode_new_trial(t: &NewTrial) -> Vec<Value> {
  vec![
    Value::Text(t.official_title.clone()),
    t.acronym.clone().map_or(Value::Null, Value::Text),
    Value::Text(t.disease_area.clone()),
    Value::Text(t.trial_phase.clone()),
    Value::Text(t.status.clone()),
    Value::Text(encode_date(t.start_date)),
    Value::Text(encode_date(t.end_date)),
    Value::Text(t.country.clone()),
    Value::Text(t.sponsor.clone()),
    t.description.clone().map_or(Value::Null, Value::Text),
  ]
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `trials` row.
pub struct RawTrial {
  pub id:             i64,
  pub official_title: String,
  pub acronym:        Option<String>,
  pub disease_area:   String,
  pub trial_phase:    String,
  pub status:         String,
  pub start_date:     String,
  pub end_date:       String,
  pub country:        String,
  pub sponsor:        String,
  pub description:    Option<String>,
}

impl RawTrial {
  /// Map a row selected with [`COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawTrial {
      id:             row.get(0)?,
      official_title: row.get(1)?,
      acronym:        row.get(2)?,
      disease_area:   row.get(3)?,
      trial_phase:    row.get(4)?,
      status:         row.get(5)?,
      start_date:     row.get(6)?,
      end_date:       row.get(7)?,
      country:        row.get(8)?,
      sponsor:        row.get(9)?,
      description:    row.get(10)?,
    })
  }

  pub fn into_trial(self) -> Result<Trial> {
    Ok(Trial {
      id:             self.id,
      official_title: self.official_title,
      acronym:        self.acronym,
      disease_area:   self.disease_area,
      trial_phase:    self.trial_phase,
      status:         self.status,
      start_date:     decode_date(&self.start_date)?,
      end_date:       decode_date(&self.end_date)?,
      country:        self.country,
      sponsor:        self.sponsor,
      description:    self.description,
    })
  }
}
