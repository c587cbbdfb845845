//! Trial records — the single entity held by the registry.
//!
//! A trial is created with a store-assigned integer id and is only ever
//! mutated by a full replace of every other field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The mutable fields of a trial; the payload of both create and update.
///
/// Unknown keys (including `id`) are ignored on deserialisation, so a client
/// can never choose the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTrial {
  pub official_title: String,
  pub acronym:        Option<String>,
  pub disease_area:   String,
  pub trial_phase:    String,
  pub status:         String,
  pub start_date:     NaiveDate,
  /// Not required to fall on or after `start_date`.
  pub end_date:       NaiveDate,
  pub country:        String,
  pub sponsor:        String,
  pub description:    Option<String>,
}

impl NewTrial {
  /// Check the constraints serde cannot express.
  pub fn validate(&self) -> Result<()> {
    if self.official_title.trim().is_empty() {
      return Err(Error::Invalid("official_title must not be empty".into()));
    }
    Ok(())
  }

  /// Attach a store-assigned id.
  pub fn with_id(self, id: i64) -> Trial {
    Trial {
      id,
      official_title: self.official_title,
      acronym:        self.acronym,
      disease_area:   self.disease_area,
      trial_phase:    self.trial_phase,
      status:         self.status,
      start_date:     self.start_date,
      end_date:       self.end_date,
      country:        self.country,
      sponsor:        self.sponsor,
      description:    self.description,
    }
  }
}

/// A persisted trial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trial {
  pub id:             i64,
  pub official_title: String,
  pub acronym:        Option<String>,
  pub disease_area:   String,
  pub trial_phase:    String,
  pub status:         String,
  pub start_date:     NaiveDate,
  pub end_date:       NaiveDate,
  pub country:        String,
  pub sponsor:        String,
  pub description:    Option<String>,
}
