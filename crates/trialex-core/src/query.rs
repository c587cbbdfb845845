//! Filter and pagination types for listing trials.
//!
//! A [`TrialQuery`] is split in two halves that are never mixed: the
//! [`TrialFilter`] decides *which* trials match (and therefore the total),
//! the [`Page`] only decides which slice of the matches is returned.

use serde::{Deserialize, Serialize};

use crate::trial::Trial;

/// Page size used when the caller does not supply one.
pub const DEFAULT_LIMIT: u32 = 10;

// ─── Filter ──────────────────────────────────────────────────────────────────

/// A trial field that can be used as an exact-match criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
  DiseaseArea,
  Status,
  Country,
}

/// Optional exact-match criteria, combined with AND.
///
/// `None` places no constraint on the field. `Some("")` is a real criterion
/// and only matches trials whose field is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrialFilter {
  pub disease_area: Option<String>,
  pub status:       Option<String>,
  pub country:      Option<String>,
}

impl TrialFilter {
  /// The supplied criteria, in a fixed field order.
  pub fn criteria(&self) -> impl Iterator<Item = (FilterField, &str)> {
    [
      (FilterField::DiseaseArea, self.disease_area.as_deref()),
      (FilterField::Status, self.status.as_deref()),
      (FilterField::Country, self.country.as_deref()),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.map(|v| (field, v)))
  }
}

// ─── Page ────────────────────────────────────────────────────────────────────

/// The window of matching trials to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
  pub limit:  u32,
  pub offset: u32,
}

impl Default for Page {
  fn default() -> Self { Self { limit: DEFAULT_LIMIT, offset: 0 } }
}

impl Page {
  /// Build a page, filling in the defaults for anything not supplied.
  pub fn new(limit: Option<u32>, offset: Option<u32>) -> Self {
    Self {
      limit:  limit.unwrap_or(DEFAULT_LIMIT),
      offset: offset.unwrap_or(0),
    }
  }
}

// ─── Query / result ──────────────────────────────────────────────────────────

/// Parameters for [`TrialService::list`](crate::service::TrialService::list).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrialQuery {
  pub filter: TrialFilter,
  pub page:   Page,
}

/// One page of a filtered listing.
///
/// `total` counts every trial matching the filter, independent of the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialPage {
  pub total:  u64,
  pub limit:  u32,
  pub offset: u32,
  pub data:   Vec<Trial>,
}
