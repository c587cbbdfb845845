//! Rendering of a [`TrialFilter`] into SQL.
//!
//! `scan` and `count` are both built from one [`Predicate`], so the total a
//! listing reports always covers exactly the rows its pages are cut from.

use rusqlite::types::Value;
use trialex_core::query::{Page, TrialFilter};

use crate::encode::{COLUMNS, encode_field};

/// A `WHERE` clause with positional parameters, plus the values to bind.
#[derive(Debug, Clone)]
pub struct Predicate {
  clause: String,
  params: Vec<Value>,
}

impl Predicate {
  pub fn compose(filter: &TrialFilter) -> Self {
    let mut conds  = Vec::new();
    let mut params = Vec::new();

    for (field, value) in filter.criteria() {
      params.push(Value::Text(value.to_owned()));
      conds.push(format!("{} = ?{}", encode_field(field), params.len()));
    }

    let clause = if conds.is_empty() {
      String::new()
    } else {
      format!("WHERE {}", conds.join(" AND "))
    };

    Self { clause, params }
  }

  pub fn count_sql(&self) -> String {
    format!("SELECT COUNT(*) FROM trials {}", self.clause)
  }

  pub fn scan_sql(&self) -> String {
    let n = self.params.len();
    format!(
      "SELECT {COLUMNS} FROM trials {} ORDER BY id ASC LIMIT ?{} OFFSET ?{}",
      self.clause,
      n + 1,
      n + 2,
    )
  }

  pub fn count_params(&self) -> &[Value] { &self.params }

  /// Filter values followed by the page window.
  pub fn scan_params(&self, page: Page) -> Vec<Value> {
    let mut params = self.params.clone();
    params.push(Value::Integer(i64::from(page.limit)));
    params.push(Value::Integer(i64::from(page.offset)));
    params
  }
}
