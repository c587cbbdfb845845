//! [`SqliteStore`] — the SQLite implementation of [`TrialStore`].
//!
//! Every write runs inside its own transaction, opened and finished within a
//! single `call` on the connection thread. An early return drops the
//! transaction, which rolls it back.

use std::path::Path;

use rusqlite::{OptionalExtension as _, params_from_iter, types::Value};
use tracing::debug;

use trialex_core::{
  query::{Page, TrialFilter},
  store::TrialStore,
  trial::{NewTrial, Trial},
};

use crate::{
  Result,
  encode::{COLUMNS, RawTrial, encode_new_trial},
  predicate::Predicate,
  schema::SCHEMA,
};

const INSERT_SQL: &str = "INSERT INTO trials (
    official_title, acronym, disease_area, trial_phase, status,
    start_date, end_date, country, sponsor, description
  ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";

const UPDATE_SQL: &str = "UPDATE trials SET
    official_title = ?1, acronym = ?2, disease_area = ?3, trial_phase = ?4,
    status = ?5, start_date = ?6, end_date = ?7, country = ?8, sponsor = ?9,
    description = ?10
  WHERE id = ?11";

const DELETE_SQL: &str = "DELETE FROM trials WHERE id = ?1";

fn select_by_id_sql() -> String { format!("SELECT {COLUMNS} FROM trials WHERE id = ?1") }

// ─── Store ───────────────────────────────────────────────────────────────────

/// A trial store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── TrialStore impl ─────────────────────────────────────────────────────────

impl TrialStore for SqliteStore {
  type Error = crate::Error;

  async fn insert(&self, trial: NewTrial) -> Result<Trial> {
    let params = encode_new_trial(&trial);
    debug!(sql = INSERT_SQL, "insert trial");

    let id = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(INSERT_SQL, params_from_iter(params.iter()))?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
      })
      .await?;

    Ok(trial.with_id(id))
  }

  async fn find_by_id(&self, id: i64) -> Result<Option<Trial>> {
    let sql = select_by_id_sql();
    debug!(%sql, id, "find trial");

    let raw: Option<RawTrial> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id], RawTrial::from_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawTrial::into_trial).transpose()
  }

  async fn replace(&self, id: i64, trial: NewTrial) -> Result<Option<Trial>> {
    let mut params = encode_new_trial(&trial);
    params.push(Value::Integer(id));
    let select_sql = select_by_id_sql();
    debug!(sql = UPDATE_SQL, id, "replace trial");

    let raw: Option<RawTrial> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        if tx.execute(UPDATE_SQL, params_from_iter(params.iter()))? == 0 {
          return Ok(None);
        }
        let raw = tx.query_row(&select_sql, rusqlite::params![id], RawTrial::from_row)?;
        tx.commit()?;
        Ok(Some(raw))
      })
      .await?;

    raw.map(RawTrial::into_trial).transpose()
  }

  async fn delete_by_id(&self, id: i64) -> Result<bool> {
    debug!(sql = DELETE_SQL, id, "delete trial");

    let removed = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let removed = tx.execute(DELETE_SQL, rusqlite::params![id])?;
        tx.commit()?;
        Ok(removed)
      })
      .await?;

    Ok(removed > 0)
  }

  async fn scan(&self, filter: &TrialFilter, page: Page) -> Result<Vec<Trial>> {
    let predicate = Predicate::compose(filter);
    let sql       = predicate.scan_sql();
    let params    = predicate.scan_params(page);
    debug!(%sql, "scan trials");

    let raws: Vec<RawTrial> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(params_from_iter(params.iter()), RawTrial::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawTrial::into_trial).collect()
  }

  async fn count(&self, filter: &TrialFilter) -> Result<u64> {
    let predicate = Predicate::compose(filter);
    let sql       = predicate.count_sql();
    let params    = predicate.count_params().to_vec();
    debug!(%sql, "count trials");

    let n: i64 = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(&sql, params_from_iter(params.iter()), |row| row.get(0))?)
      })
      .await?;

    Ok(n as u64)
  }
}
