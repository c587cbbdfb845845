//! The `TrialStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `trialex-store-sqlite`).
//! Higher layers (`trialex-api`, `trialex-server`) depend on this abstraction
//! through [`TrialService`](crate::service::TrialService), not on any concrete
//! backend.

use std::future::Future;

use crate::{
  query::{Page, TrialFilter},
  trial::{NewTrial, Trial},
};

/// Abstraction over a trial store backend.
///
/// `insert`, `replace` and `delete_by_id` are each one atomic unit of work:
/// either fully applied or not applied at all.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait TrialStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new trial and return it with its store-assigned id.
  ///
  /// Ids are never reused, even after the trial holding one is deleted.
  fn insert(
    &self,
    trial: NewTrial,
  ) -> impl Future<Output = Result<Trial, Self::Error>> + Send + '_;

  /// Retrieve a trial by id. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Trial>, Self::Error>> + Send + '_;

  /// Overwrite every mutable field of trial `id`.
  ///
  /// Returns `None` if no trial had that id, in which case nothing was
  /// written.
  fn replace(
    &self,
    id: i64,
    trial: NewTrial,
  ) -> impl Future<Output = Result<Option<Trial>, Self::Error>> + Send + '_;

  /// Delete trial `id`. Returns `true` if it existed.
  fn delete_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Return the trials matching `filter`, ordered by ascending id, windowed
  /// by `page`.
  fn scan<'a>(
    &'a self,
    filter: &'a TrialFilter,
    page: Page,
  ) -> impl Future<Output = Result<Vec<Trial>, Self::Error>> + Send + 'a;

  /// Count every trial matching `filter`. Must apply exactly the predicate
  /// [`scan`](Self::scan) applies.
  fn count<'a>(
    &'a self,
    filter: &'a TrialFilter,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + 'a;
}
