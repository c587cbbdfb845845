//! [`TrialService`] — the five registry operations on top of a [`TrialStore`].
//!
//! Update and delete check that the trial exists before writing. A trial that
//! disappears between the check and the write (a concurrent delete) is
//! reported as not found, exactly as if it had never existed.

use std::sync::Arc;

use tracing::{debug, info};

use crate::{
  Error, Result,
  query::{TrialPage, TrialQuery},
  store::TrialStore,
  trial::{NewTrial, Trial},
};

/// Orchestrates list/get/create/update/delete against a store.
///
/// Cloning is cheap — the store is reference-counted.
pub struct TrialService<S> {
  store: Arc<S>,
}

impl<S> Clone for TrialService<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: TrialStore> TrialService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  /// Count and fetch one page of trials matching `query.filter`.
  ///
  /// The total comes from a separate count over the same filter, never from
  /// the returned slice.
  pub async fn list(&self, query: &TrialQuery) -> Result<TrialPage> {
    let total = self.store.count(&query.filter).await.map_err(Error::store)?;
    let data = self
      .store
      .scan(&query.filter, query.page)
      .await
      .map_err(Error::store)?;

    debug!(total, returned = data.len(), "listed trials");
    Ok(TrialPage {
      total,
      limit: query.page.limit,
      offset: query.page.offset,
      data,
    })
  }

  pub async fn get(&self, id: i64) -> Result<Trial> {
    self
      .store
      .find_by_id(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::TrialNotFound(id))
  }

  pub async fn create(&self, input: NewTrial) -> Result<Trial> {
    let trial = self.store.insert(input).await.map_err(Error::store)?;
    info!(id = trial.id, "trial created");
    Ok(trial)
  }

  /// Replace every mutable field of trial `id` with `input`.
  pub async fn update(&self, id: i64, input: NewTrial) -> Result<Trial> {
    self.get(id).await?;

    let trial = self
      .store
      .replace(id, input)
      .await
      .map_err(Error::store)?
      .ok_or(Error::TrialNotFound(id))?;
    info!(id, "trial updated");
    Ok(trial)
  }

  pub async fn delete(&self, id: i64) -> Result<()> {
    self.get(id).await?;

    if !self.store.delete_by_id(id).await.map_err(Error::store)? {
      return Err(Error::TrialNotFound(id));
    }
    info!(id, "trial deleted");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;
  use crate::query::{Page, TrialFilter};

  fn input() -> NewTrial {
    NewTrial {
      official_title: "A Study on Cognitive Enhancement".into(),
      acronym:        None,
      disease_area:   "Neurology".into(),
      trial_phase:    "Phase II".into(),
      status:         "Ongoing".into(),
      start_date:     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
      end_date:       NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
      country:        "Germany".into(),
      sponsor:        "European Brain Institute".into(),
      description:    None,
    }
  }

  /// Finds every id, but the row is gone by the time it is written.
  struct Vanishing;

  impl TrialStore for Vanishing {
    type Error = std::io::Error;

    async fn insert(&self, input: NewTrial) -> Result<Trial, Self::Error> {
      Ok(input.with_id(1))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Trial>, Self::Error> {
      Ok(Some(input().with_id(id)))
    }

    async fn replace(
      &self,
      _id: i64,
      _input: NewTrial,
    ) -> Result<Option<Trial>, Self::Error> {
      Ok(None)
    }

    async fn delete_by_id(&self, _id: i64) -> Result<bool, Self::Error> {
      Ok(false)
    }

    async fn scan<'a>(
      &'a self,
      _filter: &'a TrialFilter,
      _page: Page,
    ) -> Result<Vec<Trial>, Self::Error> {
      Ok(Vec::new())
    }

    async fn count<'a>(&'a self, _filter: &'a TrialFilter) -> Result<u64, Self::Error> {
      Ok(0)
    }
  }

  /// Every operation fails.
  struct Broken;

  fn fault() -> std::io::Error { std::io::Error::other("disk unavailable") }

  impl TrialStore for Broken {
    type Error = std::io::Error;

    async fn insert(&self, _input: NewTrial) -> Result<Trial, Self::Error> { Err(fault()) }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Trial>, Self::Error> {
      Err(fault())
    }

    async fn replace(
      &self,
      _id: i64,
      _input: NewTrial,
    ) -> Result<Option<Trial>, Self::Error> {
      Err(fault())
    }

    async fn delete_by_id(&self, _id: i64) -> Result<bool, Self::Error> { Err(fault()) }

    async fn scan<'a>(
      &'a self,
      _filter: &'a TrialFilter,
      _page: Page,
    ) -> Result<Vec<Trial>, Self::Error> {
      Err(fault())
    }

    async fn count<'a>(&'a self, _filter: &'a TrialFilter) -> Result<u64, Self::Error> {
      Err(fault())
    }
  }

  #[tokio::test]
  async fn update_of_vanished_trial_is_not_found() {
    let svc = TrialService::new(Arc::new(Vanishing));
    let res = svc.update(7, input()).await;
    assert!(matches!(res, Err(Error::TrialNotFound(7))));
  }

  #[tokio::test]
  async fn delete_of_vanished_trial_is_not_found() {
    let svc = TrialService::new(Arc::new(Vanishing));
    let res = svc.delete(7).await;
    assert!(matches!(res, Err(Error::TrialNotFound(7))));
  }

  #[tokio::test]
  async fn store_faults_surface_as_store_errors() {
    let svc = TrialService::new(Arc::new(Broken));
    assert!(matches!(svc.list(&TrialQuery::default()).await, Err(Error::Store(_))));
    assert!(matches!(svc.get(1).await, Err(Error::Store(_))));
    assert!(matches!(svc.create(input()).await, Err(Error::Store(_))));
    assert!(matches!(svc.update(1, input()).await, Err(Error::Store(_))));
    assert!(matches!(svc.delete(1).await, Err(Error::Store(_))));
  }
}
