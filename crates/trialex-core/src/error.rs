//! Error types for `trialex-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("trial not found: {0}")]
  TrialNotFound(i64),

  #[error("invalid trial: {0}")]
  Invalid(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend error.
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
