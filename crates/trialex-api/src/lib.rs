//! JSON REST API for Trialex.
//!
//! Exposes an axum [`Router`] backed by a [`TrialService`] over any
//! [`trialex_core::store::TrialStore`]. Tracing layers, TLS and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .merge(trialex_api::api_router(service.clone()))
//! ```

pub mod error;
pub mod trials;

use axum::{Router, routing::get};
use trialex_core::{service::TrialService, store::TrialStore};

pub use error::ApiError;

/// Build a fully-materialised API router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(service: TrialService<S>) -> Router<()>
where
  S: TrialStore + 'static,
{
  Router::new()
    .route("/trials", get(trials::list::<S>).post(trials::create::<S>))
    .route(
      "/trials/{id}",
      get(trials::get_one::<S>)
        .put(trials::update::<S>)
        .delete(trials::delete_one::<S>),
    )
    .with_state(service)
}

// ─── Integration tests ────────────────────────────────────────────────────────
