//! Process wiring for the Trialex server: configuration, the top-level
//! router and shutdown handling.

use std::path::{Path, PathBuf};

use axum::Router;
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use trialex_core::{service::TrialService, store::TrialStore};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` layered
/// under `TRIALEX_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub database_path: PathBuf,
}

impl ServerConfig {
  /// Load from `path` (optional) and the environment, filling in defaults.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8000_i64)?
      .set_default("database_path", "trials.db")?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("TRIALEX"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Create the directory that will hold the database file, if missing.
pub fn ensure_parent_dir(database_path: &Path) -> std::io::Result<()> {
  match database_path.parent() {
    Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir),
    _ => Ok(()),
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The API router with per-request tracing.
pub fn router<S>(service: TrialService<S>) -> Router
where
  S: TrialStore + 'static,
{
  trialex_api::api_router(service).layer(TraceLayer::new_for_http())
}

/// Resolves on Ctrl-C so in-flight requests can drain.
pub async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!("failed to listen for shutdown signal: {e}");
    std::future::pending::<()>().await;
  }
  tracing::info!("shutting down");
}
