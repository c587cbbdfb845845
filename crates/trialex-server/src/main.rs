//! trialex-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite store, and serves the trial registry API over HTTP.
//!
//! # Checking the database
//!
//! To verify that the configured database can be opened (and bootstrapped)
//! without starting the server:
//!
//! ```
//! cargo run -p trialex-server -- --check
//! ```

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use trialex_core::service::TrialService;
use trialex_server::{ServerConfig, ensure_parent_dir, router, shutdown_signal};
use trialex_store_sqlite::SqliteStore;

#[derive(Parser)]
#[command(author, version, about = "Trialex clinical trial registry server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Database file to use instead of the configured `database_path`.
  #[arg(long, value_name = "PATH")]
  database: Option<PathBuf>,

  /// Open the database, report whether that succeeded, and exit.
  #[arg(long)]
  check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let mut server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;
  if let Some(database) = cli.database {
    server_cfg.database_path = database;
  }

  // Expand `~` in the database path.
  let database_path = expand_tilde(&server_cfg.database_path);

  ensure_parent_dir(&database_path)
    .with_context(|| format!("failed to create directory for {database_path:?}"))?;

  let store = SqliteStore::open(&database_path).await;

  if cli.check {
    return match store {
      Ok(_) => {
        tracing::info!("database {database_path:?} opened successfully");
        Ok(())
      }
      Err(e) => {
        tracing::error!("database {database_path:?} could not be opened: {e}");
        Err(e).context("database check failed")
      }
    };
  }

  let store = store.with_context(|| format!("failed to open store at {database_path:?}"))?;
  let service = TrialService::new(Arc::new(store));

  let app = router(service);
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
