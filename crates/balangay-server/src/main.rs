//! Balangay registry server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens an
//! in-process SQLite store, and serves the resident registry API over HTTP.
//! Every setting can also come from the environment with a `BALANGAY_`
//! prefix (e.g. `BALANGAY_PORT=9090`).

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use balangay_api::ApiContext;
use balangay_store_sqlite::SqliteStore;
use clap::Parser;
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Balangay resident registry server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

/// Runtime server configuration, deserialised from `config.toml` merged with
/// `BALANGAY_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
struct ServerConfig {
  #[serde(default = "default_host")]
  host:       String,
  #[serde(default = "default_port")]
  port:       u16,
  #[serde(default = "default_store_path")]
  store_path: PathBuf,
  #[serde(default = "default_backup_dir")]
  backup_dir: PathBuf,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }
fn default_store_path() -> PathBuf { PathBuf::from("balangay.db") }
fn default_backup_dir() -> PathBuf { PathBuf::from("backups") }

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

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("BALANGAY"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Expand `~` in filesystem paths.
  let store_path = expand_tilde(&server_cfg.store_path);
  let backup_dir = expand_tilde(&server_cfg.backup_dir);

  // Open SQLite store.
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  // Build application state — the store client is injected here, once.
  let ctx = ApiContext {
    store: Arc::new(store),
    backup_dir,
  };

  let app = balangay_api::api_router(ctx).layer(TraceLayer::new_for_http());
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

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
