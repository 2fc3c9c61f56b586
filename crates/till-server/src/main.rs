//! till-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens an
//! in-process SQLite store, and serves the sales-ledger JSON API over HTTP.
//!
//! # Catalog seeding
//!
//! Items and stores are created outside the HTTP surface. To load a catalog
//! before serving:
//!
//! ```text
//! cargo run -p till-server -- --seed catalog.json
//! ```
//!
//! where `catalog.json` looks like:
//!
//! ```json
//! {
//!   "items":  [{ "name": "Widget", "price": 9.99 }],
//!   "stores": [{ "address": "Main St" }]
//! }
//! ```

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use serde::Deserialize;
use till_core::{
  catalog::{NewItem, NewStore},
  store::LedgerStore,
};
use till_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// `TILL_*` environment. Every field has a default so the server runs with
/// no config file at all.
#[derive(Debug, Clone, Deserialize)]
struct ServerConfig {
  #[serde(default = "default_host")]
  host:       String,
  #[serde(default = "default_port")]
  port:       u16,
  #[serde(default = "default_store_path")]
  store_path: PathBuf,
}

fn default_host() -> String { "127.0.0.1".to_owned() }
fn default_port() -> u16 { 8080 }
fn default_store_path() -> PathBuf { PathBuf::from("till.db") }

// ─── Seed file ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SeedFile {
  #[serde(default)]
  items:  Vec<NewItem>,
  #[serde(default)]
  stores: Vec<NewStore>,
}

async fn apply_seed(store: &SqliteStore, path: &Path) -> anyhow::Result<()> {
  let raw = std::fs::read_to_string(path)
    .with_context(|| format!("failed to read seed file {path:?}"))?;
  let seed: SeedFile =
    serde_json::from_str(&raw).context("failed to parse seed file")?;

  let (n_items, n_stores) = (seed.items.len(), seed.stores.len());
  for item in seed.items {
    store
      .add_item(item)
      .await
      .map_err(|e| anyhow::anyhow!("seed item rejected: {e}"))?;
  }
  for shop in seed.stores {
    store
      .add_store(shop)
      .await
      .map_err(|e| anyhow::anyhow!("seed store rejected: {e}"))?;
  }

  tracing::info!("Seeded {n_items} item(s) and {n_stores} store(s)");
  Ok(())
}

// ─── Entry point ─────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(author, version, about = "Till sales-ledger reporting server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Load items and stores from a JSON catalog file before serving.
  #[arg(long)]
  seed: Option<PathBuf>,
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

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("TILL"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Expand `~` in store path.
  let store_path = expand_tilde(&server_cfg.store_path);

  // Open SQLite store.
  let store = SqliteStore::open(&store_path)
    .await
    .map_err(|e| anyhow::anyhow!("failed to open store at {store_path:?}: {e}"))?;

  if let Some(seed_path) = &cli.seed {
    apply_seed(&store, seed_path).await?;
  }

  let app = till_api::api_router(Arc::new(store))
    .layer(TraceLayer::new_for_http());
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
