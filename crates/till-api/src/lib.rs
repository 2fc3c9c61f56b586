//! JSON REST API for the Till sales ledger.
//!
//! Exposes an axum [`Router`] backed by any [`till_core::store::LedgerStore`].
//! Auth, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", till_api::api_router(store.clone()))
//! ```

pub mod catalog;
pub mod error;
pub mod reports;
pub mod sales;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use till_core::store::LedgerStore;

pub use error::ApiError;

#[cfg(test)]
mod tests;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: LedgerStore + Send + Sync + 'static,
{
  Router::new()
    // Catalog
    .route("/items", get(catalog::list_items::<S>))
    .route("/stores", get(catalog::list_stores::<S>))
    // Ledger
    .route("/sales", post(sales::create::<S>))
    // Reports
    .route("/items/top", get(reports::top_items::<S>))
    .route("/stores/top", get(reports::top_stores::<S>))
    .with_state(store)
}
