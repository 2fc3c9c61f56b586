//! The `LedgerStore` trait — the core-to-storage boundary.
//!
//! The trait is implemented by storage backends (e.g. `till-store-sqlite`).
//! Higher layers (`till-api`, `till-server`) depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::{
  catalog::{Item, NewItem, NewStore, Store},
  report::{TopItem, TopStore},
  sale::{NewSale, Sale},
};

/// Abstraction over a sales-ledger backend.
///
/// Sales are append-only; catalog rows are written once through the seed
/// path and read-only afterwards. All reads are set-returning: "no rows"
/// is an empty `Vec`, never an error.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`). Backend error
/// types must classify into [`crate::Error`] (the `Into` bound) so the
/// validation/availability distinction survives the boundary.
pub trait LedgerStore: Send + Sync {
  type Error: std::error::Error + Into<crate::Error> + Send + Sync + 'static;

  // ── Catalog reads ─────────────────────────────────────────────────────

  /// List every item, in natural storage order (ascending id).
  fn list_items(
    &self,
  ) -> impl Future<Output = Result<Vec<Item>, Self::Error>> + Send + '_;

  /// List every store, in natural storage order (ascending id).
  fn list_stores(
    &self,
  ) -> impl Future<Output = Result<Vec<Store>, Self::Error>> + Send + '_;

  // ── Catalog seeding ───────────────────────────────────────────────────

  /// Create an item and return it with its assigned id. Not exposed over
  /// HTTP; used by the seed path and tests.
  fn add_item(
    &self,
    input: NewItem,
  ) -> impl Future<Output = Result<Item, Self::Error>> + Send + '_;

  /// Create a store and return it with its assigned id.
  fn add_store(
    &self,
    input: NewStore,
  ) -> impl Future<Output = Result<Store, Self::Error>> + Send + '_;

  // ── Sale recording ────────────────────────────────────────────────────

  /// Append one sale. The `sale_time` is assigned by the store at insert
  /// time. A dangling item/store reference fails the insert and surfaces
  /// as [`crate::Error::Validation`]; nothing is written in that case.
  fn record_sale(
    &self,
    input: NewSale,
  ) -> impl Future<Output = Result<Sale, Self::Error>> + Send + '_;

  // ── Top-N reports ─────────────────────────────────────────────────────

  /// Top items by sales count inside the window `[window_start, ∞)`,
  /// ordered by count descending then item id ascending, at most
  /// [`crate::report::TOP_LIMIT`] rows.
  fn top_items(
    &self,
    window_start: DateTime<Utc>,
  ) -> impl Future<Output = Result<Vec<TopItem>, Self::Error>> + Send + '_;

  /// Top stores by income inside the window, income being the sum of the
  /// current price of every item sold there. Ordered by income descending
  /// then store id ascending, at most [`crate::report::TOP_LIMIT`] rows.
  fn top_stores(
    &self,
    window_start: DateTime<Utc>,
  ) -> impl Future<Output = Result<Vec<TopStore>, Self::Error>> + Send + '_;
}
