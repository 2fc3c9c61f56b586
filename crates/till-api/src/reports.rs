//! Handlers for the Top-N report endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/items/top`  | Top 10 items by sales count, trailing calendar month |
//! | `GET`  | `/stores/top` | Top 10 stores by income, same window |
//!
//! The window is computed here, per request, from the current UTC date;
//! the store only ever sees a concrete instant.

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::Utc;
use till_core::{
  report::{TopItem, TopStore, report_window_start_at},
  store::LedgerStore,
};

use crate::error::ApiError;

/// `GET /items/top`
pub async fn top_items<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<TopItem>>, ApiError>
where
  S: LedgerStore,
{
  let window_start = report_window_start_at(Utc::now());
  let top = store
    .top_items(window_start)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(top))
}

/// `GET /stores/top`
pub async fn top_stores<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<TopStore>>, ApiError>
where
  S: LedgerStore,
{
  let window_start = report_window_start_at(Utc::now());
  let top = store
    .top_stores(window_start)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(top))
}
