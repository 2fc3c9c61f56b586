//! Handlers for the catalog listing endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/items`  | Full catalog, ascending id |
//! | `GET`  | `/stores` | Full catalog, ascending id |

use std::sync::Arc;

use axum::{Json, extract::State};
use till_core::{
  catalog::{Item, Store},
  store::LedgerStore,
};

use crate::error::ApiError;

/// `GET /items`
pub async fn list_items<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Item>>, ApiError>
where
  S: LedgerStore,
{
  let items = store.list_items().await.map_err(ApiError::from_store)?;
  Ok(Json(items))
}

/// `GET /stores`
pub async fn list_stores<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Store>>, ApiError>
where
  S: LedgerStore,
{
  let stores = store.list_stores().await.map_err(ApiError::from_store)?;
  Ok(Json(stores))
}
