//! Handler for the sale-recording endpoint.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/sales` | Body: `{"item_id":1,"store_id":1}`; returns 201 + stored sale |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use till_core::{sale::NewSale, store::LedgerStore};

use crate::error::ApiError;

/// `POST /sales` — returns 201 + the stored [`Sale`](till_core::sale::Sale),
/// with its server-assigned id and timestamp.
///
/// A dangling or non-positive item/store reference yields 400; a storage
/// outage yields 503 so the client knows a retry may help.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewSale>,
) -> Result<impl IntoResponse, ApiError>
where
  S: LedgerStore,
{
  let sale = store
    .record_sale(body)
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(sale)))
}
