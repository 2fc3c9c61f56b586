//! Router tests driven through `tower::ServiceExt::oneshot` against an
//! in-memory SQLite store.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
};
use till_core::{
  catalog::{NewItem, NewStore},
  store::LedgerStore,
};
use till_store_sqlite::SqliteStore;
use tower::ServiceExt;

use crate::api_router;

async fn app() -> (Router, Arc<SqliteStore>) {
  let store = Arc::new(
    SqliteStore::open_in_memory().await.expect("in-memory store"),
  );
  (api_router(store.clone()), store)
}

fn get(uri: &str) -> Request<Body> {
  Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri(uri)
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(body.to_owned()))
    .unwrap()
}

async fn body_json(resp: Response) -> serde_json::Value {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn list_endpoints_return_the_catalog() {
  let (app, store) = app().await;
  store
    .add_item(NewItem { name: "Widget".into(), price: 9.99 })
    .await
    .unwrap();
  store
    .add_store(NewStore { address: "Main St".into() })
    .await
    .unwrap();

  let resp = app.clone().oneshot(get("/items")).await.unwrap();
  assert_eq!(resp.status(), StatusCode::OK);
  let items = body_json(resp).await;
  assert_eq!(items[0]["name"], "Widget");

  let resp = app.oneshot(get("/stores")).await.unwrap();
  assert_eq!(resp.status(), StatusCode::OK);
  let stores = body_json(resp).await;
  assert_eq!(stores[0]["address"], "Main St");
}

#[tokio::test]
async fn record_sale_returns_created_with_assigned_fields() {
  let (app, store) = app().await;
  store
    .add_item(NewItem { name: "Widget".into(), price: 9.99 })
    .await
    .unwrap();
  store
    .add_store(NewStore { address: "Main St".into() })
    .await
    .unwrap();

  // A caller-supplied sale_time is ignored: the timestamp is always
  // assigned server-side.
  let resp = app
    .oneshot(post_json(
      "/sales",
      r#"{"item_id":1,"store_id":1,"sale_time":"1999-01-01T00:00:00Z"}"#,
    ))
    .await
    .unwrap();
  assert_eq!(resp.status(), StatusCode::CREATED);

  let sale = body_json(resp).await;
  assert_eq!(sale["id"], 1);
  assert_eq!(sale["item_id"], 1);
  assert_eq!(sale["store_id"], 1);

  let stamped: chrono::DateTime<chrono::Utc> =
    sale["sale_time"].as_str().unwrap().parse().unwrap();
  assert!((chrono::Utc::now() - stamped).num_seconds().abs() < 60);
}

#[tokio::test]
async fn record_sale_with_dangling_reference_is_400() {
  let (app, _store) = app().await;

  let resp = app
    .oneshot(post_json("/sales", r#"{"item_id":1,"store_id":1}"#))
    .await
    .unwrap();
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let body = body_json(resp).await;
  assert!(body["error"].is_string());
}

#[tokio::test]
async fn record_sale_with_non_positive_reference_is_400() {
  let (app, _store) = app().await;

  let resp = app
    .oneshot(post_json("/sales", r#"{"item_id":0,"store_id":1}"#))
    .await
    .unwrap();
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn top_reports_rank_recent_sales() {
  let (app, store) = app().await;
  store
    .add_item(NewItem { name: "Widget".into(), price: 9.99 })
    .await
    .unwrap();
  store
    .add_store(NewStore { address: "Main St".into() })
    .await
    .unwrap();
  for _ in 0..3 {
    store
      .record_sale(till_core::sale::NewSale { item_id: 1, store_id: 1 })
      .await
      .unwrap();
  }

  let resp = app.clone().oneshot(get("/items/top")).await.unwrap();
  assert_eq!(resp.status(), StatusCode::OK);
  let top = body_json(resp).await;
  assert_eq!(top[0]["item_id"], 1);
  assert_eq!(top[0]["name"], "Widget");
  assert_eq!(top[0]["sales_count"], 3);

  let resp = app.oneshot(get("/stores/top")).await.unwrap();
  assert_eq!(resp.status(), StatusCode::OK);
  let top = body_json(resp).await;
  assert_eq!(top[0]["store_id"], 1);
  assert_eq!(top[0]["address"], "Main St");
  let income = top[0]["income"].as_f64().unwrap();
  assert!((income - 29.97).abs() < 1e-9);
}

#[tokio::test]
async fn empty_top_reports_are_empty_arrays() {
  let (app, _store) = app().await;
  let resp = app.oneshot(get("/items/top")).await.unwrap();
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(body_json(resp).await, serde_json::json!([]));
}
