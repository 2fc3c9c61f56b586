//! [`SqliteStore`] — the SQLite implementation of [`LedgerStore`].

use std::path::Path;

use chrono::{DateTime, Utc};
use till_core::{
  catalog::{Item, NewItem, NewStore, Store},
  report::{TOP_LIMIT, TopItem, TopStore},
  sale::{NewSale, Sale},
  store::LedgerStore,
};

use crate::{
  Error, Result,
  encode::{RawSale, encode_dt},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A sales ledger backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── LedgerStore impl ────────────────────────────────────────────────────────

impl LedgerStore for SqliteStore {
  type Error = Error;

  // ── Catalog reads ─────────────────────────────────────────────────────────

  async fn list_items(&self) -> Result<Vec<Item>> {
    let items = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT id, name, price FROM items ORDER BY id")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(Item {
              id:    row.get(0)?,
              name:  row.get(1)?,
              price: row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(items)
  }

  async fn list_stores(&self) -> Result<Vec<Store>> {
    let stores = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT id, address FROM stores ORDER BY id")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(Store { id: row.get(0)?, address: row.get(1)? })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(stores)
  }

  // ── Catalog seeding ───────────────────────────────────────────────────────

  async fn add_item(&self, input: NewItem) -> Result<Item> {
    input.validate().map_err(Error::Core)?;

    let NewItem { name, price } = input;
    let (id, name) = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO items (name, price) VALUES (?1, ?2)",
          rusqlite::params![name, price],
        )?;
        Ok((conn.last_insert_rowid(), name))
      })
      .await?;

    Ok(Item { id, name, price })
  }

  async fn add_store(&self, input: NewStore) -> Result<Store> {
    let NewStore { address } = input;
    let (id, address) = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO stores (address) VALUES (?1)",
          rusqlite::params![address],
        )?;
        Ok((conn.last_insert_rowid(), address))
      })
      .await?;

    Ok(Store { id, address })
  }

  // ── Sale recording ────────────────────────────────────────────────────────

  async fn record_sale(&self, input: NewSale) -> Result<Sale> {
    input.validate().map_err(Error::Core)?;

    let NewSale { item_id, store_id } = input;
    let at_str = encode_dt(Utc::now());

    // Insert, then read the row back so the returned Sale reflects exactly
    // what was stored. A dangling reference fails the INSERT with a
    // foreign-key violation and nothing is written.
    let raw = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO sales (sale_time, item_id, store_id)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![at_str, item_id, store_id],
        )?;
        let id = conn.last_insert_rowid();
        let raw = conn.query_row(
          "SELECT id, sale_time, item_id, store_id FROM sales WHERE id = ?1",
          rusqlite::params![id],
          |row| {
            Ok(RawSale {
              id:        row.get(0)?,
              sale_time: row.get(1)?,
              item_id:   row.get(2)?,
              store_id:  row.get(3)?,
            })
          },
        )?;
        Ok(raw)
      })
      .await?;

    raw.into_sale()
  }

  // ── Top-N reports ─────────────────────────────────────────────────────────

  async fn top_items(
    &self,
    window_start: DateTime<Utc>,
  ) -> Result<Vec<TopItem>> {
    let start_str = encode_dt(window_start);

    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT i.id, i.name, COUNT(s.id) AS sales_count
           FROM sales s
           JOIN items i ON i.id = s.item_id
           WHERE s.sale_time >= ?1
           GROUP BY i.id
           ORDER BY sales_count DESC, i.id ASC
           LIMIT ?2",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![start_str, TOP_LIMIT], |row| {
            Ok(TopItem {
              item_id:     row.get(0)?,
              name:        row.get(1)?,
              sales_count: row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn top_stores(
    &self,
    window_start: DateTime<Utc>,
  ) -> Result<Vec<TopStore>> {
    let start_str = encode_dt(window_start);

    let rows = self
      .conn
      .call(move |conn| {
        // Income is attributed via the item's current price, not a price
        // snapshotted at sale time.
        let mut stmt = conn.prepare(
          "SELECT st.id, st.address, SUM(i.price) AS income
           FROM sales s
           JOIN stores st ON st.id = s.store_id
           JOIN items i  ON i.id  = s.item_id
           WHERE s.sale_time >= ?1
           GROUP BY st.id
           ORDER BY income DESC, st.id ASC
           LIMIT ?2",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![start_str, TOP_LIMIT], |row| {
            Ok(TopStore {
              store_id: row.get(0)?,
              address:  row.get(1)?,
              income:   row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }
}
