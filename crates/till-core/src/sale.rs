//! Sale records — the append-only transaction ledger.
//!
//! A sale is an immutable fact: once written it is never updated or
//! deleted. The timestamp is assigned by the store at insert time so that
//! callers cannot backdate entries into (or out of) a report window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One recorded sale of an item at a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
  pub id:        i64,
  /// Server-assigned timestamp; never accepted from callers.
  pub sale_time: DateTime<Utc>,
  pub item_id:   i64,
  pub store_id:  i64,
}

/// Input to [`crate::store::LedgerStore::record_sale`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewSale {
  pub item_id:  i64,
  pub store_id: i64,
}

impl NewSale {
  /// Both references must be positive identifiers. Whether they point at
  /// existing rows is the store's call (foreign-key enforcement); this
  /// only filters out values that could never be valid.
  pub fn validate(&self) -> Result<()> {
    if self.item_id <= 0 {
      return Err(Error::Validation(format!(
        "item_id must be positive, got {}",
        self.item_id
      )));
    }
    if self.store_id <= 0 {
      return Err(Error::Validation(format!(
        "store_id must be positive, got {}",
        self.store_id
      )));
    }
    Ok(())
  }
}
