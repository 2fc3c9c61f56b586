//! Catalog entities — the items on sale and the stores that sell them.
//!
//! Both are immutable in this system's scope: they are created through the
//! seed path and only ever read afterwards. All meaningful write traffic
//! goes through the sales ledger instead.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A product that can be sold. `price` is the *current* price; revenue
/// reports always use it, even for sales recorded before a price change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
  pub id:    i64,
  pub name:  String,
  pub price: f64,
}

/// A physical store, identified by its address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
  pub id:      i64,
  pub address: String,
}

/// Input to [`crate::store::LedgerStore::add_item`].
/// The id is always assigned by the store; it is not accepted from callers.
#[derive(Debug, Clone, Deserialize)]
pub struct NewItem {
  pub name:  String,
  pub price: f64,
}

impl NewItem {
  /// Reject prices that the `items` table would refuse anyway, so the
  /// failure carries a readable message instead of a constraint error.
  pub fn validate(&self) -> Result<()> {
    if !self.price.is_finite() || self.price < 0.0 {
      return Err(Error::Validation(format!(
        "item price must be non-negative, got {}",
        self.price
      )));
    }
    Ok(())
  }
}

/// Input to [`crate::store::LedgerStore::add_store`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewStore {
  pub address: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn negative_price_rejected() {
    let input = NewItem { name: "Widget".into(), price: -0.01 };
    assert!(matches!(input.validate(), Err(Error::Validation(_))));
  }

  #[test]
  fn zero_and_positive_prices_accepted() {
    for price in [0.0, 9.99] {
      let input = NewItem { name: "Widget".into(), price };
      assert!(input.validate().is_ok());
    }
  }

  #[test]
  fn non_finite_price_rejected() {
    let input = NewItem { name: "Widget".into(), price: f64::NAN };
    assert!(input.validate().is_err());
  }
}
