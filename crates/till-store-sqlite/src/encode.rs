//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 UTC strings. All timestamps share the
//! `+00:00` offset and a fixed field order, so lexicographic comparison in
//! SQL (`sale_time >= ?`) agrees with chronological order.

use chrono::{DateTime, Utc};
use till_core::sale::Sale;

use crate::{Error, Result};

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

/// Raw values read directly from a `sales` row, before the timestamp is
/// parsed.
pub struct RawSale {
  pub id:        i64,
  pub sale_time: String,
  pub item_id:   i64,
  pub store_id:  i64,
}

impl RawSale {
  pub fn into_sale(self) -> Result<Sale> {
    Ok(Sale {
      id:        self.id,
      sale_time: decode_dt(&self.sale_time)?,
      item_id:   self.item_id,
      store_id:  self.store_id,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dt_roundtrip() {
    let now = Utc::now();
    assert_eq!(decode_dt(&encode_dt(now)).unwrap(), now);
  }

  #[test]
  fn garbage_timestamp_is_a_parse_error() {
    assert!(matches!(decode_dt("not a time"), Err(Error::DateParse(_))));
  }
}
