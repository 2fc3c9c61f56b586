//! Report rows and the trailing-window policy for the Top-N aggregator.
//!
//! Both reports share one algorithmic shape: join the sales ledger to a
//! catalog table, restrict to the trailing window, group, rank, and cut at
//! [`TOP_LIMIT`]. The ranking metric differs (sales count vs. summed
//! income); the window policy is shared and lives here so it can be tested
//! without a database.

use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of rows either report returns.
pub const TOP_LIMIT: u32 = 10;

/// One row of the top-items report: how many times the item sold inside
/// the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopItem {
  pub item_id:     i64,
  pub name:        String,
  pub sales_count: i64,
}

/// One row of the top-stores report. `income` sums the *current* price of
/// each item sold, so a price change retroactively moves historical
/// figures. Inherited semantics; see `DESIGN.md`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopStore {
  pub store_id: i64,
  pub address:  String,
  pub income:   f64,
}

/// The lower bound of the report window: one calendar month before
/// `today`, clamped to the last valid day of the target month
/// (2024-03-31 goes to 2024-02-29, not 2024-03-01).
///
/// The window is inclusive at this bound and open-ended above it.
pub fn report_window_start(today: NaiveDate) -> NaiveDate {
  // None only below year -262143; fall back to the input rather than fail.
  today.checked_sub_months(Months::new(1)).unwrap_or(today)
}

/// [`report_window_start`] as an instant: midnight UTC of the window's
/// first day. This is the value compared against `Sale::sale_time`.
pub fn report_window_start_at(now: DateTime<Utc>) -> DateTime<Utc> {
  report_window_start(now.date_naive())
    .and_hms_opt(0, 0, 0)
    .unwrap_or_default()
    .and_utc()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn plain_subtraction() {
    assert_eq!(report_window_start(date(2024, 3, 15)), date(2024, 2, 15));
  }

  #[test]
  fn clamps_to_leap_february() {
    assert_eq!(report_window_start(date(2024, 3, 31)), date(2024, 2, 29));
  }

  #[test]
  fn clamps_to_short_february() {
    assert_eq!(report_window_start(date(2023, 3, 31)), date(2023, 2, 28));
  }

  #[test]
  fn crosses_year_boundary() {
    assert_eq!(report_window_start(date(2024, 1, 31)), date(2023, 12, 31));
  }

  #[test]
  fn thirty_one_to_thirty_day_month() {
    assert_eq!(report_window_start(date(2024, 7, 31)), date(2024, 6, 30));
  }

  #[test]
  fn window_instant_is_midnight_utc() {
    let now = date(2024, 3, 15).and_hms_opt(13, 45, 12).unwrap().and_utc();
    let start = report_window_start_at(now);
    assert_eq!(start, date(2024, 2, 15).and_hms_opt(0, 0, 0).unwrap().and_utc());
  }
}
