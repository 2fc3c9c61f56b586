//! Error taxonomy for `till-core`.
//!
//! Every storage failure is classified into one of these variants before it
//! crosses the core boundary (backends carry an `Into<Error>` bound on their
//! own error types). The caller-facing contract:
//!
//! - [`Error::Validation`] — the caller supplied bad data (a dangling
//!   item/store reference, a non-positive id). Recoverable: fix the input
//!   and resubmit. Maps to a 4xx outward.
//! - [`Error::Unavailable`] — the backing store is unreachable or timed
//!   out. Not recoverable here; the caller may retry. Maps to a 5xx.
//! - [`Error::NotFound`] — reserved for single-entity lookups. The current
//!   operations are all set-returning and answer "no rows" with an empty
//!   sequence, never with this variant.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid sale data: {0}")]
  Validation(String),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("storage unavailable: {0}")]
  Unavailable(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
