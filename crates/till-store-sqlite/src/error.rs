//! Error type for `till-store-sqlite`, and its classification into the
//! core taxonomy.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] till_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Classification into the core taxonomy. Constraint violations (dangling
/// foreign keys, a negative price slipping past input validation) are the
/// caller's fault; everything else the database can throw — busy, locked,
/// cannot-open, I/O, a closed connection — is an availability problem.
impl From<Error> for till_core::Error {
  fn from(e: Error) -> Self {
    match e {
      Error::Core(inner) => inner,
      Error::Database(db) => classify_database(db),
      Error::DateParse(msg) => {
        till_core::Error::Unavailable(format!("corrupt stored timestamp: {msg}"))
      }
    }
  }
}

fn classify_database(e: tokio_rusqlite::Error) -> till_core::Error {
  if let tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(
    failure,
    message,
  )) = &e
  {
    if failure.code == rusqlite::ErrorCode::ConstraintViolation {
      let detail = message
        .clone()
        .unwrap_or_else(|| "constraint violation".to_owned());
      return till_core::Error::Validation(detail);
    }
  }
  till_core::Error::Unavailable(e.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn core_errors_pass_through() {
    let e = Error::Core(till_core::Error::Validation("bad".into()));
    assert!(matches!(
      till_core::Error::from(e),
      till_core::Error::Validation(_)
    ));
  }

  #[test]
  fn closed_connection_is_unavailable() {
    let e = Error::Database(tokio_rusqlite::Error::ConnectionClosed);
    assert!(matches!(
      till_core::Error::from(e),
      till_core::Error::Unavailable(_)
    ));
  }
}
