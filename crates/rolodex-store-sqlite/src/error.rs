//! Error type for `rolodex-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date parse error: {0}")]
  DateParse(String),

  /// A write collided with the UNIQUE constraint on `contacts.email`.
  #[error("email already in use: {0}")]
  DuplicateEmail(String),
}

impl From<Error> for rolodex_core::Error {
  fn from(err: Error) -> Self {
    match err {
      Error::DuplicateEmail(email) => Self::DuplicateEmail(email),
      other => Self::Storage(other.to_string()),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
