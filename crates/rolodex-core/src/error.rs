//! Error types for `rolodex-core`.

use thiserror::Error;

/// Domain-level failure of a store operation.
///
/// Backends carry their own richer error types; those convert into this
/// enum at the repository boundary so callers never name a backend.
#[derive(Debug, Error)]
pub enum Error {
  #[error("email already in use: {0}")]
  DuplicateEmail(String),

  #[error("storage error: {0}")]
  Storage(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
