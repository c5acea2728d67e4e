//! The `ContactStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g.
//! `rolodex-store-sqlite`). The HTTP layer (`rolodex-api`) depends on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::contact::{Contact, ContactId, ContactPatch, NewContact};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`ContactStore::list`].
///
/// Each filter, when present, is a case-insensitive substring match on its
/// column. Filters combine with AND.
#[derive(Debug, Clone, Default)]
pub struct ContactQuery {
  pub name:    Option<String>,
  pub surname: Option<String>,
  pub email:   Option<String>,
  pub limit:   Option<usize>,
  pub offset:  Option<usize>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a contact store backend — the repository interface the
/// transport layer programs against.
///
/// Absent rows are expressed in the return types (`Option` / `bool`), so a
/// caller can distinguish "not found" without inspecting the backend's
/// error. Errors convert into [`crate::Error`], which carries the one
/// domain-meaningful failure (duplicate email) alongside opaque storage
/// failures.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Into<crate::Error> + Send + Sync + 'static;

  /// Insert a new contact and return it with its assigned id.
  ///
  /// Fails with a duplicate-email error if `input.email` is already taken.
  fn create(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn get(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// List contacts matching `query`, ordered by id.
  fn list<'a>(
    &'a self,
    query: &'a ContactQuery,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + 'a;

  /// Replace every field of an existing contact. Returns the updated row,
  /// or `None` if no contact has this id.
  fn replace(
    &self,
    id: ContactId,
    input: NewContact,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Update only the fields present in `patch`. Returns the updated row,
  /// or `None` if no contact has this id.
  fn patch(
    &self,
    id: ContactId,
    patch: ContactPatch,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Remove a contact. Returns `false` if no contact had this id.
  fn delete(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Trivial connectivity check (`SELECT 1`), for liveness probes.
  fn probe(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
