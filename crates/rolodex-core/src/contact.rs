//! Contact — the persisted entity representing a person's contact details.
//!
//! A contact is a single flat row. The field constraints (lengths, email
//! format) are enforced at the API boundary; the storage layer enforces
//! only email uniqueness.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Row identifier, assigned by the storage layer on insert.
pub type ContactId = i64;

/// A persisted contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
  pub id:         ContactId,
  pub name:       String,
  pub surname:    String,
  /// Unique across all contacts.
  pub email:      String,
  pub phone:      String,
  /// Calendar date without time component; serialises as `YYYY-MM-DD`.
  pub birth_date: NaiveDate,
  pub extra_info: Option<String>,
}

// ─── NewContact ──────────────────────────────────────────────────────────────

/// Input to [`ContactStore::create`](crate::store::ContactStore::create) and
/// [`ContactStore::replace`](crate::store::ContactStore::replace).
/// The id is always assigned (or named) by the caller of the store, never
/// carried in the input.
#[derive(Debug, Clone)]
pub struct NewContact {
  pub name:       String,
  pub surname:    String,
  pub email:      String,
  pub phone:      String,
  pub birth_date: NaiveDate,
  pub extra_info: Option<String>,
}

impl NewContact {
  /// Promote to a full [`Contact`] once the storage layer has named the row.
  pub fn into_contact(self, id: ContactId) -> Contact {
    Contact {
      id,
      name:       self.name,
      surname:    self.surname,
      email:      self.email,
      phone:      self.phone,
      birth_date: self.birth_date,
      extra_info: self.extra_info,
    }
  }
}

// ─── ContactPatch ────────────────────────────────────────────────────────────

/// Input to [`ContactStore::patch`](crate::store::ContactStore::patch).
/// `None` means "leave the stored value unchanged".
#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
  pub name:       Option<String>,
  pub surname:    Option<String>,
  pub email:      Option<String>,
  pub phone:      Option<String>,
  pub birth_date: Option<NaiveDate>,
  pub extra_info: Option<String>,
}
