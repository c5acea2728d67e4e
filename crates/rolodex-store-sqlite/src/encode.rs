//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! Dates are stored as ISO 8601 calendar dates (`YYYY-MM-DD`) so they sort
//! lexicographically and survive round-trips unchanged.

use chrono::NaiveDate;
use rolodex_core::contact::Contact;

use crate::{Error, Result};

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format("%Y-%m-%d").to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Row structs ─────────────────────────────────────────────────────────────

/// A `contacts` row as read from SQLite, before the date column is parsed.
pub struct RawContact {
  pub id:         i64,
  pub name:       String,
  pub surname:    String,
  pub email:      String,
  pub phone:      String,
  pub birth_date: String,
  pub extra_info: Option<String>,
}

impl RawContact {
  /// The column list matching [`RawContact::from_row`], for SELECTs.
  pub const COLUMNS: &'static str =
    "id, name, surname, email, phone, birth_date, extra_info";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      name:       row.get(1)?,
      surname:    row.get(2)?,
      email:      row.get(3)?,
      phone:      row.get(4)?,
      birth_date: row.get(5)?,
      extra_info: row.get(6)?,
    })
  }

  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:         self.id,
      name:       self.name,
      surname:    self.surname,
      email:      self.email,
      phone:      self.phone,
      birth_date: decode_date(&self.birth_date)?,
      extra_info: self.extra_info,
    })
  }
}
