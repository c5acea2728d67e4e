//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use rolodex_core::{
  contact::{Contact, ContactId, ContactPatch, NewContact},
  store::{ContactQuery, ContactStore},
};

use crate::{
  encode::{RawContact, encode_date},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contact store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Fetch one row by id; `None` if absent.
  async fn select_one(&self, id: ContactId) -> Result<Option<Contact>> {
    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {} FROM contacts WHERE id = ?1",
                RawContact::COLUMNS
              ),
              rusqlite::params![id],
              RawContact::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }
}

/// Map a UNIQUE-constraint failure on `contacts.email` to
/// [`Error::DuplicateEmail`]; pass every other failure through.
fn map_unique_violation(err: tokio_rusqlite::Error, email: &str) -> Error {
  if let tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(
    code,
    Some(msg),
  )) = &err
    && code.code == rusqlite::ErrorCode::ConstraintViolation
    && msg.contains("contacts.email")
  {
    return Error::DuplicateEmail(email.to_owned());
  }
  Error::Database(err)
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = Error;

  async fn create(&self, input: NewContact) -> Result<Contact> {
    let name           = input.name.clone();
    let surname        = input.surname.clone();
    let email          = input.email.clone();
    let phone          = input.phone.clone();
    let birth_date_str = encode_date(input.birth_date);
    let extra_info     = input.extra_info.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (name, surname, email, phone, birth_date, extra_info)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            name,
            surname,
            email,
            phone,
            birth_date_str,
            extra_info,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(|e| map_unique_violation(e, &input.email))?;

    Ok(input.into_contact(id))
  }

  async fn get(&self, id: ContactId) -> Result<Option<Contact>> {
    self.select_one(id).await
  }

  async fn list(&self, query: &ContactQuery) -> Result<Vec<Contact>> {
    let name_pat    = query.name.as_deref().map(|s| format!("%{s}%"));
    let surname_pat = query.surname.as_deref().map(|s| format!("%{s}%"));
    let email_pat   = query.email.as_deref().map(|s| format!("%{s}%"));
    let limit_val   = query.limit.unwrap_or(100) as i64;
    let offset_val  = query.offset.unwrap_or(0) as i64;

    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        // Build WHERE clause dynamically. Placeholders are numbered, so
        // unused ones may be bound without appearing in the SQL.
        let mut conds: Vec<&'static str> = vec![];
        if name_pat.is_some() {
          conds.push("name LIKE ?1");
        }
        if surname_pat.is_some() {
          conds.push("surname LIKE ?2");
        }
        if email_pat.is_some() {
          conds.push("email LIKE ?3");
        }

        let where_clause = if conds.is_empty() {
          String::new()
        } else {
          format!("WHERE {}", conds.join(" AND "))
        };

        let sql = format!(
          "SELECT {} FROM contacts
           {where_clause}
           ORDER BY id
           LIMIT ?4 OFFSET ?5",
          RawContact::COLUMNS
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(
            rusqlite::params![
              name_pat.as_deref(),
              surname_pat.as_deref(),
              email_pat.as_deref(),
              limit_val,
              offset_val,
            ],
            RawContact::from_row,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  async fn replace(
    &self,
    id: ContactId,
    input: NewContact,
  ) -> Result<Option<Contact>> {
    let name           = input.name.clone();
    let surname        = input.surname.clone();
    let email          = input.email.clone();
    let phone          = input.phone.clone();
    let birth_date_str = encode_date(input.birth_date);
    let extra_info     = input.extra_info.clone();

    let updated = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "UPDATE contacts
           SET name = ?1, surname = ?2, email = ?3, phone = ?4,
               birth_date = ?5, extra_info = ?6
           WHERE id = ?7",
          rusqlite::params![
            name,
            surname,
            email,
            phone,
            birth_date_str,
            extra_info,
            id,
          ],
        )?;
        Ok(n > 0)
      })
      .await
      .map_err(|e| map_unique_violation(e, &input.email))?;

    if !updated {
      return Ok(None);
    }
    Ok(Some(input.into_contact(id)))
  }

  async fn patch(
    &self,
    id: ContactId,
    patch: ContactPatch,
  ) -> Result<Option<Contact>> {
    // Only a patch that moves the email can hit the UNIQUE constraint;
    // COALESCE keeps an untouched email identical to itself.
    let dup_email      = patch.email.clone();
    let birth_date_str = patch.birth_date.map(encode_date);
    let ContactPatch { name, surname, email, phone, extra_info, .. } = patch;

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "UPDATE contacts
           SET name       = COALESCE(?1, name),
               surname    = COALESCE(?2, surname),
               email      = COALESCE(?3, email),
               phone      = COALESCE(?4, phone),
               birth_date = COALESCE(?5, birth_date),
               extra_info = COALESCE(?6, extra_info)
           WHERE id = ?7",
          rusqlite::params![
            name,
            surname,
            email,
            phone,
            birth_date_str,
            extra_info,
            id,
          ],
        )?;
        if n == 0 {
          return Ok(None);
        }

        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {} FROM contacts WHERE id = ?1",
                RawContact::COLUMNS
              ),
              rusqlite::params![id],
              RawContact::from_row,
            )
            .optional()?,
        )
      })
      .await
      .map_err(|e| match dup_email {
        Some(email) => map_unique_violation(e, &email),
        None        => Error::Database(e),
      })?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn delete(&self, id: ContactId) -> Result<bool> {
    let n = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM contacts WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    Ok(n > 0)
  }

  async fn probe(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
