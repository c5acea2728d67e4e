//! Handlers for `/contacts` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/contacts` | `?skip`/`?limit` paging + substring filters |
//! | `POST`   | `/contacts` | Full body; `extra_info` optional |
//! | `GET`    | `/contacts/:id` | 404 if not found |
//! | `PUT`    | `/contacts/:id` | Replaces every field |
//! | `PATCH`  | `/contacts/:id` | Updates only supplied fields |
//! | `DELETE` | `/contacts/:id` | 204 on success |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
};
use chrono::NaiveDate;
use rolodex_core::{
  contact::{Contact, ContactId, ContactPatch, NewContact},
  store::{ContactQuery, ContactStore},
};
use serde::Deserialize;
use validator::Validate;

use crate::error::ApiError;

// ─── Request bodies ──────────────────────────────────────────────────────────

/// Full contact body, as accepted by POST and PUT.
///
/// The row id is never part of the body; POST assigns it and PUT takes it
/// from the path.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactBody {
  #[validate(length(min = 1, max = 50))]
  pub name:       String,
  #[validate(length(min = 1, max = 50))]
  pub surname:    String,
  #[validate(email)]
  pub email:      String,
  #[validate(length(min = 7, max = 50))]
  pub phone:      String,
  pub birth_date: NaiveDate,
  #[validate(length(max = 255))]
  pub extra_info: Option<String>,
}

impl From<ContactBody> for NewContact {
  fn from(body: ContactBody) -> Self {
    Self {
      name:       body.name,
      surname:    body.surname,
      email:      body.email,
      phone:      body.phone,
      birth_date: body.birth_date,
      extra_info: body.extra_info,
    }
  }
}

/// PATCH body — any subset of the contact fields. Absent fields are left
/// unchanged; present fields are validated with the same rules as
/// [`ContactBody`].
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ContactPatchBody {
  #[validate(length(min = 1, max = 50))]
  pub name:       Option<String>,
  #[validate(length(min = 1, max = 50))]
  pub surname:    Option<String>,
  #[validate(email)]
  pub email:      Option<String>,
  #[validate(length(min = 7, max = 50))]
  pub phone:      Option<String>,
  pub birth_date: Option<NaiveDate>,
  #[validate(length(max = 255))]
  pub extra_info: Option<String>,
}

impl From<ContactPatchBody> for ContactPatch {
  fn from(body: ContactPatchBody) -> Self {
    Self {
      name:       body.name,
      surname:    body.surname,
      email:      body.email,
      phone:      body.phone,
      birth_date: body.birth_date,
      extra_info: body.extra_info,
    }
  }
}

// ─── List ────────────────────────────────────────────────────────────────────

fn default_limit() -> i64 { 10 }

#[derive(Debug, Deserialize, Validate)]
pub struct ListParams {
  #[serde(default)]
  #[validate(range(min = 0))]
  pub skip:    i64,
  #[serde(default = "default_limit")]
  #[validate(range(min = 1, max = 100))]
  pub limit:   i64,
  pub name:    Option<String>,
  pub surname: Option<String>,
  pub email:   Option<String>,
}

/// `GET /contacts[?skip=..][&limit=..][&name=..][&surname=..][&email=..]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
{
  params.validate()?;

  let query = ContactQuery {
    name:    params.name,
    surname: params.surname,
    email:   params.email,
    limit:   Some(params.limit as usize),
    offset:  Some(params.skip as usize),
  };

  let contacts = store
    .list(&query)
    .await
    .map_err(|e| ApiError::from_store(e.into()))?;
  Ok(Json(contacts))
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /contacts`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<ContactBody>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  body.validate()?;

  let contact = store
    .create(body.into())
    .await
    .map_err(|e| ApiError::from_store(e.into()))?;
  Ok(Json(contact))
}

// ─── Get one ─────────────────────────────────────────────────────────────────

/// `GET /contacts/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<ContactId>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  let contact = store
    .get(id)
    .await
    .map_err(|e| ApiError::from_store(e.into()))?
    .ok_or_else(|| ApiError::NotFound(format!("contact {id} not found")))?;
  Ok(Json(contact))
}

// ─── Replace ─────────────────────────────────────────────────────────────────

/// `PUT /contacts/:id` — replaces all fields unconditionally.
pub async fn replace<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<ContactId>,
  Json(body): Json<ContactBody>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  body.validate()?;

  let contact = store
    .replace(id, body.into())
    .await
    .map_err(|e| ApiError::from_store(e.into()))?
    .ok_or_else(|| ApiError::NotFound(format!("contact {id} not found")))?;
  Ok(Json(contact))
}

// ─── Patch ───────────────────────────────────────────────────────────────────

/// `PATCH /contacts/:id` — updates only the supplied fields.
pub async fn patch_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<ContactId>,
  Json(body): Json<ContactPatchBody>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  body.validate()?;

  let contact = store
    .patch(id, body.into())
    .await
    .map_err(|e| ApiError::from_store(e.into()))?
    .ok_or_else(|| ApiError::NotFound(format!("contact {id} not found")))?;
  Ok(Json(contact))
}

// ─── Delete ──────────────────────────────────────────────────────────────────

/// `DELETE /contacts/:id` — 204 with empty body on success.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<ContactId>,
) -> Result<StatusCode, ApiError>
where
  S: ContactStore,
{
  let deleted = store
    .delete(id)
    .await
    .map_err(|e| ApiError::from_store(e.into()))?;

  if !deleted {
    return Err(ApiError::NotFound(format!("contact {id} not found")));
  }
  Ok(StatusCode::NO_CONTENT)
}
