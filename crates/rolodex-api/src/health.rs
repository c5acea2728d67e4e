//! Handler for `GET /api/healthchecker`.

use std::sync::Arc;

use axum::{Json, extract::State};
use rolodex_core::store::ContactStore;
use serde_json::{Value, json};

use crate::error::ApiError;

/// Liveness probe: one `SELECT 1` round-trip to the store. Returns a
/// welcome message on success, 500 if the database is unreachable.
pub async fn healthchecker<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Value>, ApiError>
where
  S: ContactStore,
{
  store
    .probe()
    .await
    .map_err(|e| ApiError::from_store(e.into()))?;
  Ok(Json(json!({ "message": "Welcome to the rolodex contact service" })))
}
