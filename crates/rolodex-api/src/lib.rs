//! JSON REST API for the rolodex contact service.
//!
//! Exposes an axum [`Router`] backed by any
//! [`rolodex_core::store::ContactStore`]. Auth, TLS, and transport concerns
//! are the caller's responsibility.

pub mod contacts;
pub mod error;
pub mod health;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use rolodex_core::store::ContactStore;
use serde::Deserialize;

pub use error::ApiError;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` layered
/// under the `ROLODEX_`-prefixed environment.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + 'static,
{
  Router::new()
    .route(
      "/contacts",
      get(contacts::list::<S>).post(contacts::create::<S>),
    )
    .route(
      "/contacts/{id}",
      get(contacts::get_one::<S>)
        .put(contacts::replace::<S>)
        .patch(contacts::patch_one::<S>)
        .delete(contacts::delete_one::<S>),
    )
    .route("/api/healthchecker", get(health::healthchecker::<S>))
    .with_state(store)
}

#[cfg(test)]
mod tests;
