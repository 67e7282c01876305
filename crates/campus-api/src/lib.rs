//! JSON REST API for the Campus school directory.
//!
//! Exposes an axum [`Router`] backed by any
//! [`campus_core::store::DirectoryStore`]. Transport, TLS, and any access
//! control are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", campus_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod schools;

use std::sync::Arc;

use axum::{Router, routing::get};
use campus_core::store::DirectoryStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: DirectoryStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/schools", get(schools::list::<S>).post(schools::create::<S>))
    .route("/schools/{id}", get(schools::get_one::<S>))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
