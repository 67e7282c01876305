//! Handlers for `/schools` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/schools` | Full directory, newest first |
//! | `POST` | `/schools` | Body: [`NewSchool`]; returns 201 + stored record |
//! | `GET`  | `/schools/:id` | 404 if not found |
//!
//! The body of `POST /schools` is expected to have passed client-side
//! validation already; the store is trusted to accept it.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use campus_core::{
  school::{NewSchool, School},
  store::DirectoryStore,
};
use uuid::Uuid;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /schools`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<School>>, ApiError>
where
  S: DirectoryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let schools = store
    .list_schools()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(schools))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /schools` — the store assigns identity and timestamps.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewSchool>,
) -> Result<impl IntoResponse, ApiError>
where
  S: DirectoryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let school = store
    .create_school(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(school)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /schools/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<School>, ApiError>
where
  S: DirectoryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let school = store
    .get_school(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("school {id} not found")))?;
  Ok(Json(school))
}
