//! Async HTTP client wrapping the Campus JSON API.

use std::time::Duration;

use campus_core::{
  school::{NewSchool, School},
  store::DirectoryStore,
};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use uuid::Uuid;

use crate::{Error, Result};

/// Connection settings for the Campus API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
  pub base_url: String,
}

/// Async HTTP client for the Campus JSON REST API.
///
/// One fresh round trip per call — no caching, no retries. Cheap to clone;
/// the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct DirectoryClient {
  client: Client,
  config: ClientConfig,
}

/// Shape of the server's JSON error body.
#[derive(Deserialize)]
struct ErrorBody {
  error: String,
}

impl DirectoryClient {
  pub fn new(config: ClientConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api{}", self.config.base_url.trim_end_matches('/'), path)
  }

  /// Map a non-success response to [`Error::Remote`], preserving the
  /// server's diagnostic message verbatim. Falls back to the status line
  /// when the body is not the expected JSON shape.
  async fn remote_error(resp: Response) -> Error {
    let status = resp.status();
    let message = match resp.json::<ErrorBody>().await {
      Ok(body) => body.error,
      Err(_) => status.to_string(),
    };
    Error::Remote { status, message }
  }
}

// ─── DirectoryStore impl ─────────────────────────────────────────────────────

impl DirectoryStore for DirectoryClient {
  type Error = Error;

  /// `POST /api/schools`
  async fn create_school(&self, input: NewSchool) -> Result<School> {
    let resp = self
      .client
      .post(self.url("/schools"))
      .json(&input)
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(Self::remote_error(resp).await);
    }
    Ok(resp.json().await?)
  }

  /// `GET /api/schools`
  async fn list_schools(&self) -> Result<Vec<School>> {
    let resp = self.client.get(self.url("/schools")).send().await?;

    if !resp.status().is_success() {
      return Err(Self::remote_error(resp).await);
    }
    Ok(resp.json().await?)
  }

  /// `GET /api/schools/{id}` — a 404 means "no such school", not a failure.
  async fn get_school(&self, id: Uuid) -> Result<Option<School>> {
    let resp = self
      .client
      .get(self.url(&format!("/schools/{id}")))
      .send()
      .await?;

    if resp.status() == StatusCode::NOT_FOUND {
      return Ok(None);
    }
    if !resp.status().is_success() {
      return Err(Self::remote_error(resp).await);
    }
    Ok(Some(resp.json().await?))
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
