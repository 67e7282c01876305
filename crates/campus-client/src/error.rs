//! Error type for `campus-client`.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The request never completed: connection refused, DNS failure,
  /// timeout, or a malformed response body.
  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),

  /// The server answered with a non-success status. `message` is the
  /// server's diagnostic, passed through verbatim.
  #[error("remote store error ({status}): {message}")]
  Remote {
    status:  StatusCode,
    message: String,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
