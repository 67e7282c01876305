//! Error types for `campus-core`.
//!
//! Validation failures are values, not exceptions: one [`FieldViolation`]
//! per offending field, all reported together so a form can highlight every
//! problem at once.

use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// Caller-facing error taxonomy.
///
/// Validation failures are produced locally, before any network call, and
/// never by a store backend. Persistence failures come from whichever
/// backend the caller wired in and carry its diagnostic verbatim.
#[derive(Debug, Error)]
pub enum Error {
  #[error("validation failed: {0}")]
  Validation(#[from] Violations),

  #[error("persistence failure: {0}")]
  Persistence(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend error, preserving its message.
  pub fn persistence<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Persistence(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A single field-level rule failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
  /// Draft field the violation applies to, e.g. `"contact"`.
  pub field:  &'static str,
  /// Human-readable reason, suitable for display next to the field.
  pub reason: String,
}

/// Every field-level violation found in one validation pass, in field
/// declaration order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{}", join_violations(.0))]
pub struct Violations(pub Vec<FieldViolation>);

/// Declaration order of the draft fields; violations are reported in this
/// order regardless of check order.
const FIELDS: [&str; 7] =
  ["name", "address", "city", "state", "contact", "email_id", "image"];

impl Violations {
  /// Collapse [`ValidationErrors`] into one violation per offending field.
  /// When a field breaks more than one rule, the first reason wins.
  pub(crate) fn from_errors(errors: ValidationErrors) -> Self {
    let by_field = errors.field_errors();
    let mut out = Vec::new();
    for field in FIELDS {
      if let Some(list) = by_field.get(field)
        && let Some(first) = list.first()
      {
        let reason = first
          .message
          .as_ref()
          .map(|m| m.to_string())
          .unwrap_or_else(|| first.code.to_string());
        out.push(FieldViolation { field, reason });
      }
    }
    Self(out)
  }

  /// The fields that failed, in declaration order.
  pub fn fields(&self) -> Vec<&'static str> {
    self.0.iter().map(|v| v.field).collect()
  }
}

fn join_violations(list: &[FieldViolation]) -> String {
  list
    .iter()
    .map(|v| format!("{}: {}", v.field, v.reason))
    .collect::<Vec<_>>()
    .join("; ")
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn violations() -> Violations {
    Violations(vec![FieldViolation {
      field:  "contact",
      reason: "contact must be a 10-digit phone number".into(),
    }])
  }

  #[test]
  fn violations_convert_into_the_top_level_error() {
    let err = Error::from(violations());
    assert!(matches!(err, Error::Validation(v) if v == violations()));
  }

  #[test]
  fn persistence_errors_keep_the_backend_diagnostic() {
    let err = Error::persistence(std::io::Error::other("disk full"));
    assert_eq!(err.to_string(), "persistence failure: disk full");
  }
}
