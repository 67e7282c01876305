//! School record types.
//!
//! A [`School`] is the store-confirmed entity; a [`NewSchool`] is a
//! validated draft the store has not yet seen. Identity and both timestamps
//! are always assigned by the store, never by callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::validation::{CONTACT_RE, email_address, image_url};

/// A fully validated, store-confirmed school entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
  pub school_id:  Uuid,
  pub name:       String,
  pub address:    String,
  pub city:       String,
  pub state:      String,
  /// Exactly 10 decimal digits, no separators.
  pub contact:    String,
  pub email_id:   String,
  /// Absolute URL of a representative image, if one was supplied.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image:      Option<String>,
  /// Store-assigned; never changes after creation.
  pub created_at: DateTime<Utc>,
  /// Store-assigned and maintained; this core never writes it.
  pub updated_at: DateTime<Utc>,
}

/// A validated draft — everything in [`School`] except the store-assigned
/// identity and timestamps.
///
/// The field rules live on this type; [`SchoolDraft::validate`] is the
/// intended producer and checks them all in one pass.
///
/// [`SchoolDraft::validate`]: crate::validation::SchoolDraft::validate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewSchool {
  #[validate(length(min = 2, message = "school name must be at least 2 characters"))]
  pub name:     String,
  #[validate(length(min = 5, message = "address must be at least 5 characters"))]
  pub address:  String,
  #[validate(length(min = 2, message = "city name must be at least 2 characters"))]
  pub city:     String,
  #[validate(length(min = 2, message = "state name must be at least 2 characters"))]
  pub state:    String,
  #[validate(regex(path = *CONTACT_RE, message = "contact must be a 10-digit phone number"))]
  pub contact:  String,
  #[validate(custom(function = email_address, message = "not a valid email address"))]
  pub email_id: String,
  #[validate(custom(function = image_url, message = "image must be an absolute URL"))]
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image:    Option<String>,
}

// ─── Tests ───────────────────────────────────────────────────────────────────
