//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. UUIDs are stored as
//! hyphenated lowercase strings. `image` is a plain URL string or NULL.

use campus_core::school::School;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `schools` row.
pub struct RawSchool {
  pub school_id:  String,
  pub name:       String,
  pub address:    String,
  pub city:       String,
  pub state:      String,
  pub contact:    String,
  pub email_id:   String,
  pub image:      Option<String>,
  pub created_at: String,
  pub updated_at: String,
}

impl RawSchool {
  pub fn into_school(self) -> Result<School> {
    Ok(School {
      school_id:  decode_uuid(&self.school_id)?,
      name:       self.name,
      address:    self.address,
      city:       self.city,
      state:      self.state,
      contact:    self.contact,
      email_id:   self.email_id,
      image:      self.image,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}
