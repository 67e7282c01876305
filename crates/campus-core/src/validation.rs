//! The record validator: turns raw form input into a [`NewSchool`] or a
//! full set of field violations.
//!
//! Validation is total and order-independent — every field is checked and
//! every violation is reported, not just the first. Pure, synchronous, no
//! I/O.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use url::Url;
use validator::{Validate, ValidateEmail as _, ValidationError};

use crate::{Violations, school::NewSchool};

/// Exactly 10 decimal digits — no separators, no country code.
pub(crate) static CONTACT_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("contact regex"));

/// Raw form input — every field exactly as the user typed it.
///
/// `image` is optional at the form level; the empty string (or whitespace)
/// means "no image" and is omitted from the accepted record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchoolDraft {
  pub name:     String,
  pub address:  String,
  pub city:     String,
  pub state:    String,
  pub contact:  String,
  pub email_id: String,
  #[serde(default)]
  pub image:    String,
}

impl SchoolDraft {
  /// Validate and normalise the draft.
  ///
  /// Every text field is trimmed before its rule is checked; a blank
  /// `image` becomes `None`. On failure the returned [`Violations`] carry
  /// one human-readable reason per offending field, in declaration order.
  pub fn validate(&self) -> Result<NewSchool, Violations> {
    let image = self.image.trim();
    let candidate = NewSchool {
      name:     self.name.trim().to_owned(),
      address:  self.address.trim().to_owned(),
      city:     self.city.trim().to_owned(),
      state:    self.state.trim().to_owned(),
      contact:  self.contact.trim().to_owned(),
      email_id: self.email_id.trim().to_owned(),
      image:    (!image.is_empty()).then(|| image.to_owned()),
    };
    Validate::validate(&candidate).map_err(Violations::from_errors)?;
    Ok(candidate)
  }
}

// ─── Field rules ─────────────────────────────────────────────────────────────

/// Standard email grammar, with the domain required to contain a dot
/// (`a@b` is not a deliverable address for our purposes).
pub(crate) fn email_address(value: &str) -> Result<(), ValidationError> {
  let domain_has_dot = value
    .rsplit_once('@')
    .is_some_and(|(_, domain)| domain.contains('.'));
  if !domain_has_dot || !value.validate_email() {
    return Err(ValidationError::new("email"));
  }
  Ok(())
}

/// An image must be an absolute URL carrying an explicit `scheme://`.
/// Bare `scheme:/path` forms and relative paths are rejected, even where a
/// lenient parser would repair them.
pub(crate) fn image_url(value: &str) -> Result<(), ValidationError> {
  let parsed = Url::parse(value).map_err(|_| ValidationError::new("url"))?;
  if !value[parsed.scheme().len()..].starts_with("://") {
    return Err(ValidationError::new("url"));
  }
  Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn valid_draft() -> SchoolDraft {
    SchoolDraft {
      name:     "City Montessori".into(),
      address:  "12 Station Road".into(),
      city:     "Lucknow".into(),
      state:    "Uttar Pradesh".into(),
      contact:  "9876543210".into(),
      email_id: "office@cms.example.com".into(),
      image:    String::new(),
    }
  }

  // ── Acceptance ─────────────────────────────────────────────────────────

  #[test]
  fn valid_draft_is_accepted() {
    let record = valid_draft().validate().unwrap();
    assert_eq!(record.name, "City Montessori");
    assert_eq!(record.contact, "9876543210");
    assert_eq!(record.image, None);
  }

  #[test]
  fn fields_are_trimmed() {
    let mut draft = valid_draft();
    draft.name = "  City Montessori  ".into();
    draft.city = " Lucknow ".into();
    let record = draft.validate().unwrap();
    assert_eq!(record.name, "City Montessori");
    assert_eq!(record.city, "Lucknow");
  }

  #[test]
  fn blank_image_is_omitted() {
    let mut draft = valid_draft();
    draft.image = "   ".into();
    let record = draft.validate().unwrap();
    assert_eq!(record.image, None);
  }

  #[test]
  fn absolute_image_url_is_kept() {
    let mut draft = valid_draft();
    draft.image = "https://x.com/a.jpg".into();
    let record = draft.validate().unwrap();
    assert_eq!(record.image.as_deref(), Some("https://x.com/a.jpg"));
  }

  #[test]
  fn validation_is_repeatable() {
    let draft = valid_draft();
    assert_eq!(draft.validate().unwrap(), draft.validate().unwrap());
  }

  // ── Single-field rejections ────────────────────────────────────────────

  #[test]
  fn short_name_is_rejected() {
    let mut draft = valid_draft();
    draft.name = "X".into();
    let violations = draft.validate().unwrap_err();
    assert_eq!(violations.fields(), ["name"]);
  }

  #[test]
  fn whitespace_only_name_is_rejected() {
    let mut draft = valid_draft();
    draft.name = "   ".into();
    assert_eq!(draft.validate().unwrap_err().fields(), ["name"]);
  }

  #[test]
  fn short_address_is_rejected() {
    let mut draft = valid_draft();
    draft.address = "12 A".into();
    assert_eq!(draft.validate().unwrap_err().fields(), ["address"]);
  }

  #[test]
  fn contact_shorter_than_ten_digits_is_rejected() {
    let mut draft = valid_draft();
    draft.contact = "12345".into();
    assert_eq!(draft.validate().unwrap_err().fields(), ["contact"]);
  }

  #[test]
  fn contact_longer_than_ten_digits_is_rejected() {
    let mut draft = valid_draft();
    draft.contact = "12345678901".into();
    assert_eq!(draft.validate().unwrap_err().fields(), ["contact"]);
  }

  #[test]
  fn contact_with_separators_is_rejected() {
    let mut draft = valid_draft();
    draft.contact = "98765-4321".into();
    assert_eq!(draft.validate().unwrap_err().fields(), ["contact"]);
  }

  #[test]
  fn exactly_ten_digits_is_accepted() {
    let mut draft = valid_draft();
    draft.contact = "1234567890".into();
    assert!(draft.validate().is_ok());
  }

  #[test]
  fn malformed_email_is_rejected() {
    let mut draft = valid_draft();
    draft.email_id = "not-an-email".into();
    assert_eq!(draft.validate().unwrap_err().fields(), ["email_id"]);
  }

  #[test]
  fn email_without_dot_in_domain_is_rejected() {
    let mut draft = valid_draft();
    draft.email_id = "a@b".into();
    assert_eq!(draft.validate().unwrap_err().fields(), ["email_id"]);
  }

  #[test]
  fn short_email_is_accepted() {
    let mut draft = valid_draft();
    draft.email_id = "a@b.co".into();
    assert!(draft.validate().is_ok());
  }

  #[test]
  fn image_without_authority_slashes_is_rejected() {
    let mut draft = valid_draft();
    draft.image = "ftp:/bad".into();
    assert_eq!(draft.validate().unwrap_err().fields(), ["image"]);
  }

  #[test]
  fn relative_image_path_is_rejected() {
    let mut draft = valid_draft();
    draft.image = "images/school.png".into();
    assert_eq!(draft.validate().unwrap_err().fields(), ["image"]);
  }

  // ── Multiple simultaneous violations ───────────────────────────────────

  #[test]
  fn all_violations_surface_together() {
    let draft = SchoolDraft {
      name:     "X".into(),
      address:  "what".into(),
      city:     "L".into(),
      state:    "U".into(),
      contact:  "123".into(),
      email_id: "nope".into(),
      image:    "ftp:/bad".into(),
    };
    let violations = draft.validate().unwrap_err();
    assert_eq!(
      violations.fields(),
      ["name", "address", "city", "state", "contact", "email_id", "image"]
    );
    assert!(violations.0.iter().all(|v| !v.reason.is_empty()));
  }

  #[test]
  fn two_violations_report_exactly_two_fields() {
    let mut draft = valid_draft();
    draft.contact = "12345".into();
    draft.email_id = "not-an-email".into();
    assert_eq!(draft.validate().unwrap_err().fields(), ["contact", "email_id"]);
  }

  #[test]
  fn violation_reasons_are_human_readable() {
    let mut draft = valid_draft();
    draft.name = "X".into();
    let violations = draft.validate().unwrap_err();
    assert_eq!(
      violations.0[0].reason,
      "school name must be at least 2 characters"
    );
    assert_eq!(
      violations.to_string(),
      "name: school name must be at least 2 characters"
    );
  }
}
