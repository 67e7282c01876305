//! Pure, in-memory narrowing of an already-fetched school list.
//!
//! Filtering never touches the network and never mutates the snapshot it is
//! given; it always produces a new derived view.

use crate::school::School;

/// True when `query` is a case-insensitive substring of the school's name,
/// city, or state.
pub fn matches_query(school: &School, query: &str) -> bool {
  let q = query.to_lowercase();
  school.name.to_lowercase().contains(&q)
    || school.city.to_lowercase().contains(&q)
    || school.state.to_lowercase().contains(&q)
}

/// The ordered subsequence of `schools` matching `query`, preserving the
/// original relative order.
///
/// An empty or whitespace-only query returns the full list unchanged.
/// Idempotent: filtering twice with the same query equals filtering once.
pub fn filter_schools(schools: &[School], query: &str) -> Vec<School> {
  let query = query.trim();
  if query.is_empty() {
    return schools.to_vec();
  }
  schools
    .iter()
    .filter(|s| matches_query(s, query))
    .cloned()
    .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use chrono::Utc;
  use uuid::Uuid;

  use super::*;

  fn school(name: &str, city: &str, state: &str) -> School {
    let now = Utc::now();
    School {
      school_id:  Uuid::new_v4(),
      name:       name.into(),
      address:    "12 Station Road".into(),
      city:       city.into(),
      state:      state.into(),
      contact:    "9876543210".into(),
      email_id:   "office@example.com".into(),
      image:      None,
      created_at: now,
      updated_at: now,
    }
  }

  fn sample() -> Vec<School> {
    vec![
      school("City Montessori", "Lucknow", "Uttar Pradesh"),
      school("Delhi Public School", "New Delhi", "Delhi"),
      school("St. Mary's Convent", "Lucknow", "Uttar Pradesh"),
    ]
  }

  #[test]
  fn empty_query_returns_full_list_in_order() {
    let list = sample();
    let out = filter_schools(&list, "");
    assert_eq!(out, list);
  }

  #[test]
  fn whitespace_query_returns_full_list() {
    let list = sample();
    assert_eq!(filter_schools(&list, "   "), list);
  }

  #[test]
  fn no_match_returns_empty() {
    let list = sample();
    assert!(filter_schools(&list, "mumbai").is_empty());
  }

  #[test]
  fn matching_is_case_insensitive() {
    let list = sample();
    let out = filter_schools(&list, "lucknow");
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|s| s.city == "Lucknow"));
  }

  #[test]
  fn query_matches_any_of_name_city_state() {
    let list = sample();
    assert_eq!(filter_schools(&list, "montessori").len(), 1);
    assert_eq!(filter_schools(&list, "new delhi").len(), 1);
    assert_eq!(filter_schools(&list, "uttar").len(), 2);
  }

  #[test]
  fn relative_order_is_preserved() {
    let list = sample();
    let out = filter_schools(&list, "lucknow");
    assert_eq!(out[0].name, "City Montessori");
    assert_eq!(out[1].name, "St. Mary's Convent");
  }

  #[test]
  fn filtering_is_idempotent() {
    let list = sample();
    let once = filter_schools(&list, "delhi");
    let twice = filter_schools(&once, "delhi");
    assert_eq!(once, twice);
  }

  #[test]
  fn input_snapshot_is_untouched() {
    let list = sample();
    let before = list.clone();
    let _ = filter_schools(&list, "lucknow");
    assert_eq!(list, before);
  }
}
