//! The `DirectoryStore` trait — the only interface between this core and
//! persisted state.
//!
//! The trait is implemented by storage backends (`campus-store-sqlite`) and
//! by the remote HTTP facade (`campus-client`). Higher layers depend on this
//! abstraction, not on any concrete backend, so an in-process store can
//! stand in for the remote one without touching callers.

use std::future::Future;

use uuid::Uuid;

use crate::school::{NewSchool, School};

/// Abstraction over a school directory backend.
///
/// Records are created once and never updated or deleted through this
/// interface. No caching, ordering, or retry policy is imposed here;
/// consistency is whatever the backend provides, with one floor: a
/// [`list_schools`](DirectoryStore::list_schools) issued after a successful
/// create against the same backend includes the created record.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait DirectoryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a validated draft. The backend assigns `school_id`,
  /// `created_at`, and `updated_at`; callers never supply them.
  fn create_school(
    &self,
    input: NewSchool,
  ) -> impl Future<Output = Result<School, Self::Error>> + Send + '_;

  /// Every school in the directory, newest first (`created_at`
  /// descending). Never partial: the full snapshot or an error.
  fn list_schools(
    &self,
  ) -> impl Future<Output = Result<Vec<School>, Self::Error>> + Send + '_;

  /// Retrieve a school by identifier. Returns `None` when no such record
  /// exists; errors are reserved for transport and storage failures.
  fn get_school(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<School>, Self::Error>> + Send + '_;
}
