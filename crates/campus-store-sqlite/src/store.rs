//! [`SqliteStore`] — the SQLite implementation of [`DirectoryStore`].

use std::path::Path;

use campus_core::{
  school::{NewSchool, School},
  store::DirectoryStore,
};
use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use crate::{
  Result,
  encode::{RawSchool, encode_dt, encode_uuid},
  schema::SCHEMA,
};

const SCHOOL_COLUMNS: &str = "school_id, name, address, city, state, \
                              contact, email_id, image, created_at, updated_at";

fn row_to_raw(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawSchool> {
  Ok(RawSchool {
    school_id:  row.get(0)?,
    name:       row.get(1)?,
    address:    row.get(2)?,
    city:       row.get(3)?,
    state:      row.get(4)?,
    contact:    row.get(5)?,
    email_id:   row.get(6)?,
    image:      row.get(7)?,
    created_at: row.get(8)?,
    updated_at: row.get(9)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A school directory backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── DirectoryStore impl ─────────────────────────────────────────────────────

impl DirectoryStore for SqliteStore {
  type Error = crate::Error;

  async fn create_school(&self, input: NewSchool) -> Result<School> {
    let now = Utc::now();
    let school = School {
      school_id:  Uuid::new_v4(),
      name:       input.name,
      address:    input.address,
      city:       input.city,
      state:      input.state,
      contact:    input.contact,
      email_id:   input.email_id,
      image:      input.image,
      created_at: now,
      updated_at: now,
    };

    let id_str         = encode_uuid(school.school_id);
    let created_at_str = encode_dt(school.created_at);
    let updated_at_str = encode_dt(school.updated_at);
    let row            = school.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO schools (
             school_id, name, address, city, state,
             contact, email_id, image, created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
          rusqlite::params![
            id_str,
            row.name,
            row.address,
            row.city,
            row.state,
            row.contact,
            row.email_id,
            row.image,
            created_at_str,
            updated_at_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(school)
  }

  async fn list_schools(&self) -> Result<Vec<School>> {
    let raws: Vec<RawSchool> = self
      .conn
      .call(|conn| {
        // rowid breaks ties between records created in the same instant.
        let mut stmt = conn.prepare(&format!(
          "SELECT {SCHOOL_COLUMNS} FROM schools
           ORDER BY created_at DESC, rowid DESC"
        ))?;
        let rows = stmt
          .query_map([], row_to_raw)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSchool::into_school).collect()
  }

  async fn get_school(&self, id: Uuid) -> Result<Option<School>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawSchool> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {SCHOOL_COLUMNS} FROM schools WHERE school_id = ?1"),
              rusqlite::params![id_str],
              row_to_raw,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawSchool::into_school).transpose()
  }
}
