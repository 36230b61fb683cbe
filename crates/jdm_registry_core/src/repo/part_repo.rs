//! Part repository contracts and SQLite implementations.
//!
//! # Responsibility
//! - Provide list/insert/update/delete primitives over `jdm_parts`.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `scan_parts` yields rows lazily in storage-native order, once per call.
//! - Decode failures surface as `Err` items; the scan continues past them.
//! - Name/model constraints are enforced by callers, not here.

use crate::db::DbError;
use crate::model::part::{NewPart, Part, PartId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex};

const PART_SELECT_SQL: &str = "SELECT id, name, car_model FROM jdm_parts";

pub type RepoResult<T> = Result<T, RepoError>;

/// Lazy, forward-only sequence of decoded rows handed to scan visitors.
pub type PartRows<'a> = dyn Iterator<Item = RepoResult<Part>> + 'a;

/// Generic repository error for part persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// The shared connection cannot be used (for example a poisoned lock).
    Unavailable(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage gateway for the part entity.
pub trait PartRepository {
    /// Runs `visit` over every stored part and returns its result.
    ///
    /// The iterator is only valid inside `visit`; rows that fail to decode
    /// are yielded as `Err` and do not end the iteration.
    fn scan_parts<T>(&self, visit: impl FnOnce(&mut PartRows<'_>) -> T) -> RepoResult<T>;
    fn count_parts(&self) -> RepoResult<u64>;
    fn insert_part(&self, part: &NewPart) -> RepoResult<PartId>;
    fn update_part_name(&self, id: PartId, name: &str) -> RepoResult<usize>;
    fn delete_part(&self, id: PartId) -> RepoResult<usize>;
}

/// SQLite-backed part repository borrowing an open connection.
pub struct SqlitePartRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePartRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PartRepository for SqlitePartRepository<'_> {
    fn scan_parts<T>(&self, visit: impl FnOnce(&mut PartRows<'_>) -> T) -> RepoResult<T> {
        let mut stmt = self.conn.prepare(PART_SELECT_SQL)?;
        let mut rows = stmt
            .query_map([], parse_part_row)?
            .map(|row| row.map_err(RepoError::from));
        Ok(visit(&mut rows))
    }

    fn count_parts(&self) -> RepoResult<u64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM jdm_parts;", [], |row| {
                row.get::<_, i64>(0)
            })?;
        Ok(count.max(0) as u64)
    }

    fn insert_part(&self, part: &NewPart) -> RepoResult<PartId> {
        self.conn.execute(
            "INSERT INTO jdm_parts (name, car_model) VALUES (?1, ?2);",
            params![part.name(), part.car_model()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_part_name(&self, id: PartId, name: &str) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "UPDATE jdm_parts SET name = ?1 WHERE id = ?2;",
            params![name, id],
        )?;
        Ok(changed)
    }

    fn delete_part(&self, id: PartId) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM jdm_parts WHERE id = ?1;", [id])?;
        Ok(changed)
    }
}

/// Part repository owning a connection shared across request tasks.
///
/// Each call takes the connection lock for its own duration only; isolation
/// beyond that is left to SQLite.
#[derive(Clone)]
pub struct SharedPartRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SharedPartRepository {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    fn with_repo<T>(
        &self,
        f: impl FnOnce(&SqlitePartRepository<'_>) -> RepoResult<T>,
    ) -> RepoResult<T> {
        let guard = self
            .conn
            .lock()
            .map_err(|_| RepoError::Unavailable("connection lock poisoned".to_string()))?;
        f(&SqlitePartRepository::new(&guard))
    }
}

impl PartRepository for SharedPartRepository {
    fn scan_parts<T>(&self, visit: impl FnOnce(&mut PartRows<'_>) -> T) -> RepoResult<T> {
        self.with_repo(|repo| repo.scan_parts(visit))
    }

    fn count_parts(&self) -> RepoResult<u64> {
        self.with_repo(|repo| repo.count_parts())
    }

    fn insert_part(&self, part: &NewPart) -> RepoResult<PartId> {
        self.with_repo(|repo| repo.insert_part(part))
    }

    fn update_part_name(&self, id: PartId, name: &str) -> RepoResult<usize> {
        self.with_repo(|repo| repo.update_part_name(id, name))
    }

    fn delete_part(&self, id: PartId) -> RepoResult<usize> {
        self.with_repo(|repo| repo.delete_part(id))
    }
}

fn parse_part_row(row: &Row<'_>) -> rusqlite::Result<Part> {
    Ok(Part {
        id: row.get("id")?,
        name: row.get("name")?,
        car_model: row.get("car_model")?,
    })
}
