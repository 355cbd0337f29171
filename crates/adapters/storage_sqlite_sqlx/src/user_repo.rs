//! `SQLite` implementation of [`UserRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use roster_app::ports::UserRepository;
use roster_domain::error::RosterError;
use roster_domain::id::UserId;
use roster_domain::user::{User, UserPayload};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`User`].
struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(User {
            id: UserId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            age: row.try_get("age")?,
            location: row.try_get("location")?,
        }))
    }
}

const SELECT_ALL: &str = "SELECT id, name, age, location FROM users ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, name, age, location FROM users WHERE id = ?";
const INSERT: &str = "INSERT INTO users (name, location, age) VALUES (?, ?, ?)";
const UPDATE: &str = "UPDATE users SET name = ?, location = ?, age = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM users WHERE id = ?";

/// `SQLite`-backed user repository.
///
/// Holds a clone of the shared pool; each call checks a connection out for
/// the duration of its single statement.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            if row.is_none() {
                tracing::debug!(%id, "no user row matched");
            }

            Ok(Wrapper::maybe(row))
        }
    }

    fn insert(
        &self,
        payload: UserPayload,
    ) -> impl Future<Output = Result<UserId, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&payload.name)
                .bind(&payload.location)
                .bind(payload.age)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            let id = UserId::new(result.last_insert_rowid());
            tracing::debug!(%id, "inserted user row");

            Ok(id)
        }
    }

    fn update(
        &self,
        id: UserId,
        payload: UserPayload,
    ) -> impl Future<Output = Result<u64, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&payload.name)
                .bind(&payload.location)
                .bind(payload.age)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            let affected = result.rows_affected();
            tracing::debug!(%id, affected, "updated user rows");

            Ok(affected)
        }
    }

    fn delete(&self, id: UserId) -> impl Future<Output = Result<u64, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            let affected = result.rows_affected();
            tracing::debug!(%id, affected, "deleted user rows");

            Ok(affected)
        }
    }
}
