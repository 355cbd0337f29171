//! User service — use-cases for managing users.

use roster_domain::error::{NotFoundError, RosterError};
use roster_domain::id::UserId;
use roster_domain::user::{User, UserPayload};

use crate::ports::UserRepository;

/// Application service for user CRUD operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all users. An empty store yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, RosterError> {
        self.repo.get_all().await
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_user(&self, id: UserId) -> Result<User, RosterError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "User",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Store a new user and return its assigned id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_user(&self, payload: UserPayload) -> Result<UserId, RosterError> {
        let id = self.repo.insert(payload).await?;
        tracing::info!(%id, "user created");
        Ok(id)
    }

    /// Overwrite an existing user's fields, returning the rows affected.
    ///
    /// A count of `0` means `id` did not exist; it is not turned into an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn update_user(&self, id: UserId, payload: UserPayload) -> Result<u64, RosterError> {
        let affected = self.repo.update(id, payload).await?;
        tracing::info!(%id, affected, "user updated");
        Ok(affected)
    }

    /// Delete a user by id, returning the rows affected.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_user(&self, id: UserId) -> Result<u64, RosterError> {
        let affected = self.repo.delete(id).await?;
        tracing::info!(%id, affected, "user deleted");
        Ok(affected)
    }
}
