//! Storage port — repository trait for user persistence.

use std::future::Future;

use roster_domain::error::RosterError;
use roster_domain::id::UserId;
use roster_domain::user::{User, UserPayload};

/// Repository for persisting and querying [`User`]s.
///
/// Every method is a single statement against the store. Mutations report
/// how many rows they touched rather than failing on a missing id.
pub trait UserRepository {
    /// Get all users, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, RosterError>> + Send;

    /// Get a user by id. `None` when no row matches.
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, RosterError>> + Send;

    /// Insert a new user and return the id assigned by the store.
    fn insert(
        &self,
        payload: UserPayload,
    ) -> impl Future<Output = Result<UserId, RosterError>> + Send;

    /// Overwrite every non-id field of the user with `id`.
    ///
    /// Returns the number of rows affected; `0` means no such user and
    /// nothing was created.
    fn update(
        &self,
        id: UserId,
        payload: UserPayload,
    ) -> impl Future<Output = Result<u64, RosterError>> + Send;

    /// Delete the user with `id`, returning the number of rows affected.
    fn delete(&self, id: UserId) -> impl Future<Output = Result<u64, RosterError>> + Send;
}
