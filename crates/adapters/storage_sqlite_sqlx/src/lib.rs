//! # roster-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `roster-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle
//! - Run the embedded migration that creates the `users` table
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `roster-app` (for port traits) and `roster-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;
mod user_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use user_repo::SqliteUserRepository;
