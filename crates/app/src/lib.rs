//! # roster-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement
//!   (driven/outbound port): `UserRepository` — list, get, insert, update, delete
//! - Define the **driving/inbound port** as a use-case struct:
//!   `UserService` — list, get, create, update, delete
//! - Turn repository absence (`None`) into an explicit not-found error
//!
//! ## Dependency rule
//! Depends on `roster-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
