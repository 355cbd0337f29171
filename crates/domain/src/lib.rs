//! # roster-domain
//!
//! Pure domain model for the roster user directory.
//!
//! ## Responsibilities
//! - Foundational types: the typed user identifier and error conventions
//! - Define the **User** entity and the **`UserPayload`** used to create or
//!   overwrite one
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod user;
