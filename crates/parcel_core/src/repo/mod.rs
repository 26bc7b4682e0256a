//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the parcel data access contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Each repository call executes exactly one SQL statement.
//! - Repository APIs return a semantic `NotFound` distinct from DB errors.

pub mod parcel_repo;
