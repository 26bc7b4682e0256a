//! Domain model for tracked shipments.
//!
//! # Responsibility
//! - Define the canonical `Parcel` record shared by store and service code.
//! - Own the closed set of lifecycle statuses and their storage literals.
//!
//! # Invariants
//! - Every persisted parcel is identified by a store-assigned `ParcelNumber`.
//! - Deletion is a hard delete; no tombstones or history are kept.

pub mod parcel;
