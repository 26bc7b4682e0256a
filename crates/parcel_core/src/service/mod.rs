//! Core use-case services.
//!
//! # Responsibility
//! - Apply parcel lifecycle policy on top of repository calls.
//! - Keep callers decoupled from storage details.

pub mod parcel_service;
