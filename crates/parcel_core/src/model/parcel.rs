//! Parcel domain model.
//!
//! # Responsibility
//! - Define the in-memory shape of one tracked shipment.
//! - Map `ParcelStatus` to and from the literals stored in `parcel.status`.
//!
//! # Invariants
//! - `number` is `0` until the store assigns one, and never changes afterwards.
//! - `created_at` is an RFC3339 UTC timestamp and is stored verbatim.
//! - Status literals are exactly `registered`, `sent`, `delivered`.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Store-assigned parcel identifier (SQLite rowid).
pub type ParcelNumber = i64;

/// Lifecycle label of a parcel.
///
/// The store accepts any value in any order; transition policy belongs to
/// `ParcelService`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParcelStatus {
    /// Accepted from the client, not yet shipped.
    Registered,
    /// Handed over for delivery.
    Sent,
    /// Received by the addressee.
    Delivered,
}

impl ParcelStatus {
    /// Returns the storage literal for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
        }
    }

    /// Returns the status that follows this one, or `None` when delivered.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Registered => Some(Self::Sent),
            Self::Sent => Some(Self::Delivered),
            Self::Delivered => None,
        }
    }
}

impl Display for ParcelStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status literal is outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError(pub String);

impl Display for ParseStatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown parcel status `{}`; expected registered|sent|delivered",
            self.0
        )
    }
}

impl Error for ParseStatusError {}

impl FromStr for ParcelStatus {
    type Err = ParseStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "registered" => Ok(Self::Registered),
            "sent" => Ok(Self::Sent),
            "delivered" => Ok(Self::Delivered),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// One tracked shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Assigned by the store on insert; `0` for unsaved parcels.
    pub number: ParcelNumber,
    /// Owning client. Many parcels may share one client.
    pub client: i64,
    pub status: ParcelStatus,
    /// Free-text delivery address.
    pub address: String,
    /// RFC3339 UTC creation time, set before insertion.
    pub created_at: String,
}

impl Parcel {
    /// Creates an unsaved, registered parcel stamped with the current time.
    pub fn new(client: i64, address: impl Into<String>) -> Self {
        Self {
            number: 0,
            client,
            status: ParcelStatus::Registered,
            address: address.into(),
            created_at: now_rfc3339(),
        }
    }

    /// Returns whether the store has assigned a number to this parcel.
    pub fn is_saved(&self) -> bool {
        self.number > 0
    }
}

/// Current UTC time as RFC3339 with second precision, e.g. `2026-10-19T08:00:00Z`.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
