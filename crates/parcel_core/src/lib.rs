//! Persistence core for tracking shipped parcels.
//! `ParcelStore` owns SQL access; `ParcelService` owns lifecycle policy.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::TrackerConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::parcel::{now_rfc3339, Parcel, ParcelNumber, ParcelStatus, ParseStatusError};
pub use repo::parcel_repo::{ParcelRepository, ParcelStore, RepoError, RepoResult};
pub use service::parcel_service::{ParcelService, ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
