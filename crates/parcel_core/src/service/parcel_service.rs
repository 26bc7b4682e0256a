//! Parcel use-case service.
//!
//! # Responsibility
//! - Register parcels and list them per client.
//! - Enforce lifecycle policy the store deliberately leaves open.
//!
//! # Invariants
//! - Status only moves forward: `registered -> sent -> delivered`.
//! - Address changes and deletion are allowed only for `registered` parcels.
//! - Service APIs never bypass the repository contract.

use crate::model::parcel::{Parcel, ParcelNumber, ParcelStatus};
use crate::repo::parcel_repo::{ParcelRepository, RepoError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for parcel use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Target parcel does not exist.
    NotFound(ParcelNumber),
    /// Operation requires a `registered` parcel.
    NotRegistered {
        number: ParcelNumber,
        status: ParcelStatus,
    },
    /// Parcel has no further status to advance to.
    AlreadyDelivered(ParcelNumber),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(number) => write!(f, "parcel not found: {number}"),
            Self::NotRegistered { number, status } => write!(
                f,
                "parcel {number} has status `{status}`; only registered parcels can be changed"
            ),
            Self::AlreadyDelivered(number) => write!(f, "parcel {number} is already delivered"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(number) => Self::NotFound(number),
            other => Self::Repo(other),
        }
    }
}

/// Use-case service wrapper around a parcel repository.
pub struct ParcelService<R: ParcelRepository> {
    repo: R,
}

impl<R: ParcelRepository> ParcelService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new parcel for `client` and returns it with its number.
    pub fn register(&self, client: i64, address: impl Into<String>) -> ServiceResult<Parcel> {
        let mut parcel = Parcel::new(client, address);
        parcel.number = self.repo.add(&parcel)?;

        info!(
            "event=parcel_register module=service status=ok number={} client={}",
            parcel.number, parcel.client
        );
        Ok(parcel)
    }

    /// Lists all parcels owned by `client`.
    pub fn client_parcels(&self, client: i64) -> ServiceResult<Vec<Parcel>> {
        Ok(self.repo.get_by_client(client)?)
    }

    /// Advances a parcel to its next status and returns the new status.
    pub fn next_status(&self, number: ParcelNumber) -> ServiceResult<ParcelStatus> {
        let parcel = self.repo.get(number)?;
        let next = parcel
            .status
            .next()
            .ok_or(ServiceError::AlreadyDelivered(number))?;
        self.repo.set_status(number, next)?;

        info!(
            "event=parcel_status module=service status=ok number={number} from={} to={next}",
            parcel.status
        );
        Ok(next)
    }

    /// Changes the delivery address of a registered parcel.
    pub fn change_address(&self, number: ParcelNumber, address: &str) -> ServiceResult<()> {
        self.require_registered(number)?;
        self.repo.set_address(number, address)?;

        info!("event=parcel_address module=service status=ok number={number}");
        Ok(())
    }

    /// Deletes a registered parcel.
    pub fn delete(&self, number: ParcelNumber) -> ServiceResult<()> {
        self.require_registered(number)?;
        self.repo.delete(number)?;

        info!("event=parcel_delete module=service status=ok number={number}");
        Ok(())
    }

    fn require_registered(&self, number: ParcelNumber) -> ServiceResult<()> {
        let parcel = self.repo.get(number)?;
        if parcel.status != ParcelStatus::Registered {
            return Err(ServiceError::NotRegistered {
                number,
                status: parcel.status,
            });
        }
        Ok(())
    }
}
