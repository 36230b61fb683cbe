//! Part use-case service.
//!
//! # Responsibility
//! - Validate create/rename input before any storage call.
//! - Translate zero affected rows into a semantic `NotFound`.
//!
//! # Invariants
//! - Invalid input never reaches the repository.
//! - Service holds no per-request state.

use crate::db::seed::{seed_if_empty, SeedReport, STARTER_PARTS};
use crate::model::part::{validate_name, NewPart, PartId, PartValidationError};
use crate::repo::part_repo::{PartRepository, PartRows, RepoError, RepoResult};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, PartServiceError>;

/// Service error for part use-cases.
#[derive(Debug)]
pub enum PartServiceError {
    /// Input rejected before storage access.
    Validation(PartValidationError),
    /// Target part does not exist.
    NotFound(PartId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for PartServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "part not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PartServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<PartValidationError> for PartServiceError {
    fn from(value: PartValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for PartServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service wrapper for part CRUD operations.
pub struct PartService<R: PartRepository> {
    repo: R,
}

impl<R: PartRepository> PartService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Visits the full inventory through a lazy row iterator.
    pub fn with_inventory<T>(
        &self,
        visit: impl FnOnce(&mut PartRows<'_>) -> T,
    ) -> ServiceResult<T> {
        Ok(self.repo.scan_parts(visit)?)
    }

    /// Validates and inserts a new part.
    ///
    /// # Contract
    /// - Blank `name` or `car_model` returns `Validation` without a write.
    /// - Returns the storage-assigned id.
    pub fn create_part(&self, name: &str, car_model: &str) -> ServiceResult<PartId> {
        let part = NewPart::new(name, car_model)?;
        Ok(self.repo.insert_part(&part)?)
    }

    /// Replaces the name of an existing part. `car_model` is never touched.
    ///
    /// # Contract
    /// - Blank `name` returns `Validation` without a write.
    /// - Unknown `id` returns `NotFound`.
    pub fn rename_part(&self, id: PartId, name: &str) -> ServiceResult<()> {
        validate_name(name)?;
        match self.repo.update_part_name(id, name)? {
            0 => Err(PartServiceError::NotFound(id)),
            _ => Ok(()),
        }
    }

    /// Permanently deletes a part. Unknown `id` returns `NotFound`.
    pub fn delete_part(&self, id: PartId) -> ServiceResult<()> {
        match self.repo.delete_part(id)? {
            0 => Err(PartServiceError::NotFound(id)),
            _ => Ok(()),
        }
    }

    /// Inserts the starter inventory when the store is empty.
    pub fn seed_starter_inventory(&self) -> RepoResult<SeedReport> {
        seed_if_empty(&self.repo, &STARTER_PARTS)
    }
}
