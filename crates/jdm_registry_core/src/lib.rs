//! Core domain logic for the JDM parts registry.
//! This crate owns the part model, its storage gateway and the use-case
//! service that the HTTP layer calls into.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::seed::{seed_if_empty, SeedReport, STARTER_PARTS};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::part::{NewPart, Part, PartId, PartValidationError};
pub use repo::part_repo::{
    PartRepository, PartRows, RepoError, RepoResult, SharedPartRepository, SqlitePartRepository,
};
pub use service::part_service::{PartService, PartServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
