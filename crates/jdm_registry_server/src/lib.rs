//! HTTP surface for the JDM parts registry.
//!
//! Maps requests on `/` and `/parts` onto `jdm_registry_core` use-cases and
//! renders results as plain text.

pub mod config;
pub mod error;
pub mod handlers;
pub mod observability;
pub mod router;

pub use config::{ConfigError, DatabaseLocation, ServerConfig};
pub use error::{ApiError, Operation};
pub use router::{build_router, AppState, PARTS_PATH};
