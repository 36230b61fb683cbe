//! Domain model for the parts registry.
//!
//! # Responsibility
//! - Define the data structures shared by storage and request handling.
//!
//! # Invariants
//! - Every part is identified by a storage-assigned integer `PartId`.
//! - Deletion is permanent; there are no tombstones.

pub mod part;
