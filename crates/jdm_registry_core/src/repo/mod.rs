//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the storage gateway contract for parts.
//! - Isolate SQLite query details from service and HTTP orchestration.
//!
//! # Invariants
//! - Write paths report affected-row counts; `0` means "no such id" and is
//!   not an error at this layer.
//! - Listing never aborts on a single undecodable row.

pub mod part_repo;
