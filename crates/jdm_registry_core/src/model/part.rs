//! Part domain model.
//!
//! # Responsibility
//! - Define the single inventory record served by the registry.
//! - Validate creation input before it reaches storage.
//!
//! # Invariants
//! - `id` is assigned by storage and never changes afterwards.
//! - `name` and `car_model` are non-empty at creation time.
//! - `(name, car_model)` pairs are not unique; duplicates are allowed.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned identifier of a part row.
pub type PartId = i64;

/// One inventory row: a named component fitted to a car model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Auto-incremented primary key.
    pub id: PartId,
    /// Free-form part name. Mutable through the rename path.
    pub name: String,
    /// Free-form car model. Fixed after creation.
    pub car_model: String,
}

/// Validated input for inserting a new part.
///
/// Only constructible through [`NewPart::new`], so holders can rely on
/// both fields being non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPart {
    name: String,
    car_model: String,
}

impl NewPart {
    /// Builds creation input, rejecting empty or whitespace-only fields.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is blank.
    /// - `EmptyCarModel` when `car_model` is blank.
    pub fn new(
        name: impl Into<String>,
        car_model: impl Into<String>,
    ) -> Result<Self, PartValidationError> {
        let name = name.into();
        let car_model = car_model.into();
        validate_name(&name)?;
        if car_model.trim().is_empty() {
            return Err(PartValidationError::EmptyCarModel);
        }
        Ok(Self { name, car_model })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn car_model(&self) -> &str {
        &self.car_model
    }
}

/// Rejects a blank part name.
///
/// Shared by creation and rename so both paths agree on what "empty" means.
pub fn validate_name(name: &str) -> Result<(), PartValidationError> {
    if name.trim().is_empty() {
        return Err(PartValidationError::EmptyName);
    }
    Ok(())
}

/// Domain validation failures for part input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartValidationError {
    EmptyName,
    EmptyCarModel,
}

impl Display for PartValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "part name must not be empty"),
            Self::EmptyCarModel => write!(f, "car model must not be empty"),
        }
    }
}

impl Error for PartValidationError {}
