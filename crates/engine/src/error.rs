//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`Validation`] thrown when an entry references an inconsistent or unknown
//!   node of the `Type → Category → Subcategory` hierarchy.
//! - [`KeyNotFound`] thrown when an item are not found.
//! - [`ExistingKey`] thrown when a reference row with the same key exists.
//!
//!  [`Validation`]: EngineError::Validation
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`ExistingKey`]: EngineError::ExistingKey
use sea_orm::DbErr;
use thiserror::Error;

use crate::validation::ValidationErrors;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl From<ValidationErrors> for EngineError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::InvalidName(a), Self::InvalidName(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
