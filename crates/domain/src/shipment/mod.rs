//! Shipment aggregate and related types.

mod aggregate;
mod service;
mod value_objects;

pub use aggregate::Shipment;
pub use service::ShipmentDomainService;
pub use value_objects::{Dimensions, ValidationError};

use thiserror::Error;

/// Business-rule violations raised while constructing or rerouting a shipment.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A required text field was empty.
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    /// Shipment weight must be strictly positive.
    #[error("weight must be greater than zero, got {weight}")]
    InvalidWeight { weight: f64 },

    /// The dimensions value object could not be built.
    #[error(transparent)]
    Dimensions(#[from] ValidationError),
}
