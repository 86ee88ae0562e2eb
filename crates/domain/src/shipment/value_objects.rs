//! Value objects for the shipment domain.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while constructing a value object.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A dimension component was zero or negative.
    #[error("{component} must be a positive value, got {value}")]
    NonPositiveDimension {
        component: &'static str,
        value: f64,
    },
}

/// Physical dimensions of a shipment.
///
/// Equality is structural: two `Dimensions` are equal when all three
/// components are equal. The invariant (every component strictly positive)
/// is checked once at construction; instances are immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    height: f64,
    width: f64,
    length: f64,
}

impl Dimensions {
    /// Builds a dimensions value object from the three measurements.
    ///
    /// Fails if any component is not strictly positive.
    pub fn new(height: f64, width: f64, length: f64) -> Result<Self, ValidationError> {
        for (component, value) in [("height", height), ("width", width), ("length", length)] {
            if value <= 0.0 || value.is_nan() {
                return Err(ValidationError::NonPositiveDimension { component, value });
            }
        }

        Ok(Self {
            height,
            width,
            length,
        })
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the volume enclosed by the dimensions.
    pub fn volume(&self) -> f64 {
        self.height * self.width * self.length
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Dimensions {{ height: {}, width: {}, length: {} }}",
            self.height, self.width, self.length
        )
    }
}
