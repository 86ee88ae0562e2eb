//! Domain service for shipment creation and re-routing.

use chrono::{DateTime, Utc};
use common::{CustomerId, ShipmentId};

use super::{Dimensions, DomainError, Shipment};

/// Pure domain service enforcing the shipment business rules.
///
/// Both operations are synchronous and perform no I/O. They either return a
/// freshly constructed [`Shipment`] or a [`DomainError`]; existing instances
/// are never mutated.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShipmentDomainService;

impl ShipmentDomainService {
    pub fn new() -> Self {
        Self
    }

    /// Creates a new shipment.
    ///
    /// Rejects non-positive weight here; the remaining field invariants are
    /// enforced by the aggregate constructor.
    #[allow(clippy::too_many_arguments)]
    pub fn create_shipment(
        &self,
        shipment_id: ShipmentId,
        customer_id: CustomerId,
        weight: f64,
        dimensions: Dimensions,
        shipment_type: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        deposit_date: DateTime<Utc>,
    ) -> Result<Shipment, DomainError> {
        if weight <= 0.0 || weight.is_nan() {
            return Err(DomainError::InvalidWeight { weight });
        }

        Shipment::new(
            shipment_id,
            customer_id,
            weight,
            dimensions,
            shipment_type,
            origin,
            destination,
            deposit_date,
        )
    }

    /// Re-routes a shipment to a new destination.
    ///
    /// The shipment is immutable, so this returns a new instance carrying the
    /// updated destination and sharing every other field with the input.
    pub fn update_destination(
        &self,
        shipment: &Shipment,
        new_destination: impl Into<String>,
    ) -> Result<Shipment, DomainError> {
        shipment.with_destination(new_destination)
    }
}
