//! External representations and inbound request shapes.

use chrono::{DateTime, Utc};
use common::{CustomerId, ShipmentId};
use domain::{Dimensions, DomainError, Shipment};
use serde::{Deserialize, Serialize};

/// Wire shape of a shipment's dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionsDto {
    pub height: f64,
    pub width: f64,
    pub length: f64,
}

impl From<Dimensions> for DimensionsDto {
    fn from(dimensions: Dimensions) -> Self {
        Self {
            height: dimensions.height(),
            width: dimensions.width(),
            length: dimensions.length(),
        }
    }
}

/// Canonical external representation of a shipment.
///
/// Used both as the HTTP response body and as the payload of published
/// events, so what a client sees is exactly what subscribers receive. The
/// deposit date serializes as an ISO-8601 (RFC 3339) string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentDto {
    pub shipment_id: String,
    pub customer_id: String,
    pub weight: f64,
    pub dimensions: DimensionsDto,
    pub shipment_type: String,
    pub origin: String,
    pub destination: String,
    pub deposit_date: DateTime<Utc>,
}

impl From<&Shipment> for ShipmentDto {
    fn from(shipment: &Shipment) -> Self {
        Self {
            shipment_id: shipment.shipment_id().to_string(),
            customer_id: shipment.customer_id().to_string(),
            weight: shipment.weight(),
            dimensions: shipment.dimensions().into(),
            shipment_type: shipment.shipment_type().to_string(),
            origin: shipment.origin().to_string(),
            destination: shipment.destination().to_string(),
            deposit_date: shipment.deposit_date(),
        }
    }
}

impl TryFrom<ShipmentDto> for Shipment {
    type Error = DomainError;

    fn try_from(dto: ShipmentDto) -> Result<Self, Self::Error> {
        let dimensions = Dimensions::new(
            dto.dimensions.height,
            dto.dimensions.width,
            dto.dimensions.length,
        )?;

        Shipment::new(
            ShipmentId::new(dto.shipment_id),
            CustomerId::new(dto.customer_id),
            dto.weight,
            dimensions,
            dto.shipment_type,
            dto.origin,
            dto.destination,
            dto.deposit_date,
        )
    }
}

/// Inbound request shape for creating a shipment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShipment {
    pub shipment_id: String,
    pub customer_id: String,
    pub weight: f64,
    pub dimensions: DimensionsDto,
    pub shipment_type: String,
    pub origin: String,
    pub destination: String,
    pub deposit_date: DateTime<Utc>,
}

/// Inbound request shape for re-routing a shipment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShipmentDestination {
    pub shipment_id: String,
    pub new_destination: String,
}
