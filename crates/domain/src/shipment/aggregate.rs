//! Shipment aggregate implementation.

use chrono::{DateTime, Utc};
use common::{CustomerId, ShipmentId};
use serde::{Deserialize, Serialize};

use super::{Dimensions, DomainError};

/// Shipment aggregate root.
///
/// All invariants are checked once in [`Shipment::new`]; instances carry no
/// setters, so a constructed shipment can never be observed in an invalid
/// state. State changes produce a fresh instance (see
/// [`Shipment::with_destination`]) and leave the original untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    shipment_id: ShipmentId,
    customer_id: CustomerId,
    weight: f64,
    dimensions: Dimensions,
    shipment_type: String,
    origin: String,
    destination: String,
    deposit_date: DateTime<Utc>,
}

impl Shipment {
    /// Constructs a shipment, validating every required field.
    ///
    /// Fails when the shipment ID, customer ID, shipment type, origin, or
    /// destination is empty. Weight positivity is the domain service's
    /// responsibility, not the aggregate's.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        shipment_id: ShipmentId,
        customer_id: CustomerId,
        weight: f64,
        dimensions: Dimensions,
        shipment_type: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        deposit_date: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let shipment_type = shipment_type.into();
        let origin = origin.into();
        let destination = destination.into();

        if shipment_id.is_empty() {
            return Err(DomainError::EmptyField {
                field: "shipment ID",
            });
        }
        if customer_id.is_empty() {
            return Err(DomainError::EmptyField {
                field: "customer ID",
            });
        }
        if shipment_type.is_empty() {
            return Err(DomainError::EmptyField {
                field: "shipment type",
            });
        }
        if origin.is_empty() {
            return Err(DomainError::EmptyField { field: "origin" });
        }
        if destination.is_empty() {
            return Err(DomainError::EmptyField {
                field: "destination",
            });
        }

        Ok(Self {
            shipment_id,
            customer_id,
            weight,
            dimensions,
            shipment_type,
            origin,
            destination,
            deposit_date,
        })
    }

    /// Returns a new shipment identical to this one except for the
    /// destination.
    ///
    /// Re-routing to the current destination is permitted and yields an
    /// equivalent instance; an empty destination is rejected.
    pub fn with_destination(&self, new_destination: impl Into<String>) -> Result<Self, DomainError> {
        let new_destination = new_destination.into();
        if new_destination.is_empty() {
            return Err(DomainError::EmptyField {
                field: "destination",
            });
        }

        Ok(Self {
            destination: new_destination,
            ..self.clone()
        })
    }

    pub fn shipment_id(&self) -> &ShipmentId {
        &self.shipment_id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn shipment_type(&self) -> &str {
        &self.shipment_type
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn deposit_date(&self) -> DateTime<Utc> {
        self.deposit_date
    }
}

impl std::fmt::Display for Shipment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Shipment {{ shipment_id: {}, customer_id: {}, weight: {}, dimensions: {}, \
             shipment_type: {}, origin: {}, destination: {}, deposit_date: {} }}",
            self.shipment_id,
            self.customer_id,
            self.weight,
            self.dimensions,
            self.shipment_type,
            self.origin,
            self.destination,
            self.deposit_date.to_rfc3339(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn deposit_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 9, 10, 0, 0).unwrap()
    }

    fn build_shipment() -> Shipment {
        Shipment::new(
            ShipmentId::new("12345"),
            CustomerId::new("67890"),
            10.0,
            Dimensions::new(20.0, 30.0, 40.0).unwrap(),
            "Standard",
            "New York",
            "Los Angeles",
            deposit_date(),
        )
        .unwrap()
    }

    #[test]
    fn construction_preserves_all_fields() {
        let shipment = build_shipment();
        assert_eq!(shipment.shipment_id().as_str(), "12345");
        assert_eq!(shipment.customer_id().as_str(), "67890");
        assert_eq!(shipment.weight(), 10.0);
        assert_eq!(shipment.dimensions().volume(), 24000.0);
        assert_eq!(shipment.shipment_type(), "Standard");
        assert_eq!(shipment.origin(), "New York");
        assert_eq!(shipment.destination(), "Los Angeles");
        assert_eq!(shipment.deposit_date(), deposit_date());
    }

    #[test]
    fn empty_required_fields_are_rejected() {
        let dims = Dimensions::new(20.0, 30.0, 40.0).unwrap();
        let cases: Vec<(&str, Result<Shipment, DomainError>)> = vec![
            (
                "shipment ID",
                Shipment::new(
                    ShipmentId::new(""),
                    CustomerId::new("67890"),
                    10.0,
                    dims,
                    "Standard",
                    "New York",
                    "Los Angeles",
                    deposit_date(),
                ),
            ),
            (
                "customer ID",
                Shipment::new(
                    ShipmentId::new("12345"),
                    CustomerId::new(""),
                    10.0,
                    dims,
                    "Standard",
                    "New York",
                    "Los Angeles",
                    deposit_date(),
                ),
            ),
            (
                "shipment type",
                Shipment::new(
                    ShipmentId::new("12345"),
                    CustomerId::new("67890"),
                    10.0,
                    dims,
                    "",
                    "New York",
                    "Los Angeles",
                    deposit_date(),
                ),
            ),
            (
                "origin",
                Shipment::new(
                    ShipmentId::new("12345"),
                    CustomerId::new("67890"),
                    10.0,
                    dims,
                    "Standard",
                    "",
                    "Los Angeles",
                    deposit_date(),
                ),
            ),
            (
                "destination",
                Shipment::new(
                    ShipmentId::new("12345"),
                    CustomerId::new("67890"),
                    10.0,
                    dims,
                    "Standard",
                    "New York",
                    "",
                    deposit_date(),
                ),
            ),
        ];

        for (field, result) in cases {
            assert_eq!(
                result.unwrap_err(),
                DomainError::EmptyField { field },
                "expected rejection of empty {field}"
            );
        }
    }

    #[test]
    fn with_destination_replaces_only_destination() {
        let original = build_shipment();
        let rerouted = original.with_destination("San Francisco").unwrap();

        assert_eq!(rerouted.destination(), "San Francisco");
        assert_eq!(rerouted.shipment_id(), original.shipment_id());
        assert_eq!(rerouted.customer_id(), original.customer_id());
        assert_eq!(rerouted.weight(), original.weight());
        assert_eq!(rerouted.dimensions(), original.dimensions());
        assert_eq!(rerouted.shipment_type(), original.shipment_type());
        assert_eq!(rerouted.origin(), original.origin());
        assert_eq!(rerouted.deposit_date(), original.deposit_date());

        // The original instance is untouched.
        assert_eq!(original.destination(), "Los Angeles");
    }

    #[test]
    fn with_destination_rejects_empty() {
        let original = build_shipment();
        let result = original.with_destination("");
        assert_eq!(
            result.unwrap_err(),
            DomainError::EmptyField {
                field: "destination"
            }
        );
        assert_eq!(original.destination(), "Los Angeles");
    }

    #[test]
    fn with_destination_same_value_is_permitted() {
        let original = build_shipment();
        let same = original.with_destination("Los Angeles").unwrap();
        assert_eq!(same, original);
    }

    #[test]
    fn display_renders_every_field() {
        let shipment = build_shipment();
        assert_eq!(
            shipment.to_string(),
            "Shipment { shipment_id: 12345, customer_id: 67890, weight: 10, \
             dimensions: Dimensions { height: 20, width: 30, length: 40 }, \
             shipment_type: Standard, origin: New York, destination: Los Angeles, \
             deposit_date: 2025-02-09T10:00:00+00:00 }"
        );
    }

    #[test]
    fn serialization_roundtrip() {
        let shipment = build_shipment();
        let json = serde_json::to_string(&shipment).unwrap();
        let back: Shipment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shipment);
    }
}
