//! Shipment domain events.

use messaging::{EventEnvelope, PublishError};

use crate::dto::ShipmentDto;

/// Logical topic carrying all shipment events.
pub const SHIPMENT_EVENTS_TOPIC: &str = "shipment.events";

/// Events emitted by the shipment use cases.
///
/// Both variants carry the same external representation that was returned to
/// the caller of the originating request.
#[derive(Debug, Clone, PartialEq)]
pub enum ShipmentEvent {
    /// A shipment was created.
    Created(ShipmentDto),

    /// A shipment's destination was updated.
    Updated(ShipmentDto),
}

impl ShipmentEvent {
    /// Returns the event type name.
    pub fn event_type(&self) -> &'static str {
        match self {
            ShipmentEvent::Created(_) => "ShipmentCreated",
            ShipmentEvent::Updated(_) => "ShipmentUpdated",
        }
    }

    /// Returns the carried representation.
    pub fn payload(&self) -> &ShipmentDto {
        match self {
            ShipmentEvent::Created(dto) | ShipmentEvent::Updated(dto) => dto,
        }
    }

    /// Converts the event into its wire envelope.
    pub fn into_envelope(self) -> Result<EventEnvelope, PublishError> {
        EventEnvelope::new(self.event_type(), self.payload())
    }
}
