//! Use-case orchestration for the shipment service.
//!
//! Each request flows through the same linear protocol: domain validation,
//! persistence via the repository port, mapping to the external
//! representation, then event publication via the publisher port. The
//! representation returned to the caller is byte-for-byte the payload that
//! downstream subscribers receive.

pub mod dto;
pub mod error;
pub mod events;
pub mod service;

pub use dto::{CreateShipment, DimensionsDto, ShipmentDto, UpdateShipmentDestination};
pub use error::ApplicationError;
pub use events::{SHIPMENT_EVENTS_TOPIC, ShipmentEvent};
pub use service::ShipmentService;
