//! Domain layer for the shipment service.
//!
//! This crate holds the shipment aggregate and the rules that guard it:
//! - `Dimensions` value object with positivity invariants
//! - `Shipment` aggregate root, immutable after construction
//! - `ShipmentDomainService` for creating shipments and rerouting them
//!
//! Everything here is synchronous and free of I/O; persistence and event
//! publication live behind ports in the `store` and `messaging` crates.

pub mod shipment;

pub use shipment::{
    Dimensions, DomainError, Shipment, ShipmentDomainService, ValidationError,
};
