//! Persistence layer for shipments.
//!
//! Exposes the [`ShipmentRepository`] port consumed by the orchestration
//! services, together with two implementations: an in-memory store for tests
//! and local runs, and a PostgreSQL store backed by sqlx.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod repository;

pub use error::{Result, StoreError};
pub use memory::InMemoryShipmentRepository;
pub use postgres::PostgresShipmentRepository;
pub use repository::ShipmentRepository;
