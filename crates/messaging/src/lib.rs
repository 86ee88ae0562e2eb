//! Event publication layer.
//!
//! Exposes the [`EventPublisher`] port consumed by the orchestration
//! services, the [`EventEnvelope`] wire shape, and two implementations:
//! a recording in-memory publisher for tests and a broadcast-channel
//! publisher for in-process subscribers.

pub mod broadcast;
pub mod error;
pub mod memory;
pub mod publisher;

pub use broadcast::BroadcastEventPublisher;
pub use error::{PublishError, Result};
pub use memory::{InMemoryEventPublisher, PublishedEvent};
pub use publisher::{EventEnvelope, EventPublisher};
