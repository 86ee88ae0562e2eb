use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Wire shape of a published domain event.
///
/// Serializes exactly as `{"event": <name>, "payload": <representation>}`,
/// which is also what downstream subscribers deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Event name, e.g. `"ShipmentCreated"`.
    pub event: String,

    /// The externally-shaped representation carried by the event.
    pub payload: serde_json::Value,
}

impl EventEnvelope {
    /// Builds an envelope from an event name and a serializable payload.
    pub fn new(event: impl Into<String>, payload: &impl Serialize) -> Result<Self> {
        Ok(Self {
            event: event.into(),
            payload: serde_json::to_value(payload)?,
        })
    }
}

/// Outbound port for event publication.
///
/// The orchestration services publish through this trait only; the concrete
/// broker behind it is interchangeable. Failures propagate to the caller
/// unchanged — there is no retry here.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publishes an event to the given topic.
    async fn publish(&self, topic: &str, envelope: EventEnvelope) -> Result<()>;
}
