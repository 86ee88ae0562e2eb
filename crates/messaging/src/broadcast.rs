use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::{
    Result,
    publisher::{EventEnvelope, EventPublisher},
};

/// A published event paired with the topic it was sent to.
pub type TopicEvent = (String, EventEnvelope);

/// Broadcast-channel event publisher.
///
/// Fans published events out to in-process subscribers over a tokio
/// broadcast channel. Publishing never fails: with no subscribers the event
/// is dropped, mirroring a broker with no consumers attached.
#[derive(Debug, Clone)]
pub struct BroadcastEventPublisher {
    sender: broadcast::Sender<TopicEvent>,
}

impl BroadcastEventPublisher {
    /// Creates a publisher whose channel buffers up to `capacity` events per
    /// subscriber before lagging ones start losing the oldest.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribes to all subsequently published events.
    pub fn subscribe(&self) -> broadcast::Receiver<TopicEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastEventPublisher {
    fn default() -> Self {
        Self::new(256)
    }
}

#[async_trait]
impl EventPublisher for BroadcastEventPublisher {
    async fn publish(&self, topic: &str, envelope: EventEnvelope) -> Result<()> {
        tracing::info!(topic, event = %envelope.event, "publishing event");

        // An Err here only means there are no subscribers right now.
        let _ = self.sender.send((topic.to_string(), envelope));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_published_events() {
        let publisher = BroadcastEventPublisher::default();
        let mut receiver = publisher.subscribe();

        let envelope =
            EventEnvelope::new("ShipmentCreated", &serde_json::json!({"id": "12345"})).unwrap();
        publisher
            .publish("shipment.events", envelope.clone())
            .await
            .unwrap();

        let (topic, received) = receiver.recv().await.unwrap();
        assert_eq!(topic, "shipment.events");
        assert_eq!(received, envelope);
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_ok() {
        let publisher = BroadcastEventPublisher::default();
        let envelope = EventEnvelope::new("ShipmentUpdated", &serde_json::json!({})).unwrap();
        publisher.publish("shipment.events", envelope).await.unwrap();
    }
}
