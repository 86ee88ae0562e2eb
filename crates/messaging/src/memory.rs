use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::{
    PublishError, Result,
    publisher::{EventEnvelope, EventPublisher},
};

/// A single event captured by the in-memory publisher.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedEvent {
    pub topic: String,
    pub envelope: EventEnvelope,
}

#[derive(Debug, Default)]
struct InMemoryPublisherState {
    published: Vec<PublishedEvent>,
    fail_on_publish: bool,
}

/// In-memory event publisher for testing.
///
/// Records every published event so tests can assert on what was emitted,
/// and can be toggled to fail for broker-failure scenarios.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventPublisher {
    state: Arc<RwLock<InMemoryPublisherState>>,
}

impl InMemoryEventPublisher {
    /// Creates a new in-memory publisher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the publisher to fail on subsequent publish calls.
    pub fn set_fail_on_publish(&self, fail: bool) {
        self.state.write().unwrap().fail_on_publish = fail;
    }

    /// Returns all events published so far.
    pub fn published(&self) -> Vec<PublishedEvent> {
        self.state.read().unwrap().published.clone()
    }

    /// Returns the number of events published so far.
    pub fn published_count(&self) -> usize {
        self.state.read().unwrap().published.len()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventPublisher {
    async fn publish(&self, topic: &str, envelope: EventEnvelope) -> Result<()> {
        let mut state = self.state.write().unwrap();
        if state.fail_on_publish {
            return Err(PublishError::Broker("publish failed".to_string()));
        }
        state.published.push(PublishedEvent {
            topic: topic.to_string(),
            envelope,
        });
        Ok(())
    }
}
