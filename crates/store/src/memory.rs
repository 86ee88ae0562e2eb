use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::ShipmentId;
use domain::Shipment;
use tokio::sync::RwLock;

use crate::{
    Result, StoreError,
    repository::ShipmentRepository,
};

/// In-memory shipment repository.
///
/// Backs tests and local runs with the same interface as the PostgreSQL
/// implementation. Cloning shares the underlying map.
#[derive(Clone, Default)]
pub struct InMemoryShipmentRepository {
    shipments: Arc<RwLock<HashMap<ShipmentId, Shipment>>>,
}

impl InMemoryShipmentRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored shipments.
    pub async fn count(&self) -> usize {
        self.shipments.read().await.len()
    }

    /// Removes all stored shipments.
    pub async fn clear(&self) {
        self.shipments.write().await.clear();
    }
}

#[async_trait]
impl ShipmentRepository for InMemoryShipmentRepository {
    async fn save(&self, shipment: &Shipment) -> Result<()> {
        let mut shipments = self.shipments.write().await;
        if shipments.contains_key(shipment.shipment_id()) {
            return Err(StoreError::Duplicate(shipment.shipment_id().clone()));
        }
        shipments.insert(shipment.shipment_id().clone(), shipment.clone());
        Ok(())
    }

    async fn find_by_id(&self, shipment_id: &ShipmentId) -> Result<Option<Shipment>> {
        Ok(self.shipments.read().await.get(shipment_id).cloned())
    }

    async fn update(&self, shipment: &Shipment) -> Result<()> {
        let mut shipments = self.shipments.write().await;
        if let Some(stored) = shipments.get_mut(shipment.shipment_id()) {
            *stored = shipment.clone();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use common::CustomerId;
    use domain::{Dimensions, ShipmentDomainService};

    fn shipment(id: &str) -> Shipment {
        ShipmentDomainService::new()
            .create_shipment(
                ShipmentId::new(id),
                CustomerId::new("67890"),
                10.0,
                Dimensions::new(20.0, 30.0, 40.0).unwrap(),
                "Standard",
                "New York",
                "Los Angeles",
                Utc.with_ymd_and_hms(2025, 2, 9, 10, 0, 0).unwrap(),
            )
            .unwrap()
    }

    #[tokio::test]
    async fn save_and_find_roundtrip() {
        let repo = InMemoryShipmentRepository::new();
        let stored = shipment("12345");

        repo.save(&stored).await.unwrap();

        let found = repo.find_by_id(&ShipmentId::new("12345")).await.unwrap();
        assert_eq!(found, Some(stored));
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn find_unknown_returns_none() {
        let repo = InMemoryShipmentRepository::new();
        let found = repo.find_by_id(&ShipmentId::new("missing")).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn save_duplicate_fails() {
        let repo = InMemoryShipmentRepository::new();
        repo.save(&shipment("12345")).await.unwrap();

        let result = repo.save(&shipment("12345")).await;
        assert!(matches!(result, Err(StoreError::Duplicate(_))));
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn update_replaces_stored_state() {
        let repo = InMemoryShipmentRepository::new();
        let original = shipment("12345");
        repo.save(&original).await.unwrap();

        let rerouted = original.with_destination("San Francisco").unwrap();
        repo.update(&rerouted).await.unwrap();

        let found = repo
            .find_by_id(&ShipmentId::new("12345"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.destination(), "San Francisco");
    }

    #[tokio::test]
    async fn update_unknown_is_a_noop() {
        let repo = InMemoryShipmentRepository::new();
        repo.update(&shipment("ghost")).await.unwrap();
        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let repo = InMemoryShipmentRepository::new();
        let clone = repo.clone();

        repo.save(&shipment("12345")).await.unwrap();
        assert_eq!(clone.count().await, 1);
    }
}
