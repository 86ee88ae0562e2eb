use async_trait::async_trait;
use common::ShipmentId;
use domain::Shipment;

use crate::Result;

/// Outbound port for shipment persistence.
///
/// The orchestration services depend only on this trait; any storage engine
/// can sit behind it. Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    /// Persists a new shipment.
    ///
    /// Fails with [`StoreError::Duplicate`](crate::StoreError::Duplicate)
    /// when a shipment with the same ID is already stored.
    async fn save(&self, shipment: &Shipment) -> Result<()>;

    /// Looks up a shipment by its identifier.
    ///
    /// Returns `None` when no shipment with that ID exists.
    async fn find_by_id(&self, shipment_id: &ShipmentId) -> Result<Option<Shipment>>;

    /// Replaces the stored state of an existing shipment.
    ///
    /// Updating an unknown ID is a no-op, matching SQL `UPDATE ... WHERE`
    /// semantics; callers are expected to have loaded the shipment first.
    async fn update(&self, shipment: &Shipment) -> Result<()>;
}
