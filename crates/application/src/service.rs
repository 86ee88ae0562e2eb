//! Shipment use-case orchestration.

use common::{CustomerId, ShipmentId};
use domain::{Dimensions, ShipmentDomainService};
use messaging::EventPublisher;
use store::ShipmentRepository;

use crate::dto::{CreateShipment, ShipmentDto, UpdateShipmentDestination};
use crate::error::ApplicationError;
use crate::events::{SHIPMENT_EVENTS_TOPIC, ShipmentEvent};

/// Use-case coordinator for shipments.
///
/// Each operation runs its steps strictly in sequence: domain validation,
/// persistence, mapping, event publication. A failure at any step aborts the
/// remaining steps for that request; there is no compensation for steps that
/// already completed.
pub struct ShipmentService<R, P> {
    domain: ShipmentDomainService,
    repository: R,
    publisher: P,
}

impl<R, P> ShipmentService<R, P>
where
    R: ShipmentRepository,
    P: EventPublisher,
{
    /// Creates a service over the given persistence and publication ports.
    pub fn new(repository: R, publisher: P) -> Self {
        Self {
            domain: ShipmentDomainService::new(),
            repository,
            publisher,
        }
    }

    /// Creates a shipment, persists it, and publishes `ShipmentCreated`.
    ///
    /// No persistence or publication happens when validation fails; a
    /// persistence failure suppresses the event.
    #[tracing::instrument(skip(self, req), fields(shipment_id = %req.shipment_id))]
    pub async fn create(&self, req: CreateShipment) -> Result<ShipmentDto, ApplicationError> {
        let dimensions = Dimensions::new(
            req.dimensions.height,
            req.dimensions.width,
            req.dimensions.length,
        )?;

        let shipment = self.domain.create_shipment(
            ShipmentId::new(req.shipment_id),
            CustomerId::new(req.customer_id),
            req.weight,
            dimensions,
            req.shipment_type,
            req.origin,
            req.destination,
            req.deposit_date,
        )?;

        self.repository.save(&shipment).await?;

        let dto = ShipmentDto::from(&shipment);
        self.publisher
            .publish(
                SHIPMENT_EVENTS_TOPIC,
                ShipmentEvent::Created(dto.clone()).into_envelope()?,
            )
            .await?;

        metrics::counter!("shipments_created_total").increment(1);
        tracing::info!(shipment = %shipment, "shipment created");

        Ok(dto)
    }

    /// Looks up a shipment by ID and returns its external representation.
    #[tracing::instrument(skip(self))]
    pub async fn query(&self, shipment_id: &str) -> Result<ShipmentDto, ApplicationError> {
        let shipment = self
            .repository
            .find_by_id(&ShipmentId::new(shipment_id))
            .await?
            .ok_or(ApplicationError::NotFound)?;

        Ok(ShipmentDto::from(&shipment))
    }

    /// Re-routes a shipment and publishes `ShipmentUpdated`.
    #[tracing::instrument(skip(self, req), fields(shipment_id = %req.shipment_id))]
    pub async fn update_destination(
        &self,
        req: UpdateShipmentDestination,
    ) -> Result<ShipmentDto, ApplicationError> {
        let shipment = self
            .repository
            .find_by_id(&ShipmentId::new(req.shipment_id))
            .await?
            .ok_or(ApplicationError::NotFound)?;

        let updated = self
            .domain
            .update_destination(&shipment, req.new_destination)?;

        self.repository.update(&updated).await?;

        let dto = ShipmentDto::from(&updated);
        self.publisher
            .publish(
                SHIPMENT_EVENTS_TOPIC,
                ShipmentEvent::Updated(dto.clone()).into_envelope()?,
            )
            .await?;

        metrics::counter!("shipments_updated_total").increment(1);
        tracing::info!(shipment = %updated, "shipment destination updated");

        Ok(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use domain::DomainError;
    use messaging::InMemoryEventPublisher;
    use store::{InMemoryShipmentRepository, StoreError};

    use crate::dto::DimensionsDto;

    fn service() -> (
        ShipmentService<InMemoryShipmentRepository, InMemoryEventPublisher>,
        InMemoryShipmentRepository,
        InMemoryEventPublisher,
    ) {
        let repository = InMemoryShipmentRepository::new();
        let publisher = InMemoryEventPublisher::new();
        let service = ShipmentService::new(repository.clone(), publisher.clone());
        (service, repository, publisher)
    }

    fn create_request() -> CreateShipment {
        CreateShipment {
            shipment_id: "12345".to_string(),
            customer_id: "67890".to_string(),
            weight: 10.0,
            dimensions: DimensionsDto {
                height: 20.0,
                width: 30.0,
                length: 40.0,
            },
            shipment_type: "Standard".to_string(),
            origin: "New York".to_string(),
            destination: "Los Angeles".to_string(),
            deposit_date: Utc.with_ymd_and_hms(2025, 2, 9, 10, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_persists_once_and_publishes_matching_payload() {
        let (service, repository, publisher) = service();

        let dto = service.create(create_request()).await.unwrap();

        assert_eq!(dto.shipment_id, "12345");
        assert_eq!(dto.destination, "Los Angeles");
        assert_eq!(repository.count().await, 1);

        let published = publisher.published();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].topic, SHIPMENT_EVENTS_TOPIC);
        assert_eq!(published[0].envelope.event, "ShipmentCreated");
        assert_eq!(
            published[0].envelope.payload,
            serde_json::to_value(&dto).unwrap()
        );
    }

    #[tokio::test]
    async fn create_with_negative_weight_touches_nothing() {
        let (service, repository, publisher) = service();

        let mut req = create_request();
        req.weight = -5.0;

        let result = service.create(req).await;

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::InvalidWeight { .. }))
        ));
        assert_eq!(repository.count().await, 0);
        assert_eq!(publisher.published_count(), 0);
    }

    #[tokio::test]
    async fn create_with_invalid_dimensions_touches_nothing() {
        let (service, repository, publisher) = service();

        let mut req = create_request();
        req.dimensions.height = 0.0;

        let result = service.create(req).await;

        assert!(matches!(result, Err(ApplicationError::Validation(_))));
        assert_eq!(repository.count().await, 0);
        assert_eq!(publisher.published_count(), 0);
    }

    #[tokio::test]
    async fn create_duplicate_fails_and_publishes_nothing_new() {
        let (service, _repository, publisher) = service();

        service.create(create_request()).await.unwrap();
        let result = service.create(create_request()).await;

        assert!(matches!(
            result,
            Err(ApplicationError::Store(StoreError::Duplicate(_)))
        ));
        assert_eq!(publisher.published_count(), 1);
    }

    #[tokio::test]
    async fn publish_failure_propagates_after_persistence() {
        let (service, repository, publisher) = service();
        publisher.set_fail_on_publish(true);

        let result = service.create(create_request()).await;

        assert!(matches!(result, Err(ApplicationError::Publish(_))));
        // Persistence completed before publication was attempted; there is
        // no rollback.
        assert_eq!(repository.count().await, 1);
    }

    #[tokio::test]
    async fn query_returns_the_stored_representation() {
        let (service, _repository, _publisher) = service();
        let created = service.create(create_request()).await.unwrap();

        let queried = service.query("12345").await.unwrap();
        assert_eq!(queried, created);
    }

    #[tokio::test]
    async fn query_unknown_fails_with_not_found() {
        let (service, _repository, _publisher) = service();

        let result = service.query("missing").await;

        let err = result.unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound));
        assert_eq!(err.to_string(), "Shipment not found.");
    }

    #[tokio::test]
    async fn update_changes_only_the_destination_and_publishes() {
        let (service, _repository, publisher) = service();
        let created = service.create(create_request()).await.unwrap();

        let updated = service
            .update_destination(UpdateShipmentDestination {
                shipment_id: "12345".to_string(),
                new_destination: "San Francisco".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.destination, "San Francisco");
        assert_eq!(
            ShipmentDto {
                destination: created.destination.clone(),
                ..updated.clone()
            },
            created
        );

        let published = publisher.published();
        assert_eq!(published.len(), 2);
        assert_eq!(published[1].envelope.event, "ShipmentUpdated");
        assert_eq!(
            published[1].envelope.payload,
            serde_json::to_value(&updated).unwrap()
        );

        // Subsequent queries observe the new destination.
        let queried = service.query("12345").await.unwrap();
        assert_eq!(queried.destination, "San Francisco");
    }

    #[tokio::test]
    async fn update_unknown_fails_with_not_found() {
        let (service, _repository, publisher) = service();

        let result = service
            .update_destination(UpdateShipmentDestination {
                shipment_id: "missing".to_string(),
                new_destination: "San Francisco".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::NotFound)));
        assert_eq!(publisher.published_count(), 0);
    }

    #[tokio::test]
    async fn update_with_empty_destination_fails_and_keeps_state() {
        let (service, _repository, publisher) = service();
        service.create(create_request()).await.unwrap();

        let result = service
            .update_destination(UpdateShipmentDestination {
                shipment_id: "12345".to_string(),
                new_destination: String::new(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::Domain(_))));
        assert_eq!(publisher.published_count(), 1);

        let queried = service.query("12345").await.unwrap();
        assert_eq!(queried.destination, "Los Angeles");
    }
}
