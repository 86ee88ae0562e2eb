//! Shipment CRUD endpoints.

use std::sync::Arc;

use application::{CreateShipment, ShipmentDto, ShipmentService, UpdateShipmentDestination};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use messaging::EventPublisher;
use store::ShipmentRepository;

use crate::address;
use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<R: ShipmentRepository, P: EventPublisher> {
    pub shipments: ShipmentService<R, P>,
}

/// POST /shipments — create a new shipment.
///
/// The destination must match the recognized postal address nomenclature;
/// this is the only boundary check beyond deserialization, everything else
/// is enforced by the domain.
#[tracing::instrument(skip(state, req), fields(shipment_id = %req.shipment_id))]
pub async fn create<R: ShipmentRepository + 'static, P: EventPublisher + 'static>(
    State(state): State<Arc<AppState<R, P>>>,
    Json(req): Json<CreateShipment>,
) -> Result<(StatusCode, Json<ShipmentDto>), ApiError> {
    if !address::is_valid_address(&req.destination) {
        return Err(ApiError::BadRequest(
            "Invalid destination address format. Please use a valid Colombian address format \
             (e.g., \"Cll 123 #34-23\")."
                .to_string(),
        ));
    }

    let dto = state.shipments.create(req).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

/// GET /shipments/:id — fetch a shipment by ID.
#[tracing::instrument(skip(state))]
pub async fn get<R: ShipmentRepository + 'static, P: EventPublisher + 'static>(
    State(state): State<Arc<AppState<R, P>>>,
    Path(id): Path<String>,
) -> Result<Json<ShipmentDto>, ApiError> {
    let dto = state.shipments.query(&id).await?;
    Ok(Json(dto))
}

/// PATCH /shipments — update a shipment's destination.
#[tracing::instrument(skip(state, req), fields(shipment_id = %req.shipment_id))]
pub async fn update<R: ShipmentRepository + 'static, P: EventPublisher + 'static>(
    State(state): State<Arc<AppState<R, P>>>,
    Json(req): Json<UpdateShipmentDestination>,
) -> Result<Json<ShipmentDto>, ApiError> {
    let dto = state.shipments.update_destination(req).await?;
    Ok(Json(dto))
}
