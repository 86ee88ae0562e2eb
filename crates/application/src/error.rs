use domain::{DomainError, ValidationError};
use messaging::PublishError;
use store::StoreError;
use thiserror::Error;

/// Errors surfaced by the orchestration services.
///
/// Domain and validation failures pass through untouched so the boundary can
/// map each kind to a response; infrastructure failures propagate unchanged
/// with no retry and no rollback of already-completed steps.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The referenced shipment does not exist.
    #[error("Shipment not found.")]
    NotFound,

    /// A business rule was violated.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A value object could not be constructed from the request.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Persistence failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Event publication failed.
    #[error(transparent)]
    Publish(#[from] PublishError),
}
