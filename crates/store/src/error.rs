use common::ShipmentId;
use domain::DomainError;
use thiserror::Error;

/// Errors that can occur while persisting or loading shipments.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A shipment with the same ID has already been saved.
    #[error("shipment {0} already exists")]
    Duplicate(ShipmentId),

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored row no longer satisfies the aggregate invariants.
    #[error("corrupt shipment record: {0}")]
    CorruptRecord(#[from] DomainError),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StoreError>;
