use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::{CustomerId, ShipmentId};
use domain::{Dimensions, DomainError, Shipment};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use crate::{
    Result, StoreError,
    repository::ShipmentRepository,
};

/// PostgreSQL-backed shipment repository.
///
/// Dimensions are flattened into three columns (`height`, `width`, `length`)
/// and reassembled into the value object on load.
#[derive(Clone)]
pub struct PostgresShipmentRepository {
    pool: PgPool,
}

impl PostgresShipmentRepository {
    /// Creates a repository over an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the database and returns a repository over a fresh pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    fn row_to_shipment(row: &PgRow) -> Result<Shipment> {
        let dimensions = Dimensions::new(
            row.try_get("height")?,
            row.try_get("width")?,
            row.try_get("length")?,
        )
        .map_err(DomainError::from)?;

        let deposit_date: DateTime<Utc> = row.try_get("deposit_date")?;

        let shipment = Shipment::new(
            ShipmentId::new(row.try_get::<String, _>("shipment_id")?),
            CustomerId::new(row.try_get::<String, _>("customer_id")?),
            row.try_get("weight")?,
            dimensions,
            row.try_get::<String, _>("shipment_type")?,
            row.try_get::<String, _>("origin")?,
            row.try_get::<String, _>("destination")?,
            deposit_date,
        )?;

        Ok(shipment)
    }
}

#[async_trait]
impl ShipmentRepository for PostgresShipmentRepository {
    async fn save(&self, shipment: &Shipment) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO shipments
                (shipment_id, customer_id, weight, shipment_type, origin, destination, deposit_date, height, width, length)
            VALUES
                ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(shipment.shipment_id().as_str())
        .bind(shipment.customer_id().as_str())
        .bind(shipment.weight())
        .bind(shipment.shipment_type())
        .bind(shipment.origin())
        .bind(shipment.destination())
        .bind(shipment.deposit_date())
        .bind(shipment.dimensions().height())
        .bind(shipment.dimensions().width())
        .bind(shipment.dimensions().length())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return StoreError::Duplicate(shipment.shipment_id().clone());
            }
            StoreError::Database(e)
        })?;

        Ok(())
    }

    async fn find_by_id(&self, shipment_id: &ShipmentId) -> Result<Option<Shipment>> {
        let row = sqlx::query(
            r#"
            SELECT shipment_id, customer_id, weight, shipment_type, origin, destination, deposit_date, height, width, length
            FROM shipments
            WHERE shipment_id = $1
            "#,
        )
        .bind(shipment_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_shipment).transpose()
    }

    async fn update(&self, shipment: &Shipment) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE shipments
            SET customer_id = $1, weight = $2, shipment_type = $3, origin = $4, destination = $5,
                deposit_date = $6, height = $7, width = $8, length = $9
            WHERE shipment_id = $10
            "#,
        )
        .bind(shipment.customer_id().as_str())
        .bind(shipment.weight())
        .bind(shipment.shipment_type())
        .bind(shipment.origin())
        .bind(shipment.destination())
        .bind(shipment.deposit_date())
        .bind(shipment.dimensions().height())
        .bind(shipment.dimensions().width())
        .bind(shipment.dimensions().length())
        .bind(shipment.shipment_id().as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
