//! Equipment repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::equipment::{Equipment, NewEquipment},
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all equipment
    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>("SELECT * FROM equipment ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Create equipment
    pub async fn create(&self, data: &NewEquipment, image: Option<&str>) -> AppResult<Equipment> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment (name, brand, model, purpose, quantity, image)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.brand)
        .bind(&data.model)
        .bind(&data.purpose)
        .bind(data.quantity)
        .bind(image)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row)
    }

    /// Delete equipment together with every reservation referencing it.
    ///
    /// Both deletes run in one transaction; the removed row is returned so the
    /// caller can clean up its image.
    pub async fn delete_cascade(&self, id: i32) -> AppResult<(Equipment, u64)> {
        let mut tx = self.pool.begin().await?;

        let reservations = sqlx::query("DELETE FROM reservation WHERE equipment_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        // Dropping `tx` without commit rolls the reservation delete back
        let equipment = sqlx::query_as::<_, Equipment>("DELETE FROM equipment WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))?;

        tx.commit().await?;
        Ok((equipment, reservations))
    }
}
