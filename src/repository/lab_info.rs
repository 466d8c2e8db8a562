//! Lab info repository (single row)

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::lab_info::{LabInfo, LAB_INFO_ID},
};

#[derive(Clone)]
pub struct LabInfoRepository {
    pool: Pool<Postgres>,
}

impl LabInfoRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get the lab info row, inserting an empty one if none exists yet
    pub async fn get_or_create(&self) -> AppResult<LabInfo> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO lab_info (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
            .bind(LAB_INFO_ID)
            .execute(&mut *tx)
            .await?;

        let row = sqlx::query_as::<_, LabInfo>("SELECT * FROM lab_info WHERE id = $1")
            .bind(LAB_INFO_ID)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row)
    }

    /// Overwrite every field of the lab info row
    pub async fn upsert(&self, data: &LabInfo) -> AppResult<LabInfo> {
        let row = sqlx::query_as::<_, LabInfo>(
            r#"
            INSERT INTO lab_info (
                id, lab_name, affiliation, coordinator_name, coordinator_email,
                coordinator_lattes, location, address
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                lab_name = EXCLUDED.lab_name,
                affiliation = EXCLUDED.affiliation,
                coordinator_name = EXCLUDED.coordinator_name,
                coordinator_email = EXCLUDED.coordinator_email,
                coordinator_lattes = EXCLUDED.coordinator_lattes,
                location = EXCLUDED.location,
                address = EXCLUDED.address
            RETURNING *
            "#,
        )
        .bind(LAB_INFO_ID)
        .bind(&data.lab_name)
        .bind(&data.affiliation)
        .bind(&data.coordinator_name)
        .bind(&data.coordinator_email)
        .bind(&data.coordinator_lattes)
        .bind(&data.location)
        .bind(&data.address)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
