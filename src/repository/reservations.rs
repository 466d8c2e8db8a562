//! Reservations repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::reservation::{NewReservation, Reservation},
};

#[derive(Clone)]
pub struct ReservationsRepository {
    pool: Pool<Postgres>,
}

impl ReservationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all reservations, oldest requested date first
    pub async fn list(&self) -> AppResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, Reservation>("SELECT * FROM reservation ORDER BY date, id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Create a reservation
    pub async fn create(&self, equipment_id: i32, data: &NewReservation) -> AppResult<Reservation> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservation (
                equipment_id, user_name, user_email, user_phone,
                institution, role, lattes_link, date
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(equipment_id)
        .bind(&data.user_name)
        .bind(&data.user_email)
        .bind(&data.user_phone)
        .bind(&data.institution)
        .bind(&data.role)
        .bind(&data.lattes_link)
        .bind(data.date)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row)
    }

    /// Delete a reservation
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM reservation WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Reservation {} not found", id)));
        }

        tx.commit().await?;
        Ok(())
    }
}
