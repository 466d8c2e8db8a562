//! Reservations service

use crate::{
    error::{AppError, AppResult},
    models::reservation::{Reservation, ReservationForm},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReservationsService {
    repository: Repository,
}

impl ReservationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Reservation>> {
        self.repository.reservations.list().await
    }

    /// Record a reservation request.
    ///
    /// Availability is judged on the equipment's stock alone: reservations
    /// already booked for the same date are not counted, and the stock is
    /// not decremented. The check and the insert are not locked together.
    pub async fn create(&self, equipment_id: i32, form: ReservationForm) -> AppResult<Reservation> {
        let equipment = self.repository.equipment.get_by_id(equipment_id).await?;

        if !equipment.is_available() {
            return Err(AppError::Unavailable(format!(
                "Equipment {} is not available for reservation at the moment",
                equipment.name
            )));
        }

        let data = form.validate()?;
        let reservation = self.repository.reservations.create(equipment.id, &data).await?;

        tracing::info!(
            reservation_id = reservation.id,
            equipment_id = equipment.id,
            date = %reservation.date,
            "Reservation created"
        );
        Ok(reservation)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.reservations.delete(id).await?;
        tracing::info!(reservation_id = id, "Reservation deleted");
        Ok(())
    }
}
