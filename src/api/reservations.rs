//! Reservation request endpoints

use axum::{
    extract::{Path, State},
    response::Redirect,
    Form, Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{equipment::Equipment, reservation::ReservationForm},
};

/// Reservation form data
#[derive(Serialize, ToSchema)]
pub struct ReserveView {
    pub equipment: Equipment,
    /// Whether the form will be accepted (stock above zero)
    pub available: bool,
}

/// Show the reservation form for one piece of equipment
#[utoipa::path(
    get,
    path = "/reserve/{id}",
    tag = "reservations",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment to reserve", body = ReserveView),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn reserve_form(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ReserveView>> {
    let equipment = state.services.equipment.get_by_id(id).await?;
    Ok(Json(ReserveView {
        available: equipment.is_available(),
        equipment,
    }))
}

/// Submit a reservation request
#[utoipa::path(
    post,
    path = "/reserve/{id}",
    tag = "reservations",
    params(("id" = i32, Path, description = "Equipment ID")),
    request_body(content = ReservationForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Reservation recorded, redirect to the inventory"),
        (status = 400, description = "Equipment unavailable or invalid form", body = crate::error::ErrorResponse),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_reservation(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ReservationForm>,
) -> AppResult<Redirect> {
    state.services.reservations.create(id, form).await?;
    Ok(Redirect::to("/inventory"))
}
