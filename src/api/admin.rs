//! Administration endpoints

use axum::{
    extract::{Path, State},
    response::Redirect,
    Form, Json,
};
use axum_extra::extract::{multipart::Field, Multipart};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{
        equipment::{Equipment, EquipmentForm},
        lab_info::{LabInfo, LabInfoForm},
        reservation::Reservation,
    },
    services::uploads::UploadedImage,
};

use super::AdminSession;

/// Admin page data
#[derive(Serialize, ToSchema)]
pub struct AdminDashboard {
    pub equipment: Vec<Equipment>,
    pub reservations: Vec<Reservation>,
}

/// List equipment and reservations
#[utoipa::path(
    get,
    path = "/admin",
    tag = "admin",
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Equipment and reservations", body = AdminDashboard),
        (status = 303, description = "Not logged in, redirect to /login")
    )
)]
pub async fn dashboard(
    State(state): State<crate::AppState>,
    AdminSession(_session): AdminSession,
) -> AppResult<Json<AdminDashboard>> {
    let equipment = state.services.equipment.list().await?;
    let reservations = state.services.reservations.list().await?;
    Ok(Json(AdminDashboard {
        equipment,
        reservations,
    }))
}

async fn field_text(field: Field) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Unreadable form field: {}", e)))
}

/// Register equipment, with an optional image
#[utoipa::path(
    post,
    path = "/admin",
    tag = "admin",
    security(("session_cookie" = [])),
    request_body(content = crate::models::equipment::EquipmentUpload, content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "Equipment created, redirect to /admin"),
        (status = 400, description = "Invalid quantity or missing name", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    AdminSession(_session): AdminSession,
    mut multipart: Multipart,
) -> AppResult<Redirect> {
    let mut form = EquipmentForm::default();
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Unreadable image: {}", e)))?;
                image = Some(UploadedImage { file_name, bytes });
            }
            "name" => form.name = Some(field_text(field).await?),
            "brand" => form.brand = Some(field_text(field).await?),
            "model" => form.model = Some(field_text(field).await?),
            "purpose" => form.purpose = Some(field_text(field).await?),
            "quantity" => form.quantity = Some(field_text(field).await?),
            other => tracing::debug!(field = %other, "Ignoring unknown form field"),
        }
    }

    state.services.equipment.create(form, image).await?;
    Ok(Redirect::to("/admin"))
}

/// Show the lab info edit form
#[utoipa::path(
    get,
    path = "/admin/edit_info",
    tag = "admin",
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Current lab info", body = LabInfo),
        (status = 303, description = "Not logged in, redirect to /login")
    )
)]
pub async fn edit_info_form(
    State(state): State<crate::AppState>,
    AdminSession(_session): AdminSession,
) -> AppResult<Json<LabInfo>> {
    let info = state.services.lab_info.get().await?;
    Ok(Json(info))
}

/// Overwrite the lab info
#[utoipa::path(
    post,
    path = "/admin/edit_info",
    tag = "admin",
    security(("session_cookie" = [])),
    request_body(content = LabInfoForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Lab info saved, redirect to the landing page"),
        (status = 400, description = "Invalid coordinator email", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_info(
    State(state): State<crate::AppState>,
    AdminSession(_session): AdminSession,
    Form(form): Form<LabInfoForm>,
) -> AppResult<Redirect> {
    state.services.lab_info.update(form).await?;
    Ok(Redirect::to("/"))
}

/// Delete equipment with its reservations and image
#[utoipa::path(
    post,
    path = "/delete/{id}",
    tag = "admin",
    security(("session_cookie" = [])),
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 303, description = "Equipment deleted, redirect to /admin"),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    AdminSession(_session): AdminSession,
    Path(id): Path<i32>,
) -> AppResult<Redirect> {
    state.services.equipment.delete(id).await?;
    Ok(Redirect::to("/admin"))
}

/// Delete a reservation
#[utoipa::path(
    post,
    path = "/delete_reservation/{id}",
    tag = "admin",
    security(("session_cookie" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 303, description = "Reservation deleted, redirect to /admin"),
        (status = 404, description = "Reservation not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_reservation(
    State(state): State<crate::AppState>,
    AdminSession(_session): AdminSession,
    Path(id): Path<i32>,
) -> AppResult<Redirect> {
    state.services.reservations.delete(id).await?;
    Ok(Redirect::to("/admin"))
}
