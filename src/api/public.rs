//! Public pages: landing page and equipment catalog

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{equipment::Equipment, lab_info::LabInfo},
};

use super::AuthContext;

/// Landing page data
#[derive(Serialize, ToSchema)]
pub struct HomeView {
    pub lab_info: LabInfo,
    /// Whether the visitor holds an admin session (shows admin links)
    pub is_admin: bool,
}

/// Lab identity for the landing page
#[utoipa::path(
    get,
    path = "/",
    tag = "public",
    responses(
        (status = 200, description = "Lab identity", body = HomeView)
    )
)]
pub async fn home(State(state): State<crate::AppState>, auth: AuthContext) -> AppResult<Json<HomeView>> {
    let lab_info = state.services.lab_info.get().await?;
    Ok(Json(HomeView {
        lab_info,
        is_admin: auth.is_admin(),
    }))
}

/// List all equipment
#[utoipa::path(
    get,
    path = "/inventory",
    tag = "public",
    responses(
        (status = 200, description = "Equipment catalog", body = Vec<Equipment>)
    )
)]
pub async fn inventory(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Equipment>>> {
    let equipment = state.services.equipment.list().await?;
    Ok(Json(equipment))
}
