//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    api::{admin, auth, health, public, reservations},
    models::session::SESSION_COOKIE,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lab Inventory",
        version = "0.1.0",
        description = "Laboratory equipment catalog and reservation requests",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Public
        public::home,
        public::inventory,
        // Reservations
        reservations::reserve_form,
        reservations::create_reservation,
        // Auth
        auth::login_form,
        auth::login,
        auth::logout,
        // Admin
        admin::dashboard,
        admin::create_equipment,
        admin::edit_info_form,
        admin::update_info,
        admin::delete_equipment,
        admin::delete_reservation,
    ),
    components(
        schemas(
            crate::models::equipment::Equipment,
            crate::models::equipment::EquipmentUpload,
            crate::models::reservation::Reservation,
            crate::models::reservation::ReservationForm,
            crate::models::lab_info::LabInfo,
            crate::models::lab_info::LabInfoForm,
            public::HomeView,
            reservations::ReserveView,
            auth::LoginForm,
            auth::LoginView,
            admin::AdminDashboard,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&SessionCookieScheme),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "public", description = "Landing page and equipment catalog"),
        (name = "reservations", description = "Reservation requests"),
        (name = "auth", description = "Administrator login"),
        (name = "admin", description = "Inventory administration")
    )
)]
pub struct ApiDoc;

struct SessionCookieScheme;

impl Modify for SessionCookieScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
