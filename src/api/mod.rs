//! HTTP handlers for the lab inventory

pub mod admin;
pub mod auth;
pub mod health;
pub mod openapi;
pub mod public;
pub mod reservations;

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{DefaultBodyLimit, FromRequestParts},
    http::request::Parts,
    response::Redirect,
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::CookieJar;
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    models::session::{SessionClaims, SESSION_COOKIE},
    AppState,
};

/// Where anonymous visitors of admin pages are sent
pub const LOGIN_PATH: &str = "/login";

/// Authentication state of the current request
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    pub session: Option<SessionClaims>,
}

impl AuthContext {
    pub fn is_admin(&self) -> bool {
        self.session.is_some()
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let session = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| state.services.auth.session(cookie.value()));

        Ok(AuthContext { session })
    }
}

/// Guard for admin-only routes.
///
/// Anonymous requests are redirected to the login page instead of being
/// answered with an error status. Place it before any body extractor so a
/// rejected request never reaches the store.
pub struct AdminSession(pub SessionClaims);

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let context = match AuthContext::from_request_parts(parts, state).await {
            Ok(context) => context,
            Err(never) => match never {},
        };

        context.session.map(AdminSession).ok_or_else(|| {
            tracing::debug!(path = %parts.uri.path(), "Anonymous access to admin route");
            Redirect::to(LOGIN_PATH)
        })
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let uploads = ServeDir::new(state.services.uploads.dir());
    let max_body_bytes = state.config.uploads.max_body_bytes;

    let pages = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Public pages
        .route("/", get(public::home))
        .route("/inventory", get(public::inventory))
        .route(
            "/reserve/:id",
            get(reservations::reserve_form).post(reservations::create_reservation),
        )
        // Authentication
        .route(LOGIN_PATH, get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        // Administration
        .route("/admin", get(admin::dashboard).post(admin::create_equipment))
        .route("/admin/edit_info", get(admin::edit_info_form).post(admin::update_info))
        .route("/delete/:id", post(admin::delete_equipment))
        .route("/delete_reservation/:id", post(admin::delete_reservation))
        .nest_service("/static/uploads", uploads)
        .with_state(state);

    Router::new()
        .merge(pages)
        .merge(openapi::create_openapi_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
}
