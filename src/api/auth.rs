//! Login and logout

use axum::{extract::State, response::Redirect, Form, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, models::session::SESSION_COOKIE};

use super::AuthContext;

/// Login form
#[derive(Deserialize, ToSchema)]
pub struct LoginForm {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
}

/// Login page data
#[derive(Serialize, ToSchema)]
pub struct LoginView {
    /// Whether the visitor already holds an admin session
    pub authenticated: bool,
}

fn session_cookie(value: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Show the login form
#[utoipa::path(
    get,
    path = "/login",
    tag = "auth",
    responses(
        (status = 200, description = "Login page", body = LoginView)
    )
)]
pub async fn login_form(auth: AuthContext) -> Json<LoginView> {
    Json(LoginView {
        authenticated: auth.is_admin(),
    })
}

/// Check the admin credentials and open a session
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Logged in, redirect to the admin page"),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> AppResult<(CookieJar, Redirect)> {
    let token = state.services.auth.login(&form.user, &form.password)?;
    Ok((jar.add(session_cookie(token)), Redirect::to("/admin")))
}

/// Close the admin session
#[utoipa::path(
    get,
    path = "/logout",
    tag = "auth",
    responses(
        (status = 303, description = "Session cleared, redirect to the landing page")
    )
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    (jar.remove(session_cookie(String::new())), Redirect::to("/"))
}
