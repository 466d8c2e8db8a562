//! Administrator authentication and sessions

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::session::SessionClaims,
};

#[derive(Clone)]
pub struct AuthService {
    admin_username: String,
    /// Argon2 PHC string of the admin password
    admin_password_hash: String,
    session_secret: String,
    session_expiration_hours: u64,
}

impl AuthService {
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        let admin_password_hash = match (&config.admin_password_hash, &config.admin_password) {
            (Some(hash), _) => {
                PasswordHash::new(hash)
                    .map_err(|e| AppError::Internal(format!("Invalid admin password hash: {}", e)))?;
                hash.clone()
            }
            (None, Some(password)) => {
                tracing::warn!(
                    "Admin password is configured in plain text; set auth.admin_password_hash instead"
                );
                hash_password(password)?
            }
            (None, None) => {
                return Err(AppError::Internal(
                    "No admin credential configured (auth.admin_password_hash)".to_string(),
                ))
            }
        };

        Ok(Self {
            admin_username: config.admin_username.clone(),
            admin_password_hash,
            session_secret: config.session_secret.clone(),
            session_expiration_hours: config.session_expiration_hours,
        })
    }

    /// Check submitted credentials and open an admin session.
    /// Returns the signed session token.
    pub fn login(&self, username: &str, password: &str) -> AppResult<String> {
        // Verify the password even for an unknown user so timing does not
        // reveal which half was wrong
        let password_ok = self.verify_password(password)?;
        let username_ok = username == self.admin_username;
        if !(username_ok & password_ok) {
            tracing::warn!(username = %username, "Failed admin login");
            return Err(AppError::Authentication("Invalid username or password".to_string()));
        }

        let claims = SessionClaims::admin(&self.admin_username, self.session_expiration_hours);
        let token = claims
            .create_token(&self.session_secret)
            .map_err(|e| AppError::Internal(format!("Failed to sign session: {}", e)))?;

        tracing::info!(username = %username, "Admin logged in");
        Ok(token)
    }

    /// Decode a session token; `None` when it is missing a valid signature,
    /// expired, or not an admin session
    pub fn session(&self, token: &str) -> Option<SessionClaims> {
        SessionClaims::from_token(token, &self.session_secret)
            .ok()
            .filter(|claims| claims.require_admin().is_ok())
    }

    /// Verify the admin password
    fn verify_password(&self, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(&self.admin_password_hash)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(password: Option<&str>, hash: Option<String>) -> AuthConfig {
        AuthConfig {
            session_secret: "test-secret".to_string(),
            admin_password: password.map(str::to_string),
            admin_password_hash: hash,
            ..Default::default()
        }
    }

    #[test]
    fn test_login_with_configured_credentials() {
        let auth = AuthService::new(&config(Some("admin123"), None)).unwrap();

        let token = auth.login("admin", "admin123").unwrap();
        let session = auth.session(&token).unwrap();
        assert!(session.admin);
        assert_eq!(session.sub, "admin");
    }

    #[test]
    fn test_login_rejects_wrong_credentials() {
        let auth = AuthService::new(&config(Some("admin123"), None)).unwrap();

        assert!(matches!(
            auth.login("admin", "wrong"),
            Err(AppError::Authentication(_))
        ));
        assert!(matches!(
            auth.login("root", "admin123"),
            Err(AppError::Authentication(_))
        ));
    }

    #[test]
    fn test_password_checked_even_for_unknown_user() {
        let mut auth = AuthService::new(&config(Some("admin123"), None)).unwrap();
        auth.admin_password_hash = "not-a-phc-string".to_string();

        // Only reachable through verify_password
        assert!(matches!(
            auth.login("root", "admin123"),
            Err(AppError::Internal(_))
        ));
    }

    #[test]
    fn test_prehashed_password() {
        let hash = hash_password("s3cret").unwrap();
        assert!(hash.starts_with("$argon2"));

        let auth = AuthService::new(&config(None, Some(hash))).unwrap();
        assert!(auth.login("admin", "s3cret").is_ok());
    }

    #[test]
    fn test_missing_or_malformed_credential_is_rejected() {
        assert!(AuthService::new(&config(None, None)).is_err());
        assert!(AuthService::new(&config(None, Some("plain".to_string()))).is_err());
    }

    #[test]
    fn test_garbage_session_token() {
        let auth = AuthService::new(&config(Some("admin123"), None)).unwrap();
        assert!(auth.session("not-a-token").is_none());
    }
}
