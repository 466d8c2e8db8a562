//! Admin session carried in the session cookie

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Name of the cookie holding the signed session token
pub const SESSION_COOKIE: &str = "lab_session";

/// JWT claims of an administrator session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub admin: bool,
    pub exp: i64,
    pub iat: i64,
}

impl SessionClaims {
    /// New admin session for `username`, valid for `hours`
    pub fn admin(username: &str, hours: u64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: username.to_string(),
            admin: true,
            exp: now + (hours as i64 * 3600),
            iat: now,
        }
    }

    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.admin {
            Ok(())
        } else {
            Err(AppError::Authentication("Administrator session required".to_string()))
        }
    }
}
