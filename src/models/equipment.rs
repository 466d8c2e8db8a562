//! Equipment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{non_blank, optional, required};
use crate::error::InputError;

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i32,
    /// Equipment name / description
    pub name: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    /// What the equipment is used for
    pub purpose: Option<String>,
    /// Units in stock; `None` on legacy rows counts as zero
    pub quantity: Option<i32>,
    /// Sanitized file name of the uploaded image
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Equipment {
    /// Whether a reservation may be requested. Only the current stock is
    /// considered, never the reservations already booked against it.
    pub fn is_available(&self) -> bool {
        self.quantity.unwrap_or(0) > 0
    }
}

/// Text fields of the equipment registration form, as submitted
#[derive(Debug, Default, Deserialize)]
pub struct EquipmentForm {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub purpose: Option<String>,
    pub quantity: Option<String>,
}

/// Multipart body accepted by the registration endpoint (documentation only)
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct EquipmentUpload {
    pub name: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub purpose: Option<String>,
    /// Non-negative integer, defaults to 0 when blank
    pub quantity: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

/// Validated equipment, ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEquipment {
    pub name: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub purpose: Option<String>,
    pub quantity: i32,
}

impl EquipmentForm {
    pub fn validate(self) -> Result<NewEquipment, InputError> {
        Ok(NewEquipment {
            name: required(self.name, "name", 100)?,
            brand: optional(self.brand, "brand", 100)?,
            model: optional(self.model, "model", 100)?,
            purpose: optional(self.purpose, "purpose", 200)?,
            quantity: parse_quantity(self.quantity)?,
        })
    }
}

/// Missing or blank quantity means zero
fn parse_quantity(raw: Option<String>) -> Result<i32, InputError> {
    let Some(raw) = non_blank(raw) else {
        return Ok(0);
    };
    let value: i64 = raw
        .parse()
        .map_err(|_| InputError::InvalidQuantity(raw.clone()))?;
    if value < 0 {
        return Err(InputError::NegativeQuantity(value));
    }
    i32::try_from(value).map_err(|_| InputError::InvalidQuantity(raw))
}
