//! Reservation model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{check_email, non_blank, optional, required};
use crate::error::InputError;

/// Reservation request for one piece of equipment on one day
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reservation {
    pub id: i32,
    pub equipment_id: i32,
    pub user_name: String,
    pub user_email: String,
    pub user_phone: Option<String>,
    pub institution: String,
    /// Requester's role at the institution (student, researcher, ...)
    pub role: String,
    /// Link to the requester's Lattes CV
    pub lattes_link: Option<String>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Reservation form, as submitted
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ReservationForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub lattes_link: Option<String>,
    /// YYYY-MM-DD
    #[serde(default)]
    pub date: Option<String>,
}

/// Validated reservation, ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub user_name: String,
    pub user_email: String,
    pub user_phone: Option<String>,
    pub institution: String,
    pub role: String,
    pub lattes_link: Option<String>,
    pub date: NaiveDate,
}

impl ReservationForm {
    pub fn validate(self) -> Result<NewReservation, InputError> {
        let user_name = required(self.name, "name", 100)?;
        let institution = required(self.institution, "institution", 100)?;
        let role = required(self.role, "role", 100)?;
        let date = parse_date(non_blank(self.date).ok_or(InputError::MissingField("date"))?)?;
        let user_email = check_email(required(self.email, "email", 120)?)?;

        Ok(NewReservation {
            user_name,
            user_email,
            user_phone: optional(self.phone, "phone", 30)?,
            institution,
            role,
            lattes_link: optional(self.lattes_link, "lattes_link", 200)?,
            date,
        })
    }
}

/// Strict `YYYY-MM-DD`: chrono alone also accepts `2025-5-2` and `+2025-05-02`
fn parse_date(raw: String) -> Result<NaiveDate, InputError> {
    let bytes = raw.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(InputError::InvalidDate(raw));
    }
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| InputError::InvalidDate(raw))
}
