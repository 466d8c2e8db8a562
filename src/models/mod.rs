//! Data models for the lab inventory

pub mod equipment;
pub mod lab_info;
pub mod reservation;
pub mod session;

// Re-export commonly used types
pub use equipment::{Equipment, EquipmentForm, NewEquipment};
pub use lab_info::{LabInfo, LabInfoForm};
pub use reservation::{NewReservation, Reservation, ReservationForm};
pub use session::SessionClaims;

use validator::ValidateEmail;

use crate::error::InputError;

/// Trim a submitted value, mapping blank input to `None`
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reject values wider than their column (`VARCHAR(max)` counts characters)
pub(crate) fn check_length(
    value: String,
    field: &'static str,
    max: usize,
) -> Result<String, InputError> {
    if value.chars().count() > max {
        Err(InputError::TooLong(field, max))
    } else {
        Ok(value)
    }
}

/// Trim an optional value; blank becomes `None`, overlong is rejected
pub(crate) fn optional(
    value: Option<String>,
    field: &'static str,
    max: usize,
) -> Result<Option<String>, InputError> {
    non_blank(value).map(|v| check_length(v, field, max)).transpose()
}

/// Trim a submitted value, rejecting blank or overlong input
pub(crate) fn required(
    value: Option<String>,
    field: &'static str,
    max: usize,
) -> Result<String, InputError> {
    check_length(non_blank(value).ok_or(InputError::MissingField(field))?, field, max)
}

pub(crate) fn check_email(email: String) -> Result<String, InputError> {
    if email.validate_email() {
        Ok(email)
    } else {
        Err(InputError::InvalidEmail(email))
    }
}
