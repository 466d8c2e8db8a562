//! Laboratory identity shown on the landing page

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{check_email, optional};
use crate::error::InputError;

/// Key of the single `lab_info` row
pub const LAB_INFO_ID: i16 = 1;

/// Laboratory identity and coordinator contact
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LabInfo {
    #[serde(skip)]
    pub id: i16,
    pub lab_name: Option<String>,
    /// Institution / department the lab belongs to
    pub affiliation: Option<String>,
    pub coordinator_name: Option<String>,
    pub coordinator_email: Option<String>,
    pub coordinator_lattes: Option<String>,
    /// Building and room
    pub location: Option<String>,
    pub address: Option<String>,
}

/// Lab info edit form; every field is overwritten on submit
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LabInfoForm {
    #[serde(default)]
    pub lab_name: Option<String>,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub coordinator_name: Option<String>,
    #[serde(default)]
    pub coordinator_email: Option<String>,
    #[serde(default)]
    pub coordinator_lattes: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl LabInfoForm {
    pub fn validate(self) -> Result<LabInfo, InputError> {
        Ok(LabInfo {
            id: LAB_INFO_ID,
            lab_name: optional(self.lab_name, "lab_name", 200)?,
            affiliation: optional(self.affiliation, "affiliation", 200)?,
            coordinator_name: optional(self.coordinator_name, "coordinator_name", 100)?,
            coordinator_email: optional(self.coordinator_email, "coordinator_email", 120)?
                .map(check_email)
                .transpose()?,
            coordinator_lattes: optional(self.coordinator_lattes, "coordinator_lattes", 200)?,
            location: optional(self.location, "location", 200)?,
            address: optional(self.address, "address", 300)?,
        })
    }
}
