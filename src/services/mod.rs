//! Business logic services

pub mod auth;
pub mod equipment;
pub mod lab_info;
pub mod reservations;
pub mod uploads;

use crate::{config::AppConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub auth: auth::AuthService,
    pub equipment: equipment::EquipmentService,
    pub reservations: reservations::ReservationsService,
    pub lab_info: lab_info::LabInfoService,
    pub uploads: uploads::UploadStore,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, config: &AppConfig) -> AppResult<Self> {
        let uploads = uploads::UploadStore::new(config.uploads.dir.clone());

        Ok(Self {
            auth: auth::AuthService::new(&config.auth)?,
            equipment: equipment::EquipmentService::new(repository.clone(), uploads.clone()),
            reservations: reservations::ReservationsService::new(repository.clone()),
            lab_info: lab_info::LabInfoService::new(repository.clone()),
            uploads,
            repository,
        })
    }
}
