//! Lab info service

use crate::{
    error::AppResult,
    models::lab_info::{LabInfo, LabInfoForm},
    repository::Repository,
};

#[derive(Clone)]
pub struct LabInfoService {
    repository: Repository,
}

impl LabInfoService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Current lab info; an empty record is created on first access
    pub async fn get(&self) -> AppResult<LabInfo> {
        self.repository.lab_info.get_or_create().await
    }

    pub async fn update(&self, form: LabInfoForm) -> AppResult<LabInfo> {
        let info = form.validate()?;
        let info = self.repository.lab_info.upsert(&info).await?;
        tracing::info!("Lab info updated");
        Ok(info)
    }
}
