//! Equipment service

use crate::{
    error::AppResult,
    models::equipment::{Equipment, EquipmentForm},
    repository::Repository,
    services::uploads::{UploadStore, UploadedImage},
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
    uploads: UploadStore,
}

impl EquipmentService {
    pub fn new(repository: Repository, uploads: UploadStore) -> Self {
        Self { repository, uploads }
    }

    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        self.repository.equipment.get_by_id(id).await
    }

    /// Register equipment, storing its image first when one was uploaded.
    ///
    /// The file write is not part of the database transaction: if the insert
    /// fails the stored file is left behind.
    pub async fn create(&self, form: EquipmentForm, image: Option<UploadedImage>) -> AppResult<Equipment> {
        let data = form.validate()?;

        let image_name = match image {
            Some(image) => self.uploads.save(&image).await?,
            None => None,
        };

        let equipment = self
            .repository
            .equipment
            .create(&data, image_name.as_deref())
            .await?;

        tracing::info!(
            equipment_id = equipment.id,
            name = %equipment.name,
            image = ?equipment.image,
            "Equipment created"
        );
        Ok(equipment)
    }

    /// Delete equipment, its reservations, then (best effort) its image
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let (equipment, reservations) = self.repository.equipment.delete_cascade(id).await?;

        if let Some(image) = equipment.image.as_deref() {
            self.uploads.remove(image).await;
        }

        tracing::info!(
            equipment_id = id,
            reservations_deleted = reservations,
            "Equipment deleted"
        );
        Ok(())
    }
}
