use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::dto::common_dto::{ApiResponse, MessageResponse};
use crate::dto::package_dto::{CreatePackageRequest, PackageResponse};
use crate::repositories::{LogisticsRepository, Page};
use crate::utils::errors::{not_found_error, AppResult};

pub struct PackageController {
    repository: Arc<dyn LogisticsRepository>,
}

impl PackageController {
    pub fn new(repository: Arc<dyn LogisticsRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(
        &self,
        request: CreatePackageRequest,
    ) -> AppResult<ApiResponse<PackageResponse>> {
        request.validate()?;

        let package = self
            .repository
            .create_package(request.into_new_package()?)
            .await?;
        info!("📦 Paquete {} registrado en entrega {}", package.id, package.delivery_id);

        Ok(ApiResponse::success_with_message(
            PackageResponse::from(package),
            "Paquete creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<PackageResponse> {
        self.repository
            .find_package(id)
            .await?
            .map(PackageResponse::from)
            .ok_or_else(|| not_found_error("Package", id))
    }

    pub async fn list(&self, page: Page) -> AppResult<Vec<PackageResponse>> {
        let packages = self.repository.list_packages(page).await?;
        Ok(packages.into_iter().map(PackageResponse::from).collect())
    }

    pub async fn delete(&self, id: i32) -> AppResult<MessageResponse> {
        if !self.repository.delete_package(id).await? {
            return Err(not_found_error("Package", id));
        }
        info!("🗑️ Paquete {} eliminado", id);

        Ok(MessageResponse::success(
            "Paquete eliminado exitosamente".to_string(),
        ))
    }
}
