use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::dto::common_dto::{ApiResponse, MessageResponse};
use crate::dto::driver_dto::{CreateDriverRequest, DriverResponse};
use crate::repositories::{LogisticsRepository, Page};
use crate::utils::errors::{not_found_error, AppResult};

pub struct DriverController {
    repository: Arc<dyn LogisticsRepository>,
}

impl DriverController {
    pub fn new(repository: Arc<dyn LogisticsRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(
        &self,
        request: CreateDriverRequest,
    ) -> AppResult<ApiResponse<DriverResponse>> {
        request.validate()?;

        let driver = self.repository.create_driver(request.into()).await?;
        info!("✅ Conductor creado: {} (id {})", driver.name, driver.id);

        Ok(ApiResponse::success_with_message(
            DriverResponse::from(driver),
            "Conductor creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<DriverResponse> {
        self.repository
            .find_driver(id)
            .await?
            .map(DriverResponse::from)
            .ok_or_else(|| not_found_error("Driver", id))
    }

    pub async fn list(&self, page: Page) -> AppResult<Vec<DriverResponse>> {
        let drivers = self.repository.list_drivers(page).await?;
        Ok(drivers.into_iter().map(DriverResponse::from).collect())
    }

    pub async fn delete(&self, id: i32) -> AppResult<MessageResponse> {
        if !self.repository.delete_driver(id).await? {
            return Err(not_found_error("Driver", id));
        }
        info!("🗑️ Conductor {} eliminado", id);

        Ok(MessageResponse::success(
            "Conductor eliminado exitosamente".to_string(),
        ))
    }
}
