use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::dto::common_dto::{ApiResponse, MessageResponse};
use crate::dto::vehicle_dto::{CreateVehicleRequest, VehicleResponse};
use crate::repositories::{LogisticsRepository, Page};
use crate::utils::errors::{not_found_error, AppResult};

pub struct VehicleController {
    repository: Arc<dyn LogisticsRepository>,
}

impl VehicleController {
    pub fn new(repository: Arc<dyn LogisticsRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        // Validar campos
        request.validate()?;

        // Crear vehículo
        let vehicle = self.repository.create_vehicle(request.into()).await?;
        info!("✅ Vehículo creado: {} (id {})", vehicle.plate, vehicle.id);

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<VehicleResponse> {
        self.repository
            .find_vehicle(id)
            .await?
            .map(VehicleResponse::from)
            .ok_or_else(|| not_found_error("Vehicle", id))
    }

    pub async fn list(&self, page: Page) -> AppResult<Vec<VehicleResponse>> {
        let vehicles = self.repository.list_vehicles(page).await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn delete(&self, id: i32) -> AppResult<MessageResponse> {
        if !self.repository.delete_vehicle(id).await? {
            return Err(not_found_error("Vehicle", id));
        }
        info!("🗑️ Vehículo {} eliminado", id);

        Ok(MessageResponse::success(
            "Vehículo eliminado exitosamente".to_string(),
        ))
    }
}
