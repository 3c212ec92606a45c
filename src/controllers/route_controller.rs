use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::dto::common_dto::{ApiResponse, MessageResponse};
use crate::dto::delivery_dto::DeliveryResponse;
use crate::dto::route_dto::{CreateRouteRequest, RouteResponse};
use crate::repositories::{LogisticsRepository, Page};
use crate::utils::errors::{not_found_error, AppResult};

pub struct RouteController {
    repository: Arc<dyn LogisticsRepository>,
}

impl RouteController {
    pub fn new(repository: Arc<dyn LogisticsRepository>) -> Self {
        Self { repository }
    }

    /// Crear una ruta; conductor y vehículo deben existir (422 si no)
    pub async fn create(
        &self,
        request: CreateRouteRequest,
    ) -> AppResult<ApiResponse<RouteResponse>> {
        request.validate()?;

        let route = self.repository.create_route(request.into()).await?;
        info!(
            "✅ Ruta creada: {} (id {}, conductor {}, vehículo {})",
            route.name, route.id, route.driver_id, route.vehicle_id
        );

        Ok(ApiResponse::success_with_message(
            RouteResponse::from(route),
            "Ruta creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<RouteResponse> {
        self.repository
            .find_route(id)
            .await?
            .map(RouteResponse::from)
            .ok_or_else(|| not_found_error("Route", id))
    }

    pub async fn list(&self, page: Page) -> AppResult<Vec<RouteResponse>> {
        let routes = self.repository.list_routes(page).await?;
        Ok(routes.into_iter().map(RouteResponse::from).collect())
    }

    /// Entregas de una ruta existente
    pub async fn list_deliveries(&self, id: i32, page: Page) -> AppResult<Vec<DeliveryResponse>> {
        if self.repository.find_route(id).await?.is_none() {
            return Err(not_found_error("Route", id));
        }

        let deliveries = self.repository.list_deliveries_for_route(id, page).await?;
        Ok(deliveries.into_iter().map(DeliveryResponse::from).collect())
    }

    pub async fn delete(&self, id: i32) -> AppResult<MessageResponse> {
        if !self.repository.delete_route(id).await? {
            return Err(not_found_error("Route", id));
        }
        info!("🗑️ Ruta {} eliminada", id);

        Ok(MessageResponse::success(
            "Ruta eliminada exitosamente".to_string(),
        ))
    }
}
