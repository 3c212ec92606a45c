use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::dto::common_dto::{ApiResponse, MessageResponse};
use crate::dto::delivery_dto::{CreateDeliveryRequest, DeliveryResponse};
use crate::dto::package_dto::PackageResponse;
use crate::dto::tracking_event_dto::TrackingEventResponse;
use crate::repositories::{LogisticsRepository, Page};
use crate::utils::errors::{not_found_error, AppResult};

pub struct DeliveryController {
    repository: Arc<dyn LogisticsRepository>,
}

impl DeliveryController {
    pub fn new(repository: Arc<dyn LogisticsRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(
        &self,
        request: CreateDeliveryRequest,
    ) -> AppResult<ApiResponse<DeliveryResponse>> {
        request.validate()?;

        let delivery = self.repository.create_delivery(request.into()).await?;
        info!(
            "✅ Entrega creada: id {} (ruta {}, cliente {}, {})",
            delivery.id, delivery.route_id, delivery.client_id, delivery.status
        );

        Ok(ApiResponse::success_with_message(
            DeliveryResponse::from(delivery),
            "Entrega creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<DeliveryResponse> {
        self.repository
            .find_delivery(id)
            .await?
            .map(DeliveryResponse::from)
            .ok_or_else(|| not_found_error("Delivery", id))
    }

    pub async fn list(&self, page: Page) -> AppResult<Vec<DeliveryResponse>> {
        let deliveries = self.repository.list_deliveries(page).await?;
        Ok(deliveries.into_iter().map(DeliveryResponse::from).collect())
    }

    pub async fn list_packages(&self, id: i32, page: Page) -> AppResult<Vec<PackageResponse>> {
        self.ensure_exists(id).await?;
        let packages = self.repository.list_packages_for_delivery(id, page).await?;
        Ok(packages.into_iter().map(PackageResponse::from).collect())
    }

    /// Historial de seguimiento de una entrega, en orden de registro
    pub async fn list_tracking(
        &self,
        id: i32,
        page: Page,
    ) -> AppResult<Vec<TrackingEventResponse>> {
        self.ensure_exists(id).await?;
        let events = self
            .repository
            .list_tracking_events_for_delivery(id, page)
            .await?;
        Ok(events.into_iter().map(TrackingEventResponse::from).collect())
    }

    pub async fn delete(&self, id: i32) -> AppResult<MessageResponse> {
        if !self.repository.delete_delivery(id).await? {
            return Err(not_found_error("Delivery", id));
        }
        info!("🗑️ Entrega {} eliminada", id);

        Ok(MessageResponse::success(
            "Entrega eliminada exitosamente".to_string(),
        ))
    }

    async fn ensure_exists(&self, id: i32) -> AppResult<()> {
        match self.repository.find_delivery(id).await? {
            Some(_) => Ok(()),
            None => Err(not_found_error("Delivery", id)),
        }
    }
}
