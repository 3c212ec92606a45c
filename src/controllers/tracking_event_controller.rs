use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::dto::common_dto::{ApiResponse, MessageResponse};
use crate::dto::tracking_event_dto::{CreateTrackingEventRequest, TrackingEventResponse};
use crate::repositories::{LogisticsRepository, Page};
use crate::utils::errors::{not_found_error, AppResult};

pub struct TrackingEventController {
    repository: Arc<dyn LogisticsRepository>,
}

impl TrackingEventController {
    pub fn new(repository: Arc<dyn LogisticsRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(
        &self,
        request: CreateTrackingEventRequest,
    ) -> AppResult<ApiResponse<TrackingEventResponse>> {
        request.validate()?;

        let event = self.repository.create_tracking_event(request.into()).await?;
        info!(
            "📍 Evento de seguimiento {} para entrega {}: {}",
            event.id, event.delivery_id, event.status
        );

        Ok(ApiResponse::success_with_message(
            TrackingEventResponse::from(event),
            "Evento de seguimiento registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<TrackingEventResponse> {
        self.repository
            .find_tracking_event(id)
            .await?
            .map(TrackingEventResponse::from)
            .ok_or_else(|| not_found_error("Tracking event", id))
    }

    pub async fn list(&self, page: Page) -> AppResult<Vec<TrackingEventResponse>> {
        let events = self.repository.list_tracking_events(page).await?;
        Ok(events.into_iter().map(TrackingEventResponse::from).collect())
    }

    pub async fn delete(&self, id: i32) -> AppResult<MessageResponse> {
        if !self.repository.delete_tracking_event(id).await? {
            return Err(not_found_error("Tracking event", id));
        }
        info!("🗑️ Evento de seguimiento {} eliminado", id);

        Ok(MessageResponse::success(
            "Evento de seguimiento eliminado exitosamente".to_string(),
        ))
    }
}
