use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{DeliveryStatus, NewTrackingEvent, TrackingEvent};

// Request para registrar un evento de seguimiento; la fecha la pone el servidor
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTrackingEventRequest {
    pub delivery_id: i32,
    pub status: DeliveryStatus,
    #[validate(length(max = 2000))]
    pub comment: Option<String>,
}

impl From<CreateTrackingEventRequest> for NewTrackingEvent {
    fn from(request: CreateTrackingEventRequest) -> Self {
        Self {
            delivery_id: request.delivery_id,
            status: request.status,
            comment: request.comment,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TrackingEventResponse {
    pub id: i32,
    pub delivery_id: i32,
    pub recorded_at: String,
    pub status: DeliveryStatus,
    pub comment: Option<String>,
}

impl From<TrackingEvent> for TrackingEventResponse {
    fn from(event: TrackingEvent) -> Self {
        Self {
            id: event.id,
            delivery_id: event.delivery_id,
            recorded_at: event.recorded_at.to_rfc3339(),
            status: event.status,
            comment: event.comment,
        }
    }
}
