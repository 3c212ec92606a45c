//! Modelo de TrackingEvent
//!
//! Instantánea del estado de una entrega. `recorded_at` lo asigna el
//! almacenamiento al insertar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::delivery::DeliveryStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TrackingEvent {
    pub id: i32,
    pub delivery_id: i32,
    pub recorded_at: DateTime<Utc>,
    pub status: DeliveryStatus,
    pub comment: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewTrackingEvent {
    pub delivery_id: i32,
    pub status: DeliveryStatus,
    pub comment: Option<String>,
}

impl NewTrackingEvent {
    pub fn into_tracking_event(self, id: i32, recorded_at: DateTime<Utc>) -> TrackingEvent {
        TrackingEvent {
            id,
            delivery_id: self.delivery_id,
            recorded_at,
            status: self.status,
            comment: self.comment,
        }
    }
}
