use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Delivery, DeliveryStatus, NewDelivery};

// Request para crear una entrega. `status` es opcional (pending por defecto),
// `delivery_time` en formato HH:MM:SS
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDeliveryRequest {
    pub route_id: i32,
    pub client_id: i32,
    pub status: Option<DeliveryStatus>,
    pub delivery_date: NaiveDate,
    pub delivery_time: NaiveTime,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

impl From<CreateDeliveryRequest> for NewDelivery {
    fn from(request: CreateDeliveryRequest) -> Self {
        Self {
            route_id: request.route_id,
            client_id: request.client_id,
            status: request.status.unwrap_or_default(),
            delivery_date: request.delivery_date,
            delivery_time: request.delivery_time,
            notes: request.notes,
        }
    }
}

// Response de entrega
#[derive(Debug, Serialize)]
pub struct DeliveryResponse {
    pub id: i32,
    pub route_id: i32,
    pub client_id: i32,
    pub status: DeliveryStatus,
    pub delivery_date: String,
    pub delivery_time: String,
    pub notes: Option<String>,
}

impl From<Delivery> for DeliveryResponse {
    fn from(delivery: Delivery) -> Self {
        Self {
            id: delivery.id,
            route_id: delivery.route_id,
            client_id: delivery.client_id,
            status: delivery.status,
            delivery_date: delivery.delivery_date.format("%Y-%m-%d").to_string(),
            delivery_time: delivery.delivery_time.format("%H:%M:%S").to_string(),
            notes: delivery.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_pending() {
        let request: CreateDeliveryRequest = serde_json::from_str(
            r#"{"route_id": 1, "client_id": 2, "delivery_date": "2025-03-14", "delivery_time": "09:15:00"}"#,
        )
        .unwrap();
        let new_delivery = NewDelivery::from(request);
        assert_eq!(new_delivery.status, DeliveryStatus::Pending);
    }

    #[test]
    fn test_response_formats_date_and_time() {
        let response = DeliveryResponse::from(Delivery {
            id: 1,
            route_id: 1,
            client_id: 2,
            status: DeliveryStatus::EnRoute,
            delivery_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            delivery_time: NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
            notes: None,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "en_route");
        assert_eq!(json["delivery_date"], "2025-03-14");
        assert_eq!(json["delivery_time"], "09:05:00");
    }
}
