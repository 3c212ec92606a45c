use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{NewRoute, Route};
use crate::utils::validation::validate_not_blank;

// Request para crear una ruta; `date` en formato YYYY-MM-DD
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteRequest {
    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub name: String,
    pub driver_id: i32,
    pub vehicle_id: i32,
    pub date: NaiveDate,
}

impl From<CreateRouteRequest> for NewRoute {
    fn from(request: CreateRouteRequest) -> Self {
        Self {
            name: request.name.trim().to_string(),
            driver_id: request.driver_id,
            vehicle_id: request.vehicle_id,
            date: request.date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub id: i32,
    pub name: String,
    pub driver_id: i32,
    pub vehicle_id: i32,
    pub date: String,
}

impl From<Route> for RouteResponse {
    fn from(route: Route) -> Self {
        Self {
            id: route.id,
            name: route.name,
            driver_id: route.driver_id,
            vehicle_id: route.vehicle_id,
            date: route.date.format("%Y-%m-%d").to_string(),
        }
    }
}
