//! DTOs del ordenamiento simulado de rutas

use serde::{Deserialize, Serialize};

use crate::services::RouteStop;
use crate::utils::validation::decimal_to_f64;

/// Lista de clientes a visitar
#[derive(Debug, Deserialize)]
pub struct OptimizeRouteRequest {
    pub client_ids: Vec<i32>,
}

/// Una parada de la ruta resultante
#[derive(Debug, Serialize)]
pub struct RouteStopResponse {
    pub name: String,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub distance_km: f64,
    pub duration_min: f64,
}

impl From<RouteStop> for RouteStopResponse {
    fn from(stop: RouteStop) -> Self {
        Self {
            name: stop.name,
            address: stop.address,
            latitude: stop.latitude.map(decimal_to_f64),
            longitude: stop.longitude.map(decimal_to_f64),
            distance_km: decimal_to_f64(stop.distance_km),
            duration_min: decimal_to_f64(stop.duration_min),
        }
    }
}
