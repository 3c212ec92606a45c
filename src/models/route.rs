//! Modelo de Route
//!
//! Una ruta asigna un conductor y un vehículo a una fecha.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Route - mapea la tabla routes (FK a drivers y vehicles)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Route {
    pub id: i32,
    pub name: String,
    pub driver_id: i32,
    pub vehicle_id: i32,
    pub date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct NewRoute {
    pub name: String,
    pub driver_id: i32,
    pub vehicle_id: i32,
    pub date: NaiveDate,
}

impl NewRoute {
    pub fn into_route(self, id: i32) -> Route {
        Route {
            id,
            name: self.name,
            driver_id: self.driver_id,
            vehicle_id: self.vehicle_id,
            date: self.date,
        }
    }
}
