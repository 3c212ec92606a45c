//! Modelo de Vehicle
//! 
//! Mapea la tabla vehicles. La capacidad es un entero sin unidad definida.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub plate: String,
    pub capacity: i32,
}

/// Datos para insertar un vehículo
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub make: String,
    pub model: String,
    pub plate: String,
    pub capacity: i32,
}

impl NewVehicle {
    pub fn into_vehicle(self, id: i32) -> Vehicle {
        Vehicle {
            id,
            make: self.make,
            model: self.model,
            plate: self.plate,
            capacity: self.capacity,
        }
    }
}
