use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{NewVehicle, Vehicle};
use crate::utils::validation::validate_not_blank;

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 50), custom = "validate_not_blank")]
    pub make: String,

    #[validate(length(min = 1, max = 50), custom = "validate_not_blank")]
    pub model: String,

    #[validate(length(min = 1, max = 20), custom = "validate_not_blank")]
    pub plate: String,

    #[validate(range(min = 0))]
    pub capacity: i32,
}

impl From<CreateVehicleRequest> for NewVehicle {
    fn from(request: CreateVehicleRequest) -> Self {
        Self {
            make: request.make.trim().to_string(),
            model: request.model.trim().to_string(),
            plate: request.plate.trim().to_string(),
            capacity: request.capacity,
        }
    }
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub plate: String,
    pub capacity: i32,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            make: vehicle.make,
            model: vehicle.model,
            plate: vehicle.plate,
            capacity: vehicle.capacity,
        }
    }
}
