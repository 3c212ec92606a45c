use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Driver, NewDriver};
use crate::utils::validation::validate_not_blank;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub name: String,

    #[validate(length(max = 20))]
    pub phone: Option<String>,

    #[validate(length(max = 50))]
    pub license_number: Option<String>,
}

impl From<CreateDriverRequest> for NewDriver {
    fn from(request: CreateDriverRequest) -> Self {
        Self {
            name: request.name.trim().to_string(),
            phone: request.phone,
            license_number: request.license_number,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DriverResponse {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub license_number: Option<String>,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id,
            name: driver.name,
            phone: driver.phone,
            license_number: driver.license_number,
        }
    }
}
