use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{NewPackage, Package};
use crate::utils::errors::AppResult;
use crate::utils::validation::{
    decimal_to_f64, to_optional_decimal, validate_amount, AMOUNT_SCALE,
};

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePackageRequest {
    pub delivery_id: i32,

    #[validate(length(max = 200))]
    pub description: Option<String>,

    #[validate(custom = "validate_amount")]
    pub weight: Option<f64>,

    #[validate(custom = "validate_amount")]
    pub value: Option<f64>,
}

impl CreatePackageRequest {
    pub fn into_new_package(self) -> AppResult<NewPackage> {
        Ok(NewPackage {
            delivery_id: self.delivery_id,
            description: self.description,
            weight: to_optional_decimal(self.weight, AMOUNT_SCALE, "weight")?,
            value: to_optional_decimal(self.value, AMOUNT_SCALE, "value")?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct PackageResponse {
    pub id: i32,
    pub delivery_id: i32,
    pub description: Option<String>,
    pub weight: Option<f64>,
    pub value: Option<f64>,
}

impl From<Package> for PackageResponse {
    fn from(package: Package) -> Self {
        Self {
            id: package.id,
            delivery_id: package.delivery_id,
            description: package.description,
            weight: package.weight.map(decimal_to_f64),
            value: package.value.map(decimal_to_f64),
        }
    }
}
