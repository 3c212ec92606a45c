//! Modelo de Driver

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Conductor - mapea la tabla drivers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Driver {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub license_number: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewDriver {
    pub name: String,
    pub phone: Option<String>,
    pub license_number: Option<String>,
}

impl NewDriver {
    pub fn into_driver(self, id: i32) -> Driver {
        Driver {
            id,
            name: self.name,
            phone: self.phone,
            license_number: self.license_number,
        }
    }
}
