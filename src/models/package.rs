use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Paquete de una entrega - peso y valor en NUMERIC(10, 2)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Package {
    pub id: i32,
    pub delivery_id: i32,
    pub description: Option<String>,
    pub weight: Option<Decimal>,
    pub value: Option<Decimal>,
}

#[derive(Debug, Clone)]
pub struct NewPackage {
    pub delivery_id: i32,
    pub description: Option<String>,
    pub weight: Option<Decimal>,
    pub value: Option<Decimal>,
}

impl NewPackage {
    pub fn into_package(self, id: i32) -> Package {
        Package {
            id,
            delivery_id: self.delivery_id,
            description: self.description,
            weight: self.weight,
            value: self.value,
        }
    }
}
