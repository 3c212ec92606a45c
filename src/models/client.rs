//! Modelo de Client
//!
//! Mapea la tabla `clients`. Las coordenadas son NUMERIC(10, 7) y opcionales.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Client principal - mapea exactamente a la tabla clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}

/// Datos para insertar un cliente (ya validados y convertidos)
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}

impl NewClient {
    pub fn into_client(self, id: i32) -> Client {
        Client {
            id,
            name: self.name,
            address: self.address,
            phone: self.phone,
            email: self.email,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
