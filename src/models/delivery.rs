//! Modelo de Delivery
//! 
//! Este módulo contiene el struct Delivery y el ENUM delivery_status,
//! compartido con los eventos de seguimiento.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::fmt;

/// Estado de la entrega - mapea al ENUM delivery_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Default)]
#[sqlx(type_name = "delivery_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    #[default]
    Pending,
    EnRoute,
    Delivered,
    Delayed,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::EnRoute => "en_route",
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Delayed => "delayed",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery - mapea la tabla deliveries (FK a routes y clients)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Delivery {
    pub id: i32,
    pub route_id: i32,
    pub client_id: i32,
    pub status: DeliveryStatus,
    pub delivery_date: NaiveDate,
    pub delivery_time: NaiveTime,
    pub notes: Option<String>,
}

/// Datos para insertar una entrega
#[derive(Debug, Clone)]
pub struct NewDelivery {
    pub route_id: i32,
    pub client_id: i32,
    pub status: DeliveryStatus,
    pub delivery_date: NaiveDate,
    pub delivery_time: NaiveTime,
    pub notes: Option<String>,
}

impl NewDelivery {
    pub fn into_delivery(self, id: i32) -> Delivery {
        Delivery {
            id,
            route_id: self.route_id,
            client_id: self.client_id,
            status: self.status,
            delivery_date: self.delivery_date,
            delivery_time: self.delivery_time,
            notes: self.notes,
        }
    }
}
