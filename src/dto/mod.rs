//! Representaciones externas (transporte) de las entidades
//!
//! Los requests se validan con `validator`; los responses convierten
//! NUMERIC a número JSON y fechas/horas a strings ISO-8601.

pub mod client_dto;
pub mod common_dto;
pub mod delivery_dto;
pub mod driver_dto;
pub mod package_dto;
pub mod route_dto;
pub mod route_optimization_dto;
pub mod tracking_event_dto;
pub mod vehicle_dto;
