//! Controladores
//!
//! Validan los requests, delegan en el repositorio o en los servicios y
//! convierten los modelos a DTOs de respuesta.

pub mod client_controller;
pub mod delivery_controller;
pub mod driver_controller;
pub mod package_controller;
pub mod route_controller;
pub mod route_optimization_controller;
pub mod tracking_event_controller;
pub mod vehicle_controller;
