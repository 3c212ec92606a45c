//! Services module
//! 
//! Este módulo contiene la lógica de negocio que va más allá del CRUD:
//! el ordenamiento simulado de paradas de una ruta.

pub mod route_optimization_service;

pub use route_optimization_service::{
    OperationsBase, RouteOptimizationService, RouteOrderingError, RouteStop,
};
