//! Backend de logística de entregas
//!
//! Clientes, conductores, vehículos, rutas, entregas, paquetes y eventos de
//! seguimiento expuestos vía HTTP, más el ordenamiento simulado de paradas.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
