//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::EnvironmentConfig;
use crate::repositories::LogisticsRepository;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn LogisticsRepository>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(repository: Arc<dyn LogisticsRepository>, config: EnvironmentConfig) -> Self {
        Self { repository, config }
    }
}
