//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno: servidor, CORS y
//! ubicación de la base de operaciones. Todas las variables tienen valor
//! por defecto; un valor presente pero inválido es un error de arranque.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;

use crate::services::OperationsBase;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    /// Vacío = CORS permisivo
    pub cors_origins: Vec<String>,
    pub base_latitude: Decimal,
    pub base_longitude: Decimal,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        let base = OperationsBase::default();
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            base_latitude: base.latitude,
            base_longitude: base.longitude,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración de las variables de entorno del proceso
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid number, got '{}'", value))?,
            None => defaults.port,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let base_latitude = parse_coordinate(&lookup, "OPERATIONS_BASE_LATITUDE", 90)?
            .unwrap_or(defaults.base_latitude);
        let base_longitude = parse_coordinate(&lookup, "OPERATIONS_BASE_LONGITUDE", 180)?
            .unwrap_or(defaults.base_longitude);

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port,
            host: lookup("HOST").unwrap_or(defaults.host),
            cors_origins,
            base_latitude,
            base_longitude,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Base de operaciones desde la que arrancan las rutas simuladas
    pub fn operations_base(&self) -> OperationsBase {
        OperationsBase::at(self.base_latitude, self.base_longitude)
    }
}

fn parse_coordinate<F>(lookup: &F, key: &str, bound: i64) -> Result<Option<Decimal>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    let value = Decimal::from_str(raw.trim())
        .with_context(|| format!("{} must be a decimal number, got '{}'", key, raw))?;
    if value.abs() > Decimal::from(bound) {
        anyhow::bail!("{} must be between -{} and {}, got {}", key, bound, bound, value);
    }
    Ok(Some(value))
}
