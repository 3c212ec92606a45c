//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos entre transporte (f64) y almacenamiento (NUMERIC).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use validator::ValidationError;

use crate::utils::errors::AppError;

/// Escala de las columnas de coordenadas: NUMERIC(10, 7)
pub const COORDINATE_SCALE: u32 = 7;

/// Escala de las columnas monetarias y de peso: NUMERIC(10, 2)
pub const AMOUNT_SCALE: u32 = 2;

/// Validar que un string no esté vacío
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Validar rango de latitud GPS
pub fn validate_latitude(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || !(-90.0..=90.0).contains(&value) {
        let mut error = ValidationError::new("latitude");
        error.add_param("value".into(), &value);
        error.add_param("range".into(), &"-90.0 to 90.0".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar rango de longitud GPS
pub fn validate_longitude(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || !(-180.0..=180.0).contains(&value) {
        let mut error = ValidationError::new("longitude");
        error.add_param("value".into(), &value);
        error.add_param("range".into(), &"-180.0 to 180.0".to_string());
        return Err(error);
    }
    Ok(())
}

/// Mayor valor que cabe en NUMERIC(10, 2)
pub const MAX_AMOUNT: f64 = 99_999_999.99;

/// Validar que un importe o peso no sea negativo y quepa en NUMERIC(10, 2)
pub fn validate_amount(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || !(0.0..=MAX_AMOUNT).contains(&value) {
        let mut error = ValidationError::new("amount");
        error.add_param("value".into(), &value);
        error.add_param("range".into(), &"0.00 to 99999999.99".to_string());
        return Err(error);
    }
    Ok(())
}

/// Convertir un f64 de transporte a Decimal con la escala de la columna
pub fn to_decimal(value: f64, scale: u32, field: &str) -> Result<Decimal, AppError> {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp(scale))
        .ok_or_else(|| AppError::BadRequest(format!("Invalid {} value: {}", field, value)))
}

/// Igual que `to_decimal` para campos opcionales
pub fn to_optional_decimal(
    value: Option<f64>,
    scale: u32,
    field: &str,
) -> Result<Option<Decimal>, AppError> {
    value.map(|v| to_decimal(v, scale, field)).transpose()
}

/// Convertir Decimal de almacenamiento a f64 para JSON
pub fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
