//! Servicio de ordenamiento de rutas (optimización simulada)
//!
//! No resuelve un TSP: ordena los clientes por latitud (norte primero) y
//! acumula una distancia sintética medida siempre contra la base de
//! operaciones, no contra la parada anterior.

use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::Client;
use crate::repositories::LogisticsRepository;
use crate::utils::errors::{AppError, AppResult};

pub const BASE_NAME: &str = "BASE DE OPERACIONES";
pub const BASE_ADDRESS: &str = "Calle Ficticia #100, Centro";

/// Peso de la diferencia de latitud (km por grado simulado)
const LATITUDE_WEIGHT: i64 = 100;
/// Peso de la diferencia de longitud
const LONGITUDE_WEIGHT: i64 = 50;
/// 2.5 minutos por km, en décimas
const TENTHS_OF_MINUTE_PER_KM: i64 = 25;
/// Decimales de las métricas acumuladas en la salida
const METRIC_DECIMALS: u32 = 2;

/// Punto de partida de toda ruta simulada
#[derive(Debug, Clone, PartialEq)]
pub struct OperationsBase {
    pub name: String,
    pub address: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl OperationsBase {
    pub fn at(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            name: BASE_NAME.to_string(),
            address: BASE_ADDRESS.to_string(),
            latitude,
            longitude,
        }
    }
}

impl Default for OperationsBase {
    fn default() -> Self {
        // 20.9168, -101.3508
        Self::at(Decimal::new(209168, 4), Decimal::new(-1013508, 4))
    }
}

/// Una parada del resultado, con métricas acumuladas y redondeadas
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStop {
    pub name: String,
    pub address: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub distance_km: Decimal,
    pub duration_min: Decimal,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteOrderingError {
    #[error("client {client_id} has no coordinates and cannot be placed on the route")]
    MissingCoordinates { client_id: i32 },
}

impl From<RouteOrderingError> for AppError {
    fn from(error: RouteOrderingError) -> Self {
        AppError::UnprocessableEntity(error.to_string())
    }
}

/// Distancia sintética de un punto a la base
pub fn segment_distance(base: &OperationsBase, latitude: Decimal, longitude: Decimal) -> Decimal {
    (latitude - base.latitude).abs() * Decimal::from(LATITUDE_WEIGHT)
        + (longitude - base.longitude).abs() * Decimal::from(LONGITUDE_WEIGHT)
}

/// Duración en minutos de un segmento
pub fn segment_duration(distance_km: Decimal) -> Decimal {
    distance_km * Decimal::new(TENTHS_OF_MINUTE_PER_KM, 1)
}

fn round_metric(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(METRIC_DECIMALS, RoundingStrategy::MidpointNearestEven)
}

/// Ordena los clientes y calcula las paradas con métricas acumuladas.
///
/// La base siempre es la primera parada. Los clientes se ordenan por
/// latitud descendente (sin latitud al final, orden estable). Si se alcanza
/// un cliente sin latitud o longitud se devuelve
/// `RouteOrderingError::MissingCoordinates` y no hay resultado parcial.
pub fn order_stops(
    base: &OperationsBase,
    mut clients: Vec<Client>,
) -> Result<Vec<RouteStop>, RouteOrderingError> {
    // Option ordena None < Some, así que el orden inverso deja None al final
    clients.sort_by(|a, b| b.latitude.cmp(&a.latitude));

    let mut stops = Vec::with_capacity(clients.len() + 1);
    stops.push(RouteStop {
        name: base.name.clone(),
        address: Some(base.address.clone()),
        latitude: Some(base.latitude),
        longitude: Some(base.longitude),
        distance_km: Decimal::ZERO,
        duration_min: Decimal::ZERO,
    });

    let mut total_distance = Decimal::ZERO;
    let mut total_duration = Decimal::ZERO;

    for client in clients {
        let (latitude, longitude) = match (client.latitude, client.longitude) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => {
                return Err(RouteOrderingError::MissingCoordinates {
                    client_id: client.id,
                })
            }
        };

        let distance = segment_distance(base, latitude, longitude);
        total_distance += distance;
        total_duration += segment_duration(distance);

        stops.push(RouteStop {
            name: client.name,
            address: client.address,
            latitude: Some(latitude),
            longitude: Some(longitude),
            distance_km: round_metric(total_distance),
            duration_min: round_metric(total_duration),
        });
    }

    Ok(stops)
}

pub struct RouteOptimizationService {
    repository: Arc<dyn LogisticsRepository>,
    base: OperationsBase,
}

impl RouteOptimizationService {
    pub fn new(repository: Arc<dyn LogisticsRepository>, base: OperationsBase) -> Self {
        Self { repository, base }
    }

    /// Recupera los clientes indicados y devuelve la ruta simulada.
    /// Los ids sin fila se descartan sin error.
    pub async fn optimize(&self, client_ids: &[i32]) -> AppResult<Vec<RouteStop>> {
        info!("🚀 Ordenando ruta para {} clientes solicitados", client_ids.len());

        let clients = self.repository.find_clients_by_ids(client_ids).await?;
        if clients.len() < client_ids.len() {
            debug!(
                "📍 {} clientes encontrados de {} ids solicitados",
                clients.len(),
                client_ids.len()
            );
        }

        let stops = order_stops(&self.base, clients).map_err(|e| {
            warn!("❌ No se pudo ordenar la ruta: {}", e);
            e
        })?;

        if let Some(last) = stops.last() {
            info!(
                "✅ Ruta ordenada: {} paradas, {} km, {} min",
                stops.len(),
                last.distance_km,
                last.duration_min
            );
        }

        Ok(stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewClient;
    use crate::repositories::MemoryLogisticsRepository;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn client(id: i32, name: &str, lat: Option<&str>, lon: Option<&str>) -> Client {
        Client {
            id,
            name: name.to_string(),
            address: Some(format!("Calle {}", id)),
            phone: None,
            email: None,
            latitude: lat.map(dec),
            longitude: lon.map(dec),
        }
    }

    #[test]
    fn test_worked_example() {
        let base = OperationsBase::default();
        let clients = vec![
            client(2, "B", Some("20.0"), Some("-102.0")),
            client(1, "A", Some("21.0"), Some("-101.0")),
        ];

        let stops = order_stops(&base, clients).unwrap();
        let names: Vec<_> = stops.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec![BASE_NAME, "A", "B"]);

        assert_eq!(stops[0].distance_km, Decimal::ZERO);
        assert_eq!(stops[0].duration_min, Decimal::ZERO);
        assert_eq!(stops[0].address.as_deref(), Some(BASE_ADDRESS));

        assert_eq!(stops[1].distance_km, dec("25.86"));
        assert_eq!(stops[1].duration_min, dec("64.65"));
        assert_eq!(stops[2].distance_km, dec("150.00"));
        assert_eq!(stops[2].duration_min, dec("375.00"));
    }

    #[test]
    fn test_distance_is_measured_against_base_not_previous_stop() {
        let base = OperationsBase::default();
        let same_point = || client(1, "X", Some("21.0"), Some("-101.0"));
        let mut twin = same_point();
        twin.id = 2;

        let stops = order_stops(&base, vec![same_point(), twin]).unwrap();
        // Dos clientes en el mismo punto suman dos veces su distancia a la base
        assert_eq!(stops[2].distance_km, dec("51.72"));
    }

    #[test]
    fn test_duration_ratio_is_exact_before_rounding() {
        let base = OperationsBase::default();
        let distance = segment_distance(&base, dec("19.1234567"), dec("-99.7654321"));
        assert_eq!(segment_duration(distance) / distance, dec("2.5"));
    }

    #[test]
    fn test_ordering_and_monotonic_metrics() {
        let base = OperationsBase::default();
        let clients = vec![
            client(1, "sur", Some("19.5"), Some("-101.3")),
            client(2, "norte", Some("22.1"), Some("-100.9")),
            client(3, "centro", Some("20.9"), Some("-101.4")),
            client(4, "empate", Some("20.9"), Some("-101.2")),
        ];

        let stops = order_stops(&base, clients).unwrap();
        let latitudes: Vec<_> = stops[1..].iter().map(|s| s.latitude.unwrap()).collect();
        assert!(latitudes.windows(2).all(|w| w[0] >= w[1]));
        assert!(stops.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
        assert!(stops.windows(2).all(|w| w[0].duration_min <= w[1].duration_min));

        // Empate de latitud conserva el orden de almacenamiento
        assert_eq!(stops[2].name, "centro");
        assert_eq!(stops[3].name, "empate");
    }

    #[test]
    fn test_empty_input_yields_only_base() {
        let stops = order_stops(&OperationsBase::default(), vec![]).unwrap();
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].name, BASE_NAME);
    }

    #[test]
    fn test_missing_latitude_sorts_last_and_is_rejected() {
        let base = OperationsBase::default();
        let clients = vec![
            client(7, "sin coordenadas", None, Some("-101.0")),
            client(8, "ok", Some("21.0"), Some("-101.0")),
        ];

        let err = order_stops(&base, clients).unwrap_err();
        assert_eq!(err, RouteOrderingError::MissingCoordinates { client_id: 7 });
    }

    #[test]
    fn test_missing_longitude_is_rejected() {
        let base = OperationsBase::default();
        let err = order_stops(&base, vec![client(3, "X", Some("21.0"), None)]).unwrap_err();
        assert_eq!(err, RouteOrderingError::MissingCoordinates { client_id: 3 });
        assert!(matches!(AppError::from(err), AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn test_custom_base() {
        let base = OperationsBase::at(dec("21.0"), dec("-101.0"));
        let stops = order_stops(&base, vec![client(1, "A", Some("21.0"), Some("-101.0"))]).unwrap();
        assert_eq!(stops[1].distance_km, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_service_drops_unknown_ids() {
        let repo = Arc::new(MemoryLogisticsRepository::new());
        repo.create_client(NewClient {
            name: "A".to_string(),
            address: None,
            phone: None,
            email: None,
            latitude: Some(dec("21.0")),
            longitude: Some(dec("-101.0")),
        })
        .await
        .unwrap();

        let service = RouteOptimizationService::new(repo, OperationsBase::default());
        let stops = service.optimize(&[1, 404]).await.unwrap();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[1].address, None);

        let only_base = service.optimize(&[404, 405]).await.unwrap();
        assert_eq!(only_base.len(), 1);
    }
}
