//! Capa de acceso a datos
//!
//! `LogisticsRepository` define las consultas paginadas, búsquedas,
//! inserciones y borrados de las siete tablas. Hay dos implementaciones:
//! PostgreSQL (producción) y una arena en memoria (tests y desarrollo local).
//!
//! Todas las claves foráneas son RESTRICT: crear un hijo con un padre
//! inexistente devuelve `UnprocessableEntity`, borrar un padre con hijos
//! devuelve `Conflict`.

pub mod memory_repository;
pub mod postgres_repository;

pub use memory_repository::MemoryLogisticsRepository;
pub use postgres_repository::PgLogisticsRepository;

use async_trait::async_trait;

use crate::models::{
    Client, Delivery, Driver, NewClient, NewDelivery, NewDriver, NewPackage, NewRoute,
    NewTrackingEvent, NewVehicle, Package, Route, TrackingEvent, Vehicle,
};
use crate::utils::errors::{bad_request_error, AppResult};

/// Límite por defecto de los listados
pub const DEFAULT_PAGE_LIMIT: i64 = 100;

/// Ventana offset/limit de un listado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

impl Page {
    pub fn new(offset: i64, limit: i64) -> AppResult<Self> {
        if offset < 0 {
            return Err(bad_request_error("skip must be zero or positive"));
        }
        if limit < 0 {
            return Err(bad_request_error("limit must be zero or positive"));
        }
        Ok(Self { offset, limit })
    }

    /// Aplica la ventana sobre un iterador ya ordenado
    pub fn slice<T, I>(&self, rows: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        rows.into_iter()
            .skip(usize::try_from(self.offset).unwrap_or(usize::MAX))
            .take(usize::try_from(self.limit).unwrap_or(usize::MAX))
            .collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// Operaciones de persistencia del dominio.
///
/// Los listados se ordenan por `id` ascendente. Los `delete_*` devuelven
/// `Ok(false)` si la fila no existe.
#[async_trait]
pub trait LogisticsRepository: Send + Sync {
    // Clients
    async fn list_clients(&self, page: Page) -> AppResult<Vec<Client>>;
    async fn find_client(&self, id: i32) -> AppResult<Option<Client>>;
    /// Clientes cuyo id está en `ids`; los ids desconocidos se ignoran
    async fn find_clients_by_ids(&self, ids: &[i32]) -> AppResult<Vec<Client>>;
    async fn create_client(&self, client: NewClient) -> AppResult<Client>;
    async fn delete_client(&self, id: i32) -> AppResult<bool>;

    // Drivers
    async fn list_drivers(&self, page: Page) -> AppResult<Vec<Driver>>;
    async fn find_driver(&self, id: i32) -> AppResult<Option<Driver>>;
    async fn create_driver(&self, driver: NewDriver) -> AppResult<Driver>;
    async fn delete_driver(&self, id: i32) -> AppResult<bool>;

    // Vehicles
    async fn list_vehicles(&self, page: Page) -> AppResult<Vec<Vehicle>>;
    async fn find_vehicle(&self, id: i32) -> AppResult<Option<Vehicle>>;
    async fn create_vehicle(&self, vehicle: NewVehicle) -> AppResult<Vehicle>;
    async fn delete_vehicle(&self, id: i32) -> AppResult<bool>;

    // Routes
    async fn list_routes(&self, page: Page) -> AppResult<Vec<Route>>;
    async fn find_route(&self, id: i32) -> AppResult<Option<Route>>;
    async fn create_route(&self, route: NewRoute) -> AppResult<Route>;
    async fn delete_route(&self, id: i32) -> AppResult<bool>;

    // Deliveries
    async fn list_deliveries(&self, page: Page) -> AppResult<Vec<Delivery>>;
    async fn list_deliveries_for_route(&self, route_id: i32, page: Page) -> AppResult<Vec<Delivery>>;
    async fn find_delivery(&self, id: i32) -> AppResult<Option<Delivery>>;
    async fn create_delivery(&self, delivery: NewDelivery) -> AppResult<Delivery>;
    async fn delete_delivery(&self, id: i32) -> AppResult<bool>;

    // Packages
    async fn list_packages(&self, page: Page) -> AppResult<Vec<Package>>;
    async fn list_packages_for_delivery(&self, delivery_id: i32, page: Page) -> AppResult<Vec<Package>>;
    async fn find_package(&self, id: i32) -> AppResult<Option<Package>>;
    async fn create_package(&self, package: NewPackage) -> AppResult<Package>;
    async fn delete_package(&self, id: i32) -> AppResult<bool>;

    // Tracking events
    async fn list_tracking_events(&self, page: Page) -> AppResult<Vec<TrackingEvent>>;
    async fn list_tracking_events_for_delivery(
        &self,
        delivery_id: i32,
        page: Page,
    ) -> AppResult<Vec<TrackingEvent>>;
    async fn find_tracking_event(&self, id: i32) -> AppResult<Option<TrackingEvent>>;
    async fn create_tracking_event(&self, event: NewTrackingEvent) -> AppResult<TrackingEvent>;
    async fn delete_tracking_event(&self, id: i32) -> AppResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_rejects_negative_values() {
        assert!(Page::new(-1, 10).is_err());
        assert!(Page::new(0, -5).is_err());
        assert_eq!(Page::new(5, 0).unwrap(), Page { offset: 5, limit: 0 });
    }

    #[test]
    fn test_page_slice() {
        let rows: Vec<i32> = (1..=10).collect();
        assert_eq!(Page::new(2, 3).unwrap().slice(rows.clone()), vec![3, 4, 5]);
        assert!(Page::new(0, 0).unwrap().slice(rows.clone()).is_empty());
        assert!(Page::new(50, 10).unwrap().slice(rows.clone()).is_empty());
        assert_eq!(Page::default().slice(rows).len(), 10);
    }
}
