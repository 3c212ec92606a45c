//! Repositorio en memoria
//!
//! Arena de tablas indexadas por id (`BTreeMap`) detrás de un único
//! `RwLock`, de modo que la comprobación de claves foráneas y la
//! inserción o borrado ocurren bajo el mismo lock de escritura.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{
    Client, Delivery, Driver, NewClient, NewDelivery, NewDriver, NewPackage, NewRoute,
    NewTrackingEvent, NewVehicle, Package, Route, TrackingEvent, Vehicle,
};
use crate::repositories::{LogisticsRepository, Page};
use crate::utils::errors::{missing_parent_error, restricted_delete_error, AppError, AppResult};

/// Tabla con ids autoincrementales empezando en 1, como SERIAL.
/// `next_id` es `None` cuando la secuencia llegó a `i32::MAX`.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: Option<i32>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: Some(1),
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> AppResult<T> {
        let id = self
            .next_id
            .ok_or_else(|| AppError::Internal("id sequence exhausted".to_string()))?;
        self.next_id = id.checked_add(1);
        let row = build(id);
        self.rows.insert(id, row.clone());
        Ok(row)
    }

    fn get(&self, id: i32) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn contains(&self, id: i32) -> bool {
        self.rows.contains_key(&id)
    }

    fn page(&self, page: Page) -> Vec<T> {
        page.slice(self.rows.values().cloned())
    }

    fn page_where(&self, page: Page, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        page.slice(self.rows.values().filter(|row| predicate(*row)).cloned())
    }

    fn any(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.rows.values().any(predicate)
    }

    fn remove(&mut self, id: i32) -> bool {
        self.rows.remove(&id).is_some()
    }
}

#[derive(Debug, Default)]
struct Tables {
    clients: Table<Client>,
    drivers: Table<Driver>,
    vehicles: Table<Vehicle>,
    routes: Table<Route>,
    deliveries: Table<Delivery>,
    packages: Table<Package>,
    tracking_events: Table<TrackingEvent>,
}

#[derive(Debug, Default)]
pub struct MemoryLogisticsRepository {
    tables: RwLock<Tables>,
}

impl MemoryLogisticsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LogisticsRepository for MemoryLogisticsRepository {
    async fn list_clients(&self, page: Page) -> AppResult<Vec<Client>> {
        Ok(self.tables.read().await.clients.page(page))
    }

    async fn find_client(&self, id: i32) -> AppResult<Option<Client>> {
        Ok(self.tables.read().await.clients.get(id))
    }

    async fn find_clients_by_ids(&self, ids: &[i32]) -> AppResult<Vec<Client>> {
        let tables = self.tables.read().await;
        Ok(tables
            .clients
            .rows
            .values()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }

    async fn create_client(&self, client: NewClient) -> AppResult<Client> {
        let mut tables = self.tables.write().await;
        let created = tables.clients.insert_with(|id| client.into_client(id))?;
        debug!("💾 Cliente {} creado en memoria", created.id);
        Ok(created)
    }

    async fn delete_client(&self, id: i32) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.deliveries.any(|d| d.client_id == id) {
            return Err(restricted_delete_error("Client", id, "deliveries"));
        }
        Ok(tables.clients.remove(id))
    }

    async fn list_drivers(&self, page: Page) -> AppResult<Vec<Driver>> {
        Ok(self.tables.read().await.drivers.page(page))
    }

    async fn find_driver(&self, id: i32) -> AppResult<Option<Driver>> {
        Ok(self.tables.read().await.drivers.get(id))
    }

    async fn create_driver(&self, driver: NewDriver) -> AppResult<Driver> {
        let mut tables = self.tables.write().await;
        tables.drivers.insert_with(|id| driver.into_driver(id))
    }

    async fn delete_driver(&self, id: i32) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.routes.any(|r| r.driver_id == id) {
            return Err(restricted_delete_error("Driver", id, "routes"));
        }
        Ok(tables.drivers.remove(id))
    }

    async fn list_vehicles(&self, page: Page) -> AppResult<Vec<Vehicle>> {
        Ok(self.tables.read().await.vehicles.page(page))
    }

    async fn find_vehicle(&self, id: i32) -> AppResult<Option<Vehicle>> {
        Ok(self.tables.read().await.vehicles.get(id))
    }

    async fn create_vehicle(&self, vehicle: NewVehicle) -> AppResult<Vehicle> {
        let mut tables = self.tables.write().await;
        tables.vehicles.insert_with(|id| vehicle.into_vehicle(id))
    }

    async fn delete_vehicle(&self, id: i32) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.routes.any(|r| r.vehicle_id == id) {
            return Err(restricted_delete_error("Vehicle", id, "routes"));
        }
        Ok(tables.vehicles.remove(id))
    }

    async fn list_routes(&self, page: Page) -> AppResult<Vec<Route>> {
        Ok(self.tables.read().await.routes.page(page))
    }

    async fn find_route(&self, id: i32) -> AppResult<Option<Route>> {
        Ok(self.tables.read().await.routes.get(id))
    }

    async fn create_route(&self, route: NewRoute) -> AppResult<Route> {
        let mut tables = self.tables.write().await;
        if !tables.drivers.contains(route.driver_id) {
            return Err(missing_parent_error("Driver", route.driver_id));
        }
        if !tables.vehicles.contains(route.vehicle_id) {
            return Err(missing_parent_error("Vehicle", route.vehicle_id));
        }
        tables.routes.insert_with(|id| route.into_route(id))
    }

    async fn delete_route(&self, id: i32) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.deliveries.any(|d| d.route_id == id) {
            return Err(restricted_delete_error("Route", id, "deliveries"));
        }
        Ok(tables.routes.remove(id))
    }

    async fn list_deliveries(&self, page: Page) -> AppResult<Vec<Delivery>> {
        Ok(self.tables.read().await.deliveries.page(page))
    }

    async fn list_deliveries_for_route(&self, route_id: i32, page: Page) -> AppResult<Vec<Delivery>> {
        let tables = self.tables.read().await;
        Ok(tables.deliveries.page_where(page, |d| d.route_id == route_id))
    }

    async fn find_delivery(&self, id: i32) -> AppResult<Option<Delivery>> {
        Ok(self.tables.read().await.deliveries.get(id))
    }

    async fn create_delivery(&self, delivery: NewDelivery) -> AppResult<Delivery> {
        let mut tables = self.tables.write().await;
        if !tables.routes.contains(delivery.route_id) {
            return Err(missing_parent_error("Route", delivery.route_id));
        }
        if !tables.clients.contains(delivery.client_id) {
            return Err(missing_parent_error("Client", delivery.client_id));
        }
        tables.deliveries.insert_with(|id| delivery.into_delivery(id))
    }

    async fn delete_delivery(&self, id: i32) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.packages.any(|p| p.delivery_id == id) {
            return Err(restricted_delete_error("Delivery", id, "packages"));
        }
        if tables.tracking_events.any(|t| t.delivery_id == id) {
            return Err(restricted_delete_error("Delivery", id, "tracking events"));
        }
        Ok(tables.deliveries.remove(id))
    }

    async fn list_packages(&self, page: Page) -> AppResult<Vec<Package>> {
        Ok(self.tables.read().await.packages.page(page))
    }

    async fn list_packages_for_delivery(&self, delivery_id: i32, page: Page) -> AppResult<Vec<Package>> {
        let tables = self.tables.read().await;
        Ok(tables.packages.page_where(page, |p| p.delivery_id == delivery_id))
    }

    async fn find_package(&self, id: i32) -> AppResult<Option<Package>> {
        Ok(self.tables.read().await.packages.get(id))
    }

    async fn create_package(&self, package: NewPackage) -> AppResult<Package> {
        let mut tables = self.tables.write().await;
        if !tables.deliveries.contains(package.delivery_id) {
            return Err(missing_parent_error("Delivery", package.delivery_id));
        }
        tables.packages.insert_with(|id| package.into_package(id))
    }

    async fn delete_package(&self, id: i32) -> AppResult<bool> {
        Ok(self.tables.write().await.packages.remove(id))
    }

    async fn list_tracking_events(&self, page: Page) -> AppResult<Vec<TrackingEvent>> {
        Ok(self.tables.read().await.tracking_events.page(page))
    }

    async fn list_tracking_events_for_delivery(
        &self,
        delivery_id: i32,
        page: Page,
    ) -> AppResult<Vec<TrackingEvent>> {
        let tables = self.tables.read().await;
        Ok(tables.tracking_events.page_where(page, |t| t.delivery_id == delivery_id))
    }

    async fn find_tracking_event(&self, id: i32) -> AppResult<Option<TrackingEvent>> {
        Ok(self.tables.read().await.tracking_events.get(id))
    }

    async fn create_tracking_event(&self, event: NewTrackingEvent) -> AppResult<TrackingEvent> {
        let mut tables = self.tables.write().await;
        if !tables.deliveries.contains(event.delivery_id) {
            return Err(missing_parent_error("Delivery", event.delivery_id));
        }
        let recorded_at = Utc::now();
        tables
            .tracking_events
            .insert_with(|id| event.into_tracking_event(id, recorded_at))
    }

    async fn delete_tracking_event(&self, id: i32) -> AppResult<bool> {
        Ok(self.tables.write().await.tracking_events.remove(id))
    }
}
