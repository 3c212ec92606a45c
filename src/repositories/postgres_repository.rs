use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{
    Client, Delivery, Driver, NewClient, NewDelivery, NewDriver, NewPackage, NewRoute,
    NewTrackingEvent, NewVehicle, Package, Route, TrackingEvent, Vehicle,
};
use crate::repositories::{LogisticsRepository, Page};
use crate::utils::errors::{AppError, AppResult};

/// SQLSTATE de violación de clave foránea
const FOREIGN_KEY_VIOLATION: &str = "23503";

fn is_foreign_key_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .and_then(|db| db.code())
        .map(|code| code == FOREIGN_KEY_VIOLATION)
        .unwrap_or(false)
}

/// Insert que referencia un padre inexistente
fn map_insert_error(error: sqlx::Error, resource: &str) -> AppError {
    if is_foreign_key_violation(&error) {
        AppError::UnprocessableEntity(format!(
            "Error creating {}: referenced row does not exist",
            resource
        ))
    } else {
        AppError::Database(error)
    }
}

/// Delete bloqueado por ON DELETE RESTRICT
fn map_delete_error(error: sqlx::Error, resource: &str, id: i32) -> AppError {
    if is_foreign_key_violation(&error) {
        AppError::Conflict(format!(
            "{} with id '{}' is still referenced by other rows",
            resource, id
        ))
    } else {
        AppError::Database(error)
    }
}

/// Repositorio sobre PostgreSQL. Cada llamada toma una conexión del pool
/// y la devuelve al terminar.
#[derive(Debug, Clone)]
pub struct PgLogisticsRepository {
    pool: PgPool,
}

impl PgLogisticsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn delete_by_id(&self, table: &'static str, resource: &str, id: i32) -> AppResult<bool> {
        let query = format!("DELETE FROM {} WHERE id = $1", table);
        let result = sqlx::query(&query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_delete_error(e, resource, id))?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl LogisticsRepository for PgLogisticsRepository {
    async fn list_clients(&self, page: Page) -> AppResult<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT * FROM clients ORDER BY id OFFSET $1 LIMIT $2"
        )
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    async fn find_client(&self, id: i32) -> AppResult<Option<Client>> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(client)
    }

    async fn find_clients_by_ids(&self, ids: &[i32]) -> AppResult<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = ANY($1) ORDER BY id")
            .bind(ids)
            .fetch_all(&self.pool)
            .await?;

        Ok(clients)
    }

    async fn create_client(&self, client: NewClient) -> AppResult<Client> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (name, address, phone, email, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#
        )
        .bind(client.name)
        .bind(client.address)
        .bind(client.phone)
        .bind(client.email)
        .bind(client.latitude)
        .bind(client.longitude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "client"))?;

        Ok(client)
    }

    async fn delete_client(&self, id: i32) -> AppResult<bool> {
        self.delete_by_id("clients", "Client", id).await
    }

    async fn list_drivers(&self, page: Page) -> AppResult<Vec<Driver>> {
        let drivers = sqlx::query_as::<_, Driver>(
            "SELECT * FROM drivers ORDER BY id OFFSET $1 LIMIT $2"
        )
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(drivers)
    }

    async fn find_driver(&self, id: i32) -> AppResult<Option<Driver>> {
        let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(driver)
    }

    async fn create_driver(&self, driver: NewDriver) -> AppResult<Driver> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers (name, phone, license_number)
            VALUES ($1, $2, $3)
            RETURNING *
            "#
        )
        .bind(driver.name)
        .bind(driver.phone)
        .bind(driver.license_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "driver"))?;

        Ok(driver)
    }

    async fn delete_driver(&self, id: i32) -> AppResult<bool> {
        self.delete_by_id("drivers", "Driver", id).await
    }

    async fn list_vehicles(&self, page: Page) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles ORDER BY id OFFSET $1 LIMIT $2"
        )
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    async fn find_vehicle(&self, id: i32) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    async fn create_vehicle(&self, vehicle: NewVehicle) -> AppResult<Vehicle> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (make, model, plate, capacity)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#
        )
        .bind(vehicle.make)
        .bind(vehicle.model)
        .bind(vehicle.plate)
        .bind(vehicle.capacity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "vehicle"))?;

        Ok(vehicle)
    }

    async fn delete_vehicle(&self, id: i32) -> AppResult<bool> {
        self.delete_by_id("vehicles", "Vehicle", id).await
    }

    async fn list_routes(&self, page: Page) -> AppResult<Vec<Route>> {
        let routes = sqlx::query_as::<_, Route>(
            "SELECT * FROM routes ORDER BY id OFFSET $1 LIMIT $2"
        )
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(routes)
    }

    async fn find_route(&self, id: i32) -> AppResult<Option<Route>> {
        let route = sqlx::query_as::<_, Route>("SELECT * FROM routes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(route)
    }

    async fn create_route(&self, route: NewRoute) -> AppResult<Route> {
        let route = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO routes (name, driver_id, vehicle_id, date)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#
        )
        .bind(route.name)
        .bind(route.driver_id)
        .bind(route.vehicle_id)
        .bind(route.date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "route"))?;

        Ok(route)
    }

    async fn delete_route(&self, id: i32) -> AppResult<bool> {
        self.delete_by_id("routes", "Route", id).await
    }

    async fn list_deliveries(&self, page: Page) -> AppResult<Vec<Delivery>> {
        let deliveries = sqlx::query_as::<_, Delivery>(
            "SELECT * FROM deliveries ORDER BY id OFFSET $1 LIMIT $2"
        )
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(deliveries)
    }

    async fn list_deliveries_for_route(&self, route_id: i32, page: Page) -> AppResult<Vec<Delivery>> {
        let deliveries = sqlx::query_as::<_, Delivery>(
            "SELECT * FROM deliveries WHERE route_id = $1 ORDER BY id OFFSET $2 LIMIT $3"
        )
        .bind(route_id)
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(deliveries)
    }

    async fn find_delivery(&self, id: i32) -> AppResult<Option<Delivery>> {
        let delivery = sqlx::query_as::<_, Delivery>("SELECT * FROM deliveries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(delivery)
    }

    async fn create_delivery(&self, delivery: NewDelivery) -> AppResult<Delivery> {
        let delivery = sqlx::query_as::<_, Delivery>(
            r#"
            INSERT INTO deliveries (route_id, client_id, status, delivery_date, delivery_time, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#
        )
        .bind(delivery.route_id)
        .bind(delivery.client_id)
        .bind(delivery.status)
        .bind(delivery.delivery_date)
        .bind(delivery.delivery_time)
        .bind(delivery.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "delivery"))?;

        Ok(delivery)
    }

    async fn delete_delivery(&self, id: i32) -> AppResult<bool> {
        self.delete_by_id("deliveries", "Delivery", id).await
    }

    async fn list_packages(&self, page: Page) -> AppResult<Vec<Package>> {
        let packages = sqlx::query_as::<_, Package>(
            "SELECT * FROM packages ORDER BY id OFFSET $1 LIMIT $2"
        )
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(packages)
    }

    async fn list_packages_for_delivery(&self, delivery_id: i32, page: Page) -> AppResult<Vec<Package>> {
        let packages = sqlx::query_as::<_, Package>(
            "SELECT * FROM packages WHERE delivery_id = $1 ORDER BY id OFFSET $2 LIMIT $3"
        )
        .bind(delivery_id)
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(packages)
    }

    async fn find_package(&self, id: i32) -> AppResult<Option<Package>> {
        let package = sqlx::query_as::<_, Package>("SELECT * FROM packages WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(package)
    }

    async fn create_package(&self, package: NewPackage) -> AppResult<Package> {
        let package = sqlx::query_as::<_, Package>(
            r#"
            INSERT INTO packages (delivery_id, description, weight, value)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#
        )
        .bind(package.delivery_id)
        .bind(package.description)
        .bind(package.weight)
        .bind(package.value)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "package"))?;

        Ok(package)
    }

    async fn delete_package(&self, id: i32) -> AppResult<bool> {
        self.delete_by_id("packages", "Package", id).await
    }

    async fn list_tracking_events(&self, page: Page) -> AppResult<Vec<TrackingEvent>> {
        let events = sqlx::query_as::<_, TrackingEvent>(
            "SELECT * FROM tracking_events ORDER BY id OFFSET $1 LIMIT $2"
        )
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    async fn list_tracking_events_for_delivery(
        &self,
        delivery_id: i32,
        page: Page,
    ) -> AppResult<Vec<TrackingEvent>> {
        let events = sqlx::query_as::<_, TrackingEvent>(
            "SELECT * FROM tracking_events WHERE delivery_id = $1 ORDER BY id OFFSET $2 LIMIT $3"
        )
        .bind(delivery_id)
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    async fn find_tracking_event(&self, id: i32) -> AppResult<Option<TrackingEvent>> {
        let event = sqlx::query_as::<_, TrackingEvent>("SELECT * FROM tracking_events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(event)
    }

    async fn create_tracking_event(&self, event: NewTrackingEvent) -> AppResult<TrackingEvent> {
        // recorded_at toma el DEFAULT NOW() de la tabla
        let event = sqlx::query_as::<_, TrackingEvent>(
            r#"
            INSERT INTO tracking_events (delivery_id, status, comment)
            VALUES ($1, $2, $3)
            RETURNING *
            "#
        )
        .bind(event.delivery_id)
        .bind(event.status)
        .bind(event.comment)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "tracking event"))?;

        Ok(event)
    }

    async fn delete_tracking_event(&self, id: i32) -> AppResult<bool> {
        self.delete_by_id("tracking_events", "TrackingEvent", id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_foreign_key_violations() {
        assert!(!is_foreign_key_violation(&sqlx::Error::RowNotFound));
        assert!(matches!(
            map_insert_error(sqlx::Error::RowNotFound, "client"),
            AppError::Database(_)
        ));
        assert!(matches!(
            map_delete_error(sqlx::Error::PoolTimedOut, "Client", 1),
            AppError::Database(_)
        ));
    }
}
