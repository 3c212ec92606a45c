//! Utilidades compartidas por los tests de integración
//!
//! Levanta el router completo sobre el repositorio en memoria y lo invoca
//! con `oneshot`, sin servidor ni base de datos.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use delivery_logistics::config::EnvironmentConfig;
use delivery_logistics::repositories::MemoryLogisticsRepository;
use delivery_logistics::routes::create_app_router;
use delivery_logistics::state::AppState;

pub struct TestApp {
    router: Router,
}

pub struct TestResponse {
    status: StatusCode,
    body: Value,
}

impl TestResponse {
    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    pub fn json(&self) -> Value {
        self.body.clone()
    }
}

pub fn create_test_app() -> TestApp {
    create_test_app_with_config(EnvironmentConfig::default())
}

pub fn create_test_app_with_config(config: EnvironmentConfig) -> TestApp {
    let repository = Arc::new(MemoryLogisticsRepository::new());
    TestApp {
        router: create_app_router(AppState::new(repository, config)),
    }
}

impl TestApp {
    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        self.send(Method::DELETE, path, None).await
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        // Los rechazos de axum devuelven texto plano
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// POST que debe devolver 201; retorna el id creado
    pub async fn create(&self, path: &str, body: Value) -> i64 {
        let response = self.post(path, body).await;
        assert_eq!(response.status_code(), StatusCode::CREATED, "POST {} failed: {}", path, response.json());
        response.json()["data"]["id"].as_i64().unwrap()
    }

    pub async fn create_client(&self, name: &str, latitude: Option<f64>, longitude: Option<f64>) -> i64 {
        self.create(
            "/api/clients",
            json!({
                "name": name,
                "address": format!("Calle {}", name),
                "latitude": latitude,
                "longitude": longitude,
            }),
        )
        .await
    }

    pub async fn create_driver(&self, name: &str) -> i64 {
        self.create("/api/drivers", json!({ "name": name, "license_number": "GTO-123456" }))
            .await
    }

    pub async fn create_vehicle(&self, plate: &str) -> i64 {
        self.create(
            "/api/vehicles",
            json!({ "make": "Nissan", "model": "NV350", "plate": plate, "capacity": 1500 }),
        )
        .await
    }

    pub async fn create_route(&self, driver_id: i64, vehicle_id: i64) -> i64 {
        self.create(
            "/api/routes",
            json!({
                "name": "Ruta Centro",
                "driver_id": driver_id,
                "vehicle_id": vehicle_id,
                "date": "2025-03-14",
            }),
        )
        .await
    }

    pub async fn create_delivery(&self, route_id: i64, client_id: i64) -> i64 {
        self.create(
            "/api/deliveries",
            json!({
                "route_id": route_id,
                "client_id": client_id,
                "delivery_date": "2025-03-14",
                "delivery_time": "10:30:00",
            }),
        )
        .await
    }
}
