mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::create_test_app;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = app.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "delivery_logistics");
}

#[tokio::test]
async fn test_create_and_get_client() {
    let app = create_test_app();
    let response = app
        .post(
            "/api/clients",
            json!({
                "name": "Farmacia San Juan",
                "address": "Av. Insurgentes 45",
                "phone": "4621112233",
                "email": "compras@sanjuan.mx",
                "latitude": 20.6767,
                "longitude": -101.3563
            }),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Cliente creado exitosamente");
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["latitude"], 20.6767);

    let response = app.get("/api/clients/1").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let client = response.json();
    assert_eq!(client["name"], "Farmacia San Juan");
    assert_eq!(client["longitude"], -101.3563);

    let list = app.get("/api/clients").await.json();
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let app = create_test_app();

    for path in [
        "/api/clients/42",
        "/api/drivers/42",
        "/api/vehicles/42",
        "/api/routes/42",
        "/api/deliveries/42",
        "/api/packages/42",
        "/api/tracking-events/42",
        "/api/routes/42/deliveries",
        "/api/deliveries/42/packages",
        "/api/deliveries/42/tracking",
    ] {
        let response = app.get(path).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "GET {}", path);
        assert_eq!(response.json()["code"], "NOT_FOUND");
    }

    let response = app.delete("/api/clients/42").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pagination_window() {
    let app = create_test_app();
    for i in 1..=5 {
        app.create_driver(&format!("Conductor {}", i)).await;
    }

    let page = app.get("/api/drivers?skip=1&limit=2").await.json();
    let ids: Vec<i64> = page
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 3]);

    // `offset` es alias de `skip`
    let page = app.get("/api/drivers?offset=4").await.json();
    assert_eq!(page.as_array().unwrap().len(), 1);
    assert_eq!(page[0]["name"], "Conductor 5");

    let empty = app.get("/api/drivers?limit=0").await.json();
    assert!(empty.as_array().unwrap().is_empty());

    let past_end = app.get("/api/drivers?skip=10").await;
    assert_eq!(past_end.status_code(), StatusCode::OK);
    assert!(past_end.json().as_array().unwrap().is_empty());

    let negative = app.get("/api/drivers?skip=-1").await;
    assert_eq!(negative.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(negative.json()["code"], "BAD_REQUEST");
    let negative = app.get("/api/drivers?limit=-5").await;
    assert_eq!(negative.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_validation_errors() {
    let app = create_test_app();

    let response = app
        .post("/api/clients", json!({ "name": "Norte", "latitude": 95.0, "longitude": -101.0 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "VALIDATION_ERROR");

    let response = app
        .post(
            "/api/vehicles",
            json!({ "make": "Ford", "model": "Transit", "plate": "GT-1", "capacity": -10 }),
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = app.post("/api/drivers", json!({ "name": "   " })).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    // Nada se guardó
    let drivers = app.get("/api/drivers").await.json();
    assert!(drivers.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_parent_is_unprocessable() {
    let app = create_test_app();
    let vehicle_id = app.create_vehicle("GT-5521").await;

    let response = app
        .post(
            "/api/routes",
            json!({ "name": "Ruta Sur", "driver_id": 99, "vehicle_id": vehicle_id, "date": "2025-03-14" }),
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json()["code"], "UNPROCESSABLE_ENTITY");

    let response = app
        .post("/api/packages", json!({ "delivery_id": 7, "weight": 1.5 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_delete_is_restricted_while_referenced() {
    let app = create_test_app();
    let driver_id = app.create_driver("Pedro").await;
    let vehicle_id = app.create_vehicle("GT-0001").await;
    let route_id = app.create_route(driver_id, vehicle_id).await;

    let response = app.delete(&format!("/api/drivers/{}", driver_id)).await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    assert_eq!(response.json()["code"], "CONFLICT");

    let response = app.delete(&format!("/api/routes/{}", route_id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({ "success": true, "message": "Ruta eliminada exitosamente" })
    );

    let response = app.delete(&format!("/api/drivers/{}", driver_id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app.get(&format!("/api/drivers/{}", driver_id)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delivery_lifecycle() {
    let app = create_test_app();
    let client_id = app.create_client("Tienda Lupita", Some(21.0), Some(-101.0)).await;
    let driver_id = app.create_driver("Ana").await;
    let vehicle_id = app.create_vehicle("GT-2024").await;
    let route_id = app.create_route(driver_id, vehicle_id).await;

    let response = app
        .post(
            "/api/deliveries",
            json!({
                "route_id": route_id,
                "client_id": client_id,
                "delivery_date": "2025-03-14",
                "delivery_time": "09:05:00",
                "notes": "Tocar timbre"
            }),
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let delivery = response.json()["data"].clone();
    assert_eq!(delivery["status"], "pending");
    assert_eq!(delivery["delivery_date"], "2025-03-14");
    assert_eq!(delivery["delivery_time"], "09:05:00");
    let delivery_id = delivery["id"].as_i64().unwrap();

    let package = app
        .post(
            "/api/packages",
            json!({ "delivery_id": delivery_id, "description": "Medicamentos", "weight": 2.346, "value": 899.9 }),
        )
        .await;
    assert_eq!(package.status_code(), StatusCode::CREATED);
    assert_eq!(package.json()["data"]["weight"], 2.35);
    assert_eq!(package.json()["data"]["value"], 899.9);

    for status in ["en_route", "delivered"] {
        let event = app
            .post(
                "/api/tracking-events",
                json!({ "delivery_id": delivery_id, "status": status, "comment": null }),
            )
            .await;
        assert_eq!(event.status_code(), StatusCode::CREATED);
        assert!(event.json()["data"]["recorded_at"].as_str().is_some());
    }

    let route_deliveries = app.get(&format!("/api/routes/{}/deliveries", route_id)).await;
    assert_eq!(route_deliveries.status_code(), StatusCode::OK);
    assert_eq!(route_deliveries.json().as_array().unwrap().len(), 1);

    let packages = app.get(&format!("/api/deliveries/{}/packages", delivery_id)).await.json();
    assert_eq!(packages[0]["description"], "Medicamentos");

    let tracking = app.get(&format!("/api/deliveries/{}/tracking?limit=1", delivery_id)).await.json();
    assert_eq!(tracking.as_array().unwrap().len(), 1);
    assert_eq!(tracking[0]["status"], "en_route");

    // La entrega tiene paquetes y eventos: no se puede borrar
    let response = app.delete(&format!("/api/deliveries/{}", delivery_id)).await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);

    let response = app.delete(&format!("/api/clients/{}", client_id)).await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_unknown_delivery_status_is_rejected() {
    let app = create_test_app();
    let client_id = app.create_client("X", None, None).await;
    let driver_id = app.create_driver("Luis").await;
    let vehicle_id = app.create_vehicle("GT-7").await;
    let route_id = app.create_route(driver_id, vehicle_id).await;
    let delivery_id = app.create_delivery(route_id, client_id).await;

    let response = app
        .post(
            "/api/tracking-events",
            json!({ "delivery_id": delivery_id, "status": "lost" }),
        )
        .await;
    assert!(response.status_code().is_client_error());

    let events = app.get("/api/tracking-events").await.json();
    assert!(events.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_package_amounts_must_fit_numeric_column() {
    let app = create_test_app();
    let client_id = app.create_client("Bodega", None, None).await;
    let driver_id = app.create_driver("Rosa").await;
    let vehicle_id = app.create_vehicle("GT-9090").await;
    let route_id = app.create_route(driver_id, vehicle_id).await;
    let delivery_id = app.create_delivery(route_id, client_id).await;

    let response = app
        .post(
            "/api/packages",
            json!({ "delivery_id": delivery_id, "weight": 1.0e12, "value": 5.0e15 }),
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "VALIDATION_ERROR");

    let response = app
        .post(
            "/api/packages",
            json!({ "delivery_id": delivery_id, "weight": 99999999.99 }),
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json()["data"]["weight"], 99999999.99);

    let packages = app.get("/api/packages").await.json();
    assert_eq!(packages.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_vehicle_fields_are_trimmed_not_rewritten() {
    let app = create_test_app();
    let response = app
        .post(
            "/api/vehicles",
            json!({ "make": " Ford ", "model": "Transit ", "plate": " gt-5521 ", "capacity": 900 }),
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let vehicle = response.json()["data"].clone();
    assert_eq!(vehicle["make"], "Ford");
    assert_eq!(vehicle["model"], "Transit");
    assert_eq!(vehicle["plate"], "gt-5521");
}
