use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::delivery_controller::DeliveryController;
use crate::dto::common_dto::{ApiResponse, MessageResponse, PaginationParams};
use crate::dto::delivery_dto::{CreateDeliveryRequest, DeliveryResponse};
use crate::dto::package_dto::PackageResponse;
use crate::dto::tracking_event_dto::TrackingEventResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_delivery_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_deliveries).post(create_delivery))
        .route("/:id", get(get_delivery).delete(delete_delivery))
        .route("/:id/packages", get(list_delivery_packages))
        .route("/:id/tracking", get(list_delivery_tracking))
}

async fn create_delivery(
    State(state): State<AppState>,
    Json(request): Json<CreateDeliveryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<DeliveryResponse>>), AppError> {
    let controller = DeliveryController::new(state.repository.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_deliveries(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<DeliveryResponse>>, AppError> {
    let controller = DeliveryController::new(state.repository.clone());
    let response = controller.list(params.into_page()?).await?;
    Ok(Json(response))
}

async fn get_delivery(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeliveryResponse>, AppError> {
    let controller = DeliveryController::new(state.repository.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn delete_delivery(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = DeliveryController::new(state.repository.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}

async fn list_delivery_packages(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<PackageResponse>>, AppError> {
    let controller = DeliveryController::new(state.repository.clone());
    let response = controller.list_packages(id, params.into_page()?).await?;
    Ok(Json(response))
}

async fn list_delivery_tracking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<TrackingEventResponse>>, AppError> {
    let controller = DeliveryController::new(state.repository.clone());
    let response = controller.list_tracking(id, params.into_page()?).await?;
    Ok(Json(response))
}
