use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::route_controller::RouteController;
use crate::dto::common_dto::{ApiResponse, MessageResponse, PaginationParams};
use crate::dto::delivery_dto::DeliveryResponse;
use crate::dto::route_dto::{CreateRouteRequest, RouteResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_route_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_routes).post(create_route))
        .route("/:id", get(get_route).delete(delete_route))
        .route("/:id/deliveries", get(list_route_deliveries))
}

async fn create_route(
    State(state): State<AppState>,
    Json(request): Json<CreateRouteRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RouteResponse>>), AppError> {
    let controller = RouteController::new(state.repository.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_routes(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<RouteResponse>>, AppError> {
    let controller = RouteController::new(state.repository.clone());
    let response = controller.list(params.into_page()?).await?;
    Ok(Json(response))
}

async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RouteResponse>, AppError> {
    let controller = RouteController::new(state.repository.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn delete_route(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = RouteController::new(state.repository.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}

// Entregas de la ruta, paginadas como cualquier listado
async fn list_route_deliveries(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<DeliveryResponse>>, AppError> {
    let controller = RouteController::new(state.repository.clone());
    let response = controller.list_deliveries(id, params.into_page()?).await?;
    Ok(Json(response))
}
