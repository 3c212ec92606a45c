use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::package_controller::PackageController;
use crate::dto::common_dto::{ApiResponse, MessageResponse, PaginationParams};
use crate::dto::package_dto::{CreatePackageRequest, PackageResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_package_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_packages).post(create_package))
        .route("/:id", get(get_package).delete(delete_package))
}

async fn create_package(
    State(state): State<AppState>,
    Json(request): Json<CreatePackageRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PackageResponse>>), AppError> {
    let controller = PackageController::new(state.repository.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_packages(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<PackageResponse>>, AppError> {
    let controller = PackageController::new(state.repository.clone());
    let response = controller.list(params.into_page()?).await?;
    Ok(Json(response))
}

async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PackageResponse>, AppError> {
    let controller = PackageController::new(state.repository.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn delete_package(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = PackageController::new(state.repository.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
