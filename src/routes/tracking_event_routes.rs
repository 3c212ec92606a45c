use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::tracking_event_controller::TrackingEventController;
use crate::dto::common_dto::{ApiResponse, MessageResponse, PaginationParams};
use crate::dto::tracking_event_dto::{CreateTrackingEventRequest, TrackingEventResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Los eventos no se editan: solo alta, consulta y borrado
pub fn create_tracking_event_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tracking_events).post(create_tracking_event))
        .route("/:id", get(get_tracking_event).delete(delete_tracking_event))
}

async fn create_tracking_event(
    State(state): State<AppState>,
    Json(request): Json<CreateTrackingEventRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TrackingEventResponse>>), AppError> {
    let controller = TrackingEventController::new(state.repository.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_tracking_events(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<TrackingEventResponse>>, AppError> {
    let controller = TrackingEventController::new(state.repository.clone());
    let response = controller.list(params.into_page()?).await?;
    Ok(Json(response))
}

async fn get_tracking_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TrackingEventResponse>, AppError> {
    let controller = TrackingEventController::new(state.repository.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn delete_tracking_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = TrackingEventController::new(state.repository.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
