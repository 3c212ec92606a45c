use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::route_optimization_controller::RouteOptimizationController;
use crate::dto::route_optimization_dto::{OptimizeRouteRequest, RouteStopResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_route_optimization_router() -> Router<AppState> {
    Router::new().route("/optimize-route", post(optimize_route))
}

/// Ordena los clientes indicados partiendo de la base de operaciones
async fn optimize_route(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRouteRequest>,
) -> Result<Json<Vec<RouteStopResponse>>, AppError> {
    let controller = RouteOptimizationController::new(
        state.repository.clone(),
        state.config.operations_base(),
    );
    let response = controller.optimize(request).await?;
    Ok(Json(response))
}
