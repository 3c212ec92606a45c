use std::sync::Arc;

use crate::dto::route_optimization_dto::{OptimizeRouteRequest, RouteStopResponse};
use crate::repositories::LogisticsRepository;
use crate::services::{OperationsBase, RouteOptimizationService};
use crate::utils::errors::AppResult;

pub struct RouteOptimizationController {
    service: RouteOptimizationService,
}

impl RouteOptimizationController {
    pub fn new(repository: Arc<dyn LogisticsRepository>, base: OperationsBase) -> Self {
        Self {
            service: RouteOptimizationService::new(repository, base),
        }
    }

    pub async fn optimize(&self, request: OptimizeRouteRequest) -> AppResult<Vec<RouteStopResponse>> {
        let stops = self.service.optimize(&request.client_ids).await?;
        Ok(stops.into_iter().map(RouteStopResponse::from).collect())
    }
}
