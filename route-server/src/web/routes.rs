//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{debug, error};

use crate::catalog::RouteCatalog;
use crate::graph::RouteGraph;
use crate::planner::{PlanError, PlanOutcome, RoutePlanner};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/journey/plan", post(plan_journey))
        .route("/catalog/reload", post(reload_catalog))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan a journey between two named stations.
async fn plan_journey(
    State(state): State<AppState>,
    Json(req): Json<PlanJourneyRequest>,
) -> Result<Json<PlanJourneyResponse>, AppError> {
    let graph = state.graph.current();
    let planner = RoutePlanner::new(&graph, &state.config);

    match planner.plan(&req.origin, &req.destination)? {
        PlanOutcome::Route(itinerary) => Ok(Json(PlanJourneyResponse::from_itinerary(&itinerary))),
        PlanOutcome::NoRoute => Ok(Json(PlanJourneyResponse::no_route())),
    }
}

/// Reload the catalog and swap in a freshly built graph.
///
/// On failure the current graph stays in place and the error is returned.
async fn reload_catalog(State(state): State<AppState>) -> Result<Json<ReloadResponse>, AppError> {
    let catalog =
        RouteCatalog::from_path(state.catalog_path.as_ref()).map_err(|e| AppError::Internal {
            message: format!("catalog reload failed: {e}"),
        })?;
    let graph = RouteGraph::build(&catalog, &state.terminals);
    let response = ReloadResponse {
        routes: catalog.len(),
        stations: graph.station_count(),
    };

    state.graph.replace(graph);
    debug!(
        routes = response.routes,
        stations = response.stations,
        "catalog reloaded"
    );

    Ok(Json(response))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(status = %status, message = %message, "request failed");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
