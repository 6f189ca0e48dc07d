//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{Method, StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::index::load_stations;
use crate::search::SearchError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(find_stations))
        .route("/setup", post(setup))
        .layer(build_cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Find the stations nearest a postal code.
async fn find_stations(
    State(state): State<AppState>,
    Query(query): Query<StationsQuery>,
) -> Result<Json<SearchResponseDto>, AppError> {
    let response = state
        .coordinator
        .handle(
            query.zip.as_deref(),
            query.radius.as_deref(),
            query.radius_units.as_deref(),
        )
        .await?;

    info!(
        zip = %response.origin.zip,
        results = response.stations.len(),
        "station search complete"
    );

    Ok(Json(SearchResponseDto::from_response(response)))
}

/// Reload the dataset and load it into the index and record store.
async fn setup(State(state): State<AppState>) -> Result<Json<SetupResponse>, AppError> {
    let stations = state
        .dataset
        .refresh()
        .await
        .map_err(|e| SearchError::upstream("station dataset", e))?;

    let summary = load_stations(&stations, &state.index, &state.store).await;

    Ok(Json(SetupResponse::from_summary(summary)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
    Timeout { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        let message = e.to_string();
        match e {
            SearchError::Timeout => AppError::Timeout { message },
            _ if e.is_client_error() => AppError::BadRequest { message },
            _ => AppError::Internal { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
            AppError::Timeout { message } => (StatusCode::GATEWAY_TIMEOUT, message),
        };

        if status.is_server_error() {
            error!(status = status.as_u16(), %message, "request failed");
        } else {
            warn!(status = status.as_u16(), %message, "request rejected");
        }

        (status, Json(ErrorResponse { message })).into_response()
    }
}
