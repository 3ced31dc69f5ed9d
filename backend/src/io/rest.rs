//! REST handlers for the sync pairing service.
//!
//! Three endpoints: store a payload (`POST /sync`), redeem a code
//! (`GET /sync/:code`), and a health probe (`GET /health`). Error bodies
//! are always `{ "error": "<message>" }` with the kind carried by the
//! status code.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use tracing::{info, warn};

use crate::domain::SyncError;
use crate::AppState;
use shared::{
    ErrorResponse, HealthResponse, RetrieveSyncResponse, StoreSyncRequest, StoreSyncResponse,
};

/// Create a router for the sync endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sync", post(store_sync))
        .route("/sync/:code", get(retrieve_sync))
        .route("/health", get(health))
}

/// Store a payload; a `code` field in the request selects the
/// caller-supplied variant, otherwise the server generates one.
async fn store_sync(
    State(state): State<AppState>,
    Json(request): Json<StoreSyncRequest>,
) -> impl IntoResponse {
    info!("POST /sync");

    let now = Utc::now();
    let result = match request.code.as_deref() {
        Some(code) => state.sync_store.store_with_code(code, request.data, now),
        None => state.sync_store.store(request.data, now),
    };

    match result {
        Ok(receipt) => {
            info!("stored sync payload under code {}", receipt.code);
            let response = StoreSyncResponse {
                code: receipt.code,
                expires_at: receipt.expires_at.timestamp_millis(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(error) => {
            warn!("rejected sync store: {}", error);
            error_response(error)
        }
    }
}

/// Redeem a code for its stored payload
async fn retrieve_sync(State(state): State<AppState>, Path(code): Path<String>) -> impl IntoResponse {
    info!("GET /sync/{}", code);

    match state.sync_store.retrieve(&code, Utc::now()) {
        Ok(data) => (StatusCode::OK, Json(RetrieveSyncResponse { data })).into_response(),
        Err(error) => {
            warn!("sync retrieval failed for code {}: {}", code, error);
            error_response(error)
        }
    }
}

/// Liveness probe
async fn health() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

fn error_response(error: SyncError) -> Response {
    let status = match error {
        SyncError::InvalidCode | SyncError::MissingPayload => StatusCode::BAD_REQUEST,
        SyncError::CodeConflict => StatusCode::CONFLICT,
        SyncError::NotFound => StatusCode::NOT_FOUND,
        SyncError::Expired => StatusCode::GONE,
        SyncError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse { error: error.to_string() })).into_response()
}
