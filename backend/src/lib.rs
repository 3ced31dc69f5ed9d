//! # Wealth Tracker Backend
//!
//! Non-UI core of the wealth tracker: the income ledger with its derived
//! statistics and last-month comparison, JSON snapshot persistence, and
//! the ephemeral 4-digit-code sync service exposed over HTTP.
//!
//! The crate is UI-agnostic; a web page, a desktop shell, or a CLI can
//! embed the ledger core directly and talk to the sync service over REST.
//!
//! ## Architecture
//!
//! ```text
//! Clients (web UI, CLI)
//!     ↓
//! IO Layer (REST handlers)
//!     ↓
//! Domain Layer (ledger, statistics, comparison, sync store)
//!     ↓
//! Storage Layer (JSON snapshots)
//! ```
//!
//! ## Key Responsibilities
//!
//! - Initialize and share the application state
//! - Set up the REST router with CORS and request tracing
//! - Keep a clean separation between domain logic and transport

pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use axum::http::Method;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::domain::SyncStore;

pub use domain::*;
pub use storage::*;

/// Main application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub sync_store: Arc<SyncStore>,
}

/// Initialize the backend with all required services
pub fn initialize_backend() -> AppState {
    info!("Setting up sync store");
    AppState {
        sync_store: Arc::new(SyncStore::new()),
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // Sync clients are static pages served from anywhere, so CORS stays open
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    io::rest::router()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
