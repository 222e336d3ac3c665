//! HTTP API Layer
//!
//! This crate provides the web surface for the claims service using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for claims, the lecturer directory, and
//!   manager review
//! - **DTOs**: Request/Response data transfer objects
//! - **Uploads**: Proof-file persistence under the web root
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, config::ApiConfig};
//! use infra_store::MemoryStore;
//! use std::sync::Arc;
//!
//! let app = create_router(Arc::new(MemoryStore::new()), ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod uploads;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{claims, health, home, lecturers, manager};
use crate::uploads::UploadStore;
use domain_claims::MAX_PROOF_BYTES;
use infra_store::MemoryStore;

/// Request body cap; sits above [`MAX_PROOF_BYTES`] so oversized proof
/// files reach the validation path and fail with a field message instead
/// of a transport error
const MAX_REQUEST_BYTES: usize = MAX_PROOF_BYTES as usize + 1024 * 1024;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
    pub uploads: UploadStore,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `store` - The shared in-memory registry
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(store: Arc<MemoryStore>, config: ApiConfig) -> Router {
    let uploads = UploadStore::new(&config.uploads_root);
    let state = AppState {
        store,
        uploads,
        config,
    };

    // Claims routes
    let claims_routes = Router::new()
        .route("/", get(claims::list_claims).post(claims::submit_claim))
        .route(
            "/:id",
            get(claims::get_claim)
                .put(claims::update_claim)
                .delete(claims::delete_claim),
        )
        .route("/:id/file", get(claims::download_proof));

    // Lecturer directory routes
    let lecturer_routes = Router::new()
        .route(
            "/",
            get(lecturers::list_lecturers).post(lecturers::create_lecturer),
        )
        .route(
            "/:id",
            get(lecturers::get_lecturer)
                .put(lecturers::update_lecturer)
                .delete(lecturers::delete_lecturer),
        );

    // Manager review routes
    let manager_routes = Router::new()
        .route("/claims", get(manager::list_pending))
        .route("/claims/:id", get(manager::review_claim))
        .route("/claims/:id/approve", post(manager::approve_claim))
        .route("/claims/:id/reject", post(manager::reject_claim));

    // Combine all routes
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health_check))
        .nest("/claims", claims_routes)
        .nest("/lecturers", lecturer_routes)
        .nest("/manager", manager_routes)
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
