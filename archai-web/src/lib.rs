//! archai-web library interface
//!
//! Exposes the router and application state for integration testing.

pub mod api;
pub mod catalog;
pub mod clients;
pub mod error;
pub mod flow;

pub use crate::error::{ApiError, ApiResult};

use crate::clients::{InferenceClient, SiteSearch};
use crate::flow::{ExploreFlow, UploadFlow};
use archai_common::events::EventBus;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Upper bound on an uploaded batch; image batches exceed axum's 2 MiB default
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Event bus for SSE broadcasting
    pub event_bus: EventBus,
    /// Upload flow (per-category busy flags + inference client)
    pub upload: Arc<UploadFlow>,
    /// Explore flow (debounce + sequence gate + search client)
    pub explore: Arc<ExploreFlow>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(inference: Arc<InferenceClient>, search: Arc<dyn SiteSearch>) -> Self {
        let event_bus = EventBus::new(100);

        Self {
            upload: Arc::new(UploadFlow::new(inference)),
            explore: ExploreFlow::new(search, event_bus.clone()),
            event_bus,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // UI routes (HTML pages + static assets)
        .merge(api::ui_routes())
        // API routes
        .merge(api::analyze_routes())
        .merge(api::explore_routes())
        .merge(api::sites_routes())
        .merge(api::health_routes())
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
