//! Explore endpoints: query updates in, result batches out over SSE
//!
//! The Explore page forwards every input change to the query endpoint;
//! debouncing, supersession, and the external lookups all live in the
//! flow. Resolved batches stream back on the event channel.

use crate::AppState;
use archai_common::events::ArchaiEvent;
use axum::{
    extract::State,
    http::StatusCode,
    response::sse::{Event, Sse},
    routing::{get, post},
    Json, Router,
};
use futures::stream::Stream;
use serde::Deserialize;
use std::convert::Infallible;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Query update from the page; raw text, trimmed by the flow
#[derive(Debug, Deserialize)]
pub struct QueryUpdate {
    pub query: String,
}

/// POST /api/explore/query
///
/// Applies one query update. Returns immediately; results arrive on the
/// event stream once the debounced batch resolves.
pub async fn update_query(
    State(state): State<AppState>,
    Json(update): Json<QueryUpdate>,
) -> StatusCode {
    state.explore.clone().set_query(&update.query);
    StatusCode::ACCEPTED
}

/// GET /api/explore/events - SSE event stream for Explore results
///
/// Streams events:
/// - ExploreSearchStarted
/// - ExploreResultsReady
/// - ExploreSearchFailed
/// - ExploreCleared
pub async fn explore_event_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    info!("New SSE client connected to explore events");

    let mut rx = state.event_bus.subscribe();

    let stream = async_stream::stream! {
        loop {
            tokio::select! {
                // Heartbeat every 15 seconds
                _ = tokio::time::sleep(Duration::from_secs(15)) => {
                    debug!("SSE: Sending heartbeat");
                    yield Ok(Event::default().comment("heartbeat"));
                }

                // Broadcast events
                Ok(event) = rx.recv() => {
                    match &event {
                        ArchaiEvent::ExploreSearchStarted { .. }
                        | ArchaiEvent::ExploreResultsReady { .. }
                        | ArchaiEvent::ExploreSearchFailed { .. }
                        | ArchaiEvent::ExploreCleared { .. } => {
                            let event_type = event.event_type();

                            match serde_json::to_string(&event) {
                                Ok(event_json) => {
                                    yield Ok(Event::default()
                                        .event(event_type)
                                        .data(event_json));
                                }
                                Err(e) => {
                                    warn!("SSE: Failed to serialize event {}: {}", event_type, e);
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("heartbeat"),
    )
}

/// Build explore routes
pub fn explore_routes() -> Router<AppState> {
    Router::new()
        .route("/api/explore/query", post(update_query))
        .route("/api/explore/events", get(explore_event_stream))
}
