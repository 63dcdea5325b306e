//! Event types for the ArchAI event system
//!
//! Provides the shared event definitions and EventBus used to push Explore
//! flow results to connected pages over SSE.

use crate::api::types::SiteSearchResult;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// ArchAI event types
///
/// Events are broadcast via EventBus and serialized for SSE transmission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArchaiEvent {
    /// A debounced Explore search was issued
    ExploreSearchStarted {
        /// Trimmed query text
        query: String,
        /// Sequence number of the issued search
        seq: u64,
        /// When the search was issued
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// An Explore search batch (search plus all thumbnail lookups) resolved
    ///
    /// Replaces any previously displayed result set wholesale.
    ExploreResultsReady {
        /// Query the batch was issued for
        query: String,
        /// Sequence number of the issued search
        seq: u64,
        /// Merged results, in external search ranking order
        sites: Vec<SiteSearchResult>,
        /// When the batch resolved
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// The primary Explore search failed; pages show the no-results state
    ExploreSearchFailed {
        /// Query the failed search was issued for
        query: String,
        /// Sequence number of the issued search
        seq: u64,
        /// When the failure was observed
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// The query was cleared; pages drop results and reset the searched flag
    ExploreCleared {
        /// When the clear happened
        timestamp: chrono::DateTime<chrono::Utc>,
    },
}

impl ArchaiEvent {
    /// Event type name, used as the SSE event field
    pub fn event_type(&self) -> &'static str {
        match self {
            ArchaiEvent::ExploreSearchStarted { .. } => "ExploreSearchStarted",
            ArchaiEvent::ExploreResultsReady { .. } => "ExploreResultsReady",
            ArchaiEvent::ExploreSearchFailed { .. } => "ExploreSearchFailed",
            ArchaiEvent::ExploreCleared { .. } => "ExploreCleared",
        }
    }
}

/// Broadcast bus carrying ArchaiEvents to all SSE subscribers
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<ArchaiEvent>,
    capacity: usize,
}

impl EventBus {
    /// Creates a new EventBus with the given channel capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx, capacity }
    }

    /// Subscribe to all future events
    ///
    /// Events emitted before subscription are not received.
    pub fn subscribe(&self) -> broadcast::Receiver<ArchaiEvent> {
        self.tx.subscribe()
    }

    /// Emit an event, ignoring whether anyone is listening
    ///
    /// Flow events are non-critical: a page that is not connected simply
    /// misses the update and re-queries on its next interaction.
    pub fn emit_lossy(&self, event: ArchaiEvent) {
        if let Err(e) = self.tx.send(event) {
            tracing::debug!("No subscribers for event: {}", e.0.event_type());
        }
    }

    /// Current number of subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Configured channel capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
