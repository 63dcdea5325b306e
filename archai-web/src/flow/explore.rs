//! Explore flow: debounced site search with thumbnail enrichment
//!
//! Keystrokes arrive as query updates. Each update re-arms a 350 ms
//! debounce; only the most recent survives. The issued search takes a
//! sequence ticket, runs the primary text search, fans out the per-hit
//! thumbnail lookups concurrently, and publishes the merged batch over
//! the event bus in one piece. A completion whose ticket is no longer
//! current is discarded, so stale responses never overwrite newer state.

use crate::clients::{SearchHit, SiteSearch};
use crate::flow::debounce::Debouncer;
use crate::flow::fallback::fallback_image;
use crate::flow::latest::LatestGate;
use archai_common::api::types::SiteSearchResult;
use archai_common::events::{ArchaiEvent, EventBus};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Quiet period between the last keystroke and the issued search
pub const QUIET_PERIOD: Duration = Duration::from_millis(350);

/// Cap on primary search hits per query
pub const SEARCH_RESULT_LIMIT: u32 = 2;

/// Explore flow state
pub struct ExploreFlow {
    search: Arc<dyn SiteSearch>,
    events: EventBus,
    gate: LatestGate,
    debounce: Debouncer,
}

impl ExploreFlow {
    pub fn new(search: Arc<dyn SiteSearch>, events: EventBus) -> Arc<Self> {
        Self::with_quiet_period(search, events, QUIET_PERIOD)
    }

    /// Flow with a custom quiet period (tests shorten it)
    pub fn with_quiet_period(
        search: Arc<dyn SiteSearch>,
        events: EventBus,
        quiet_period: Duration,
    ) -> Arc<Self> {
        Arc::new(Self {
            search,
            events,
            gate: LatestGate::new(),
            debounce: Debouncer::new(quiet_period),
        })
    }

    /// Apply a query update from the page
    ///
    /// An empty or whitespace-only query cancels any pending timer,
    /// supersedes anything in flight, and clears the displayed results
    /// without issuing a request. A non-empty query re-arms the debounce.
    pub fn set_query(self: Arc<Self>, raw: &str) {
        let query = raw.trim().to_string();

        if query.is_empty() {
            self.debounce.cancel();
            self.gate.invalidate();
            self.events.emit_lossy(ArchaiEvent::ExploreCleared {
                timestamp: Utc::now(),
            });
            return;
        }

        let flow = Arc::clone(&self);
        self.debounce.schedule(async move {
            flow.run_search(query).await;
        });
    }

    /// Run one issued search to completion
    async fn run_search(&self, query: String) {
        let ticket = self.gate.issue();

        self.events.emit_lossy(ArchaiEvent::ExploreSearchStarted {
            query: query.clone(),
            seq: ticket.seq(),
            timestamp: Utc::now(),
        });

        let hits = match self.search.search(&query, SEARCH_RESULT_LIMIT).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!(query = %query, error = %e, "Site search failed");
                if self.gate.is_current(&ticket) {
                    self.events.emit_lossy(ArchaiEvent::ExploreSearchFailed {
                        query,
                        seq: ticket.seq(),
                        timestamp: Utc::now(),
                    });
                }
                return;
            }
        };

        // All thumbnail lookups run concurrently; the batch publishes only
        // once every one of them has resolved.
        let lookups = hits.iter().map(|hit| {
            let search = Arc::clone(&self.search);
            let title = hit.title.clone();
            async move { search.thumbnail(&title).await }
        });
        let thumbnails = futures::future::join_all(lookups).await;

        let sites: Vec<SiteSearchResult> = hits
            .into_iter()
            .zip(thumbnails)
            .enumerate()
            .map(|(index, (hit, thumbnail))| merge_result(index, hit, thumbnail))
            .collect();

        if !self.gate.is_current(&ticket) {
            debug!(query = %query, seq = ticket.seq(), "Discarding stale search results");
            return;
        }

        self.events.emit_lossy(ArchaiEvent::ExploreResultsReady {
            query,
            seq: ticket.seq(),
            sites,
            timestamp: Utc::now(),
        });
    }
}

/// Merge a primary hit and its thumbnail lookup into one display result
///
/// A failed or empty lookup degrades to the deterministic fallback image
/// and never fails the batch.
fn merge_result(
    index: usize,
    hit: SearchHit,
    thumbnail: Result<Option<String>, crate::clients::WikiError>,
) -> SiteSearchResult {
    let image = match thumbnail {
        Ok(Some(url)) => url,
        Ok(None) => fallback_image(&hit.title).to_string(),
        Err(e) => {
            debug!(title = %hit.title, error = %e, "Thumbnail lookup failed, using fallback");
            fallback_image(&hit.title).to_string()
        }
    };

    SiteSearchResult {
        id: format!("result-{}", index),
        name: hit.title.clone(),
        description: strip_html(&hit.snippet),
        link: article_link(&hit.title),
        image,
    }
}

/// Remove embedded HTML tags from a search snippet
fn strip_html(snippet: &str) -> String {
    let mut out = String::with_capacity(snippet.len());
    let mut in_tag = false;

    for c in snippet.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }

    out
}

/// Article URL for a title, spaces replaced with underscores
fn article_link(title: &str) -> String {
    let slug = title.split_whitespace().collect::<Vec<_>>().join("_");
    format!("https://en.wikipedia.org/wiki/{}", slug)
}
