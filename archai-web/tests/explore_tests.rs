//! Explore flow integration tests
//!
//! Covers the debounced search pipeline end to end: quiet-period
//! supersession, clear-on-empty, concurrent thumbnail enrichment with
//! deterministic fallback, stale-response discard, and the Wikipedia
//! client's request/response handling against a mock endpoint.

use async_trait::async_trait;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use archai_common::events::{ArchaiEvent, EventBus};
use archai_web::clients::{SearchHit, SiteSearch, WikiClient, WikiError};
use archai_web::flow::fallback::fallback_image;
use archai_web::flow::ExploreFlow;

/// Quiet period short enough to keep tests fast
const TEST_QUIET: Duration = Duration::from_millis(80);

/// Configurable stand-in for the search collaborator
#[derive(Default)]
struct StubSearch {
    calls: Mutex<Vec<String>>,
    hits: Vec<SearchHit>,
    fail_search: bool,
    fail_thumbnail: bool,
    thumbnail: Option<String>,
    /// Per-query artificial latency
    delays: HashMap<String, Duration>,
}

impl StubSearch {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

fn hit(title: &str) -> SearchHit {
    SearchHit {
        title: title.to_string(),
        snippet: format!("<span class=\"searchmatch\">{}</span> ruins", title),
    }
}

#[async_trait]
impl SiteSearch for StubSearch {
    async fn search(&self, query: &str, _limit: u32) -> Result<Vec<SearchHit>, WikiError> {
        self.calls.lock().unwrap().push(query.to_string());

        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }

        if self.fail_search {
            return Err(WikiError::Network("stub search failure".to_string()));
        }

        Ok(self.hits.clone())
    }

    async fn thumbnail(&self, _title: &str) -> Result<Option<String>, WikiError> {
        if self.fail_thumbnail {
            return Err(WikiError::Network("stub thumbnail failure".to_string()));
        }
        Ok(self.thumbnail.clone())
    }
}

fn flow_with(stub: StubSearch) -> (Arc<ExploreFlow>, Arc<StubSearch>, EventBus) {
    let stub = Arc::new(stub);
    let events = EventBus::new(64);
    let flow = ExploreFlow::with_quiet_period(stub.clone(), events.clone(), TEST_QUIET);
    (flow, stub, events)
}

/// Collect every event arriving within the window
async fn drain_events(
    rx: &mut tokio::sync::broadcast::Receiver<ArchaiEvent>,
    window: Duration,
) -> Vec<ArchaiEvent> {
    let mut events = Vec::new();
    let deadline = tokio::time::Instant::now() + window;

    loop {
        let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
        if remaining.is_zero() {
            return events;
        }
        match tokio::time::timeout(remaining, rx.recv()).await {
            Ok(Ok(event)) => events.push(event),
            _ => return events,
        }
    }
}

// =============================================================================
// Debounce and clearing
// =============================================================================

#[tokio::test]
async fn rapid_retyping_issues_one_search_for_the_final_query() {
    let (flow, stub, _events) = flow_with(StubSearch {
        hits: vec![hit("Rome")],
        ..Default::default()
    });

    flow.clone().set_query("Rome");
    tokio::time::sleep(Duration::from_millis(30)).await;
    flow.clone().set_query("Rome2");

    tokio::time::sleep(Duration::from_millis(400)).await;

    assert_eq!(stub.calls(), vec!["Rome2"]);
}

#[tokio::test]
async fn empty_query_clears_without_issuing_a_request() {
    let (flow, stub, events) = flow_with(StubSearch::default());
    let mut rx = events.subscribe();

    flow.clone().set_query("   ");

    let received = drain_events(&mut rx, Duration::from_millis(200)).await;
    assert_eq!(received.len(), 1);
    assert!(matches!(received[0], ArchaiEvent::ExploreCleared { .. }));
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn clearing_cancels_a_pending_debounce() {
    let (flow, stub, _events) = flow_with(StubSearch::default());

    flow.clone().set_query("Petra");
    tokio::time::sleep(Duration::from_millis(20)).await;
    flow.clone().set_query("");

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn query_text_is_trimmed_before_searching() {
    let (flow, stub, _events) = flow_with(StubSearch::default());

    flow.clone().set_query("  Petra  ");
    tokio::time::sleep(Duration::from_millis(300)).await;

    assert_eq!(stub.calls(), vec!["Petra"]);
}

// =============================================================================
// Result batches
// =============================================================================

#[tokio::test]
async fn batch_publishes_merged_results_after_all_lookups() {
    let (flow, _stub, events) = flow_with(StubSearch {
        hits: vec![hit("Petra"), hit("Uxmal")],
        thumbnail: Some("https://img/real.jpg".to_string()),
        ..Default::default()
    });
    let mut rx = events.subscribe();

    flow.clone().set_query("ancient");
    let received = drain_events(&mut rx, Duration::from_millis(500)).await;

    let ready = received
        .iter()
        .find_map(|e| match e {
            ArchaiEvent::ExploreResultsReady { sites, query, .. } => Some((sites, query)),
            _ => None,
        })
        .expect("results batch should publish");

    let (sites, query) = ready;
    assert_eq!(query, "ancient");
    assert_eq!(sites.len(), 2);
    assert_eq!(sites[0].id, "result-0");
    assert_eq!(sites[0].name, "Petra");
    assert_eq!(sites[0].description, "Petra ruins");
    assert_eq!(sites[0].link, "https://en.wikipedia.org/wiki/Petra");
    assert_eq!(sites[0].image, "https://img/real.jpg");
    assert_eq!(sites[1].id, "result-1");
}

#[tokio::test]
async fn failed_thumbnail_lookup_degrades_to_deterministic_fallback() {
    let (flow, _stub, events) = flow_with(StubSearch {
        hits: vec![hit("Petra")],
        fail_thumbnail: true,
        ..Default::default()
    });
    let mut rx = events.subscribe();

    flow.clone().set_query("Petra");
    let received = drain_events(&mut rx, Duration::from_millis(500)).await;

    let sites = received
        .iter()
        .find_map(|e| match e {
            ArchaiEvent::ExploreResultsReady { sites, .. } => Some(sites),
            _ => None,
        })
        .expect("results batch should publish despite thumbnail failures");

    assert_eq!(sites[0].image, fallback_image("Petra"));
}

#[tokio::test]
async fn empty_thumbnail_lookup_also_falls_back() {
    let (flow, _stub, events) = flow_with(StubSearch {
        hits: vec![hit("Uxmal")],
        thumbnail: None,
        ..Default::default()
    });
    let mut rx = events.subscribe();

    flow.clone().set_query("Uxmal");
    let received = drain_events(&mut rx, Duration::from_millis(500)).await;

    let sites = received
        .iter()
        .find_map(|e| match e {
            ArchaiEvent::ExploreResultsReady { sites, .. } => Some(sites),
            _ => None,
        })
        .unwrap();

    assert_eq!(sites[0].image, fallback_image("Uxmal"));
}

#[tokio::test]
async fn primary_search_failure_surfaces_as_failed_event() {
    let (flow, _stub, events) = flow_with(StubSearch {
        fail_search: true,
        ..Default::default()
    });
    let mut rx = events.subscribe();

    flow.clone().set_query("Atlantis");
    let received = drain_events(&mut rx, Duration::from_millis(500)).await;

    assert!(received
        .iter()
        .any(|e| matches!(e, ArchaiEvent::ExploreSearchFailed { .. })));
    assert!(!received
        .iter()
        .any(|e| matches!(e, ArchaiEvent::ExploreResultsReady { .. })));
}

// =============================================================================
// Stale-response discard
// =============================================================================

#[tokio::test]
async fn slow_stale_search_never_overwrites_newer_results() {
    let mut delays = HashMap::new();
    delays.insert("slowq".to_string(), Duration::from_millis(400));

    let (flow, stub, events) = flow_with(StubSearch {
        hits: vec![hit("Rome")],
        delays,
        ..Default::default()
    });
    let mut rx = events.subscribe();

    // First query debounces, fires, and hangs in flight
    flow.clone().set_query("slowq");
    tokio::time::sleep(Duration::from_millis(150)).await;

    // Second query supersedes it while the first is still pending
    flow.clone().set_query("fastq");

    let received = drain_events(&mut rx, Duration::from_millis(800)).await;

    // Both searches were issued
    assert_eq!(stub.calls(), vec!["slowq", "fastq"]);

    // Only the newer one published
    let published: Vec<&str> = received
        .iter()
        .filter_map(|e| match e {
            ArchaiEvent::ExploreResultsReady { query, .. } => Some(query.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(published, vec!["fastq"]);
}

// =============================================================================
// Wikipedia client against a mock endpoint
// =============================================================================

#[derive(Clone, Default)]
struct MockWiki {
    captured: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

async fn mock_wiki_handler(
    State(state): State<MockWiki>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    state.captured.lock().unwrap().push(params.clone());

    match params.get("list").map(String::as_str) {
        Some("search") => Json(json!({
            "query": {
                "search": [
                    {"title": "Rome", "snippet": "the <span>capital</span>", "pageid": 1},
                    {"title": "Roman Forum", "snippet": "plaza", "pageid": 2}
                ]
            }
        })),
        _ => {
            if params.get("titles").map(String::as_str) == Some("Rome") {
                Json(json!({
                    "query": {
                        "pages": {
                            "1": {"thumbnail": {"source": "https://img/rome.jpg", "width": 400, "height": 300}}
                        }
                    }
                }))
            } else {
                // Page without a thumbnail
                Json(json!({"query": {"pages": {"2": {"pageid": 2}}}}))
            }
        }
    }
}

async fn spawn_mock_wiki() -> (String, MockWiki) {
    let state = MockWiki::default();
    let app = Router::new()
        .route("/w/api.php", get(mock_wiki_handler))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/w/api.php", addr), state)
}

#[tokio::test]
async fn search_request_carries_the_decorated_query() {
    let (base_url, mock) = spawn_mock_wiki().await;
    let client = WikiClient::with_base_url(base_url).unwrap();

    let hits = client.search("Rome2", 2).await.unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].title, "Rome");

    let captured = mock.captured.lock().unwrap();
    let params = &captured[0];
    assert_eq!(params["action"], "query");
    assert_eq!(params["list"], "search");
    assert_eq!(params["srsearch"], "Rome2 archaeological site");
    assert_eq!(params["srnamespace"], "0");
    assert_eq!(params["srlimit"], "2");
    assert_eq!(params["format"], "json");
}

#[tokio::test]
async fn thumbnail_lookup_extracts_the_source_url() {
    let (base_url, mock) = spawn_mock_wiki().await;
    let client = WikiClient::with_base_url(base_url).unwrap();

    let thumb = client.thumbnail("Rome").await.unwrap();
    assert_eq!(thumb.as_deref(), Some("https://img/rome.jpg"));

    let captured = mock.captured.lock().unwrap();
    let params = &captured[0];
    assert_eq!(params["prop"], "pageimages|pageterms");
    assert_eq!(params["pithumbsize"], "400");
}

#[tokio::test]
async fn thumbnail_lookup_without_image_returns_none() {
    let (base_url, _mock) = spawn_mock_wiki().await;
    let client = WikiClient::with_base_url(base_url).unwrap();

    let thumb = client.thumbnail("Roman Forum").await.unwrap();
    assert!(thumb.is_none());
}
