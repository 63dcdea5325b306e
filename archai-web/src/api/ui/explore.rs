//! Explore page handler - debounced site search

use axum::response::{Html, IntoResponse};

/// GET /explore
///
/// Site search page. Input changes go to the flow endpoint; resolved
/// result batches arrive on the SSE channel.
pub async fn explore_page() -> impl IntoResponse {
    let body = r#"
        <section class="page-header">
            <h1>Explore Sites</h1>
            <p class="subtitle">Discover and explore archaeological sites from
               thousands of verified sources</p>
        </section>

        <div class="search-bar">
            <input type="text" id="site-search"
                   placeholder="Search sites by name or location..."
                   autocomplete="off">
        </div>

        <div id="search-status" class="search-status" hidden></div>
        <div id="site-results" class="site-grid"></div>

        <script src="/static/explore.js"></script>
"#;

    Html(super::page("Explore", body))
}
