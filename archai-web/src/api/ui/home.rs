//! Home page handler - landing page

use axum::response::{Html, IntoResponse};

/// GET /
///
/// Landing page with links into the two analysis flows
pub async fn home_page() -> impl IntoResponse {
    let body = r#"
        <section class="hero">
            <h1>AI-Assisted Archaeological Site Detection</h1>
            <p class="subtitle">
                Process aerial and satellite imagery with AI models for vegetation
                segmentation and soil classification, and explore documented
                archaeological sites from across the globe.
            </p>
            <div class="hero-actions">
                <a class="button" href="/upload">Upload Images</a>
                <a class="button button-secondary" href="/explore">Explore Sites</a>
            </div>
        </section>

        <section class="feature-grid">
            <div class="feature-card">
                <h2>Vegetation Segmentation</h2>
                <p>Detect vegetation patterns in aerial imagery that can reveal
                   buried structures and earthworks.</p>
            </div>
            <div class="feature-card">
                <h2>Soil Classification</h2>
                <p>Classify soil types (Alluvial, Black, Clay, Red) with
                   per-image confidence scores.</p>
            </div>
            <div class="feature-card">
                <h2>Site Explorer</h2>
                <p>Search thousands of documented archaeological sites with
                   imagery and source links.</p>
            </div>
        </section>
"#;

    Html(super::page("Home", body))
}
