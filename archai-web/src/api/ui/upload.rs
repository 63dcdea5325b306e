//! Upload page handler - per-category image analysis

use axum::response::{Html, IntoResponse};

/// One upload card per analysis category; the page script wires both
fn category_card(category: &str, heading: &str, blurb: &str, action: &str) -> String {
    format!(
        r#"
        <div class="card upload-card" data-category="{category}">
            <h2>{heading}</h2>
            <p>{blurb}</p>
            <div class="dropzone" id="{category}-dropzone">
                <p>Drop images here or click to browse</p>
                <p class="hint">Supports: JPG, PNG, WebP</p>
                <input type="file" id="{category}-input" multiple
                       accept="image/jpeg,image/png,image/webp" hidden>
            </div>
            <div class="selection" id="{category}-selection"></div>
            <button class="button" id="{category}-submit" disabled>{action}</button>
            <div class="results" id="{category}-results"></div>
        </div>
"#
    )
}

/// GET /upload
///
/// Image intake page: two independent category pipelines, each with its
/// own selection, previews, busy state, and result list.
pub async fn upload_page() -> impl IntoResponse {
    let vegetation = category_card(
        "vegetation",
        "Vegetation Segmentation",
        "Upload aerial or satellite imagery for vegetation pattern analysis.",
        "Run Vegetation",
    );
    let soil = category_card(
        "soil",
        "Soil Classification",
        "Upload images for soil classification and analysis.",
        "Run Classification",
    );

    let body = format!(
        r#"
        <section class="page-header">
            <h1>Upload Images</h1>
            <p class="subtitle">Process aerial or satellite imagery with AI for
               archaeological site detection</p>
        </section>
        <div class="upload-grid">
{vegetation}
{soil}
        </div>
        <script src="/static/upload.js"></script>
"#
    );

    Html(super::page("Upload", &body))
}
