//! Static asset handlers for the ArchAI UI
//!
//! Embeds and serves CSS/JS files at compile time

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

const UI_CSS: &str = include_str!("../../../static/archai-ui.css");
const UPLOAD_JS: &str = include_str!("../../../static/upload.js");
const EXPLORE_JS: &str = include_str!("../../../static/explore.js");

/// GET /static/archai-ui.css
pub async fn serve_ui_css() -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "text/css"),
            ("cache-control", "no-cache, no-store, must-revalidate"),
        ],
        UI_CSS,
    )
        .into_response()
}

/// GET /static/upload.js
pub async fn serve_upload_js() -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "application/javascript"),
            ("cache-control", "no-cache, no-store, must-revalidate"),
        ],
        UPLOAD_JS,
    )
        .into_response()
}

/// GET /static/explore.js
pub async fn serve_explore_js() -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "application/javascript"),
            ("cache-control", "no-cache, no-store, must-revalidate"),
        ],
        EXPLORE_JS,
    )
        .into_response()
}
