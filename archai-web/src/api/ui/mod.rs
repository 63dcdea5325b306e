//! UI Routes - HTML pages for the ArchAI front end
//!
//! # Structure
//! - **Static Assets** (`static_assets`): CSS/JS file serving
//! - **Home** (`home`): landing page
//! - **Upload** (`upload`): per-category image analysis page
//! - **Explore** (`explore`): debounced site search page
//! - **Info** (`info`): About, Privacy, Terms

use crate::AppState;
use axum::{routing::get, Router};

mod explore;
mod home;
mod info;
mod static_assets;
mod upload;

use explore::explore_page;
use home::home_page;
use info::{about_page, privacy_page, terms_page};
use static_assets::{serve_explore_js, serve_ui_css, serve_upload_js};
use upload::upload_page;

/// Build UI routes
pub fn ui_routes() -> Router<AppState> {
    Router::new()
        // Page routes
        .route("/", get(home_page))
        .route("/upload", get(upload_page))
        .route("/explore", get(explore_page))
        .route("/about", get(about_page))
        .route("/privacy", get(privacy_page))
        .route("/terms", get(terms_page))
        // Static assets
        .route("/static/archai-ui.css", get(serve_ui_css))
        .route("/static/upload.js", get(serve_upload_js))
        .route("/static/explore.js", get(serve_explore_js))
}

/// Wrap a page body in the shared shell (navbar, footer, stylesheet)
pub(crate) fn page(title: &str, body: &str) -> String {
    let version = env!("CARGO_PKG_VERSION");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - ArchAI</title>
    <link rel="stylesheet" href="/static/archai-ui.css">
</head>
<body>
    <header>
        <nav class="navbar">
            <a class="brand" href="/">ArchAI</a>
            <div class="nav-links">
                <a href="/">Home</a>
                <a href="/upload">Upload</a>
                <a href="/explore">Explore</a>
            </div>
        </nav>
    </header>
    <main class="container">
{body}
    </main>
    <footer>
        <div class="footer-links">
            <a href="/about">About</a>
            <a href="/privacy">Privacy</a>
            <a href="/terms">Terms</a>
        </div>
        <p class="footer-note">ArchAI v{version}</p>
    </footer>
</body>
</html>
"#
    )
}
