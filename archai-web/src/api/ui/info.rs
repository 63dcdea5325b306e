//! Informational pages: About, Privacy, Terms

use axum::response::{Html, IntoResponse};

/// GET /about
pub async fn about_page() -> impl IntoResponse {
    let body = r#"
        <section class="page-header">
            <h1>About ArchAI</h1>
        </section>
        <div class="prose">
            <p>ArchAI applies computer-vision models to aerial and satellite
               imagery to assist archaeological site detection. Vegetation
               segmentation highlights growth patterns that can betray buried
               structures; soil classification identifies surface compositions
               associated with past settlement.</p>
            <p>This front end collects imagery, submits it to the analysis
               backend, and renders the returned annotations. The models
               themselves run in a separate inference service.</p>
        </div>
"#;

    Html(super::page("About", body))
}

/// GET /privacy
pub async fn privacy_page() -> impl IntoResponse {
    let body = r#"
        <section class="page-header">
            <h1>Privacy Policy</h1>
        </section>
        <div class="prose">
            <p>Uploaded images are forwarded to the analysis backend for
               processing and are not stored by this service. Analysis results
               exist only for the duration of your browser session.</p>
            <p>Site searches are forwarded to public data sources; no search
               history is retained.</p>
        </div>
"#;

    Html(super::page("Privacy", body))
}

/// GET /terms
pub async fn terms_page() -> impl IntoResponse {
    let body = r#"
        <section class="page-header">
            <h1>Terms of Service</h1>
        </section>
        <div class="prose">
            <p>ArchAI is provided as-is for research and educational use.
               Analysis output is advisory and does not replace professional
               archaeological survey.</p>
            <p>Only upload imagery you have the right to process.</p>
        </div>
"#;

    Html(super::page("Terms", body))
}
