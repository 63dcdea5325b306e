//! Site catalog endpoints

use axum::{
    extract::{Path, Query},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{self, CatalogStats, Site};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Optional catalog filters
#[derive(Debug, Default, Deserialize)]
pub struct SiteFilter {
    /// Filter by category
    pub category: Option<String>,
    /// Filter by status
    pub status: Option<String>,
    /// Search by name or description
    pub search: Option<String>,
}

/// Catalog listing response
#[derive(Debug, Serialize)]
pub struct SitesResponse {
    pub total: usize,
    pub sites: Vec<&'static Site>,
}

/// GET /api/sites
///
/// All catalog sites, with optional category/status/search filters.
pub async fn list_sites(Query(filter): Query<SiteFilter>) -> Json<SitesResponse> {
    let sites = catalog::filtered(
        filter.category.as_deref(),
        filter.status.as_deref(),
        filter.search.as_deref(),
    );

    Json(SitesResponse {
        total: sites.len(),
        sites,
    })
}

/// GET /api/sites/:id
pub async fn get_site(Path(id): Path<u32>) -> ApiResult<Json<&'static Site>> {
    catalog::by_id(id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Site not found".to_string()))
}

/// GET /api/sites/stats/summary
pub async fn get_stats() -> Json<CatalogStats> {
    Json(catalog::stats())
}

/// Build site catalog routes
pub fn sites_routes() -> Router<AppState> {
    Router::new()
        .route("/api/sites", get(list_sites))
        .route("/api/sites/stats/summary", get(get_stats))
        .route("/api/sites/:id", get(get_site))
}
