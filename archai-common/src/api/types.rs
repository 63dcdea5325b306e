//! Wire types exchanged with the inference backend and rendered by the UI

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Analysis category, one per backend pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Vegetation segmentation of aerial/satellite imagery
    Vegetation,
    /// Soil type classification
    Soil,
}

impl Category {
    /// Number of categories, for per-category state arrays
    pub const COUNT: usize = 2;

    /// Stable index into per-category state arrays
    pub fn index(&self) -> usize {
        match self {
            Category::Vegetation => 0,
            Category::Soil => 1,
        }
    }

    /// Inference backend endpoint path for this category
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Category::Vegetation => "/api/vegetation/",
            Category::Soil => "/api/soil-classify/",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vegetation => "vegetation",
            Category::Soil => "soil",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vegetation" => Ok(Category::Vegetation),
            "soil" => Ok(Category::Soil),
            other => Err(format!("unknown analysis category: {}", other)),
        }
    }
}

/// One user-chosen image file, as received in a multipart part
///
/// Owned by the submitting request; the buffer drops when the batch
/// exchange completes.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Response envelope from the inference backend for one submitted batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Number of files in the submitted batch
    pub total_files: u32,
    /// Number of files the backend processed successfully
    pub processed: u32,
    /// Per-file outcomes, in submission order
    #[serde(default)]
    pub results: Vec<FileAnalysis>,
}

/// Per-file outcome within a batch
///
/// The backend returns category-specific fields; absent ones stay `None`.
/// A per-item failure carries `success: false` plus an `error` string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileAnalysis {
    pub filename: String,
    #[serde(default)]
    pub success: bool,
    /// Vegetation: number of detected segments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_count: Option<u32>,
    /// Rendered result image (data URL or backend-served reference)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotated_image: Option<String>,
    /// Soil: predicted soil type label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<String>,
    /// Soil: prediction confidence in 0.0..=1.0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Backend-side upload timestamp (informational)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<String>,
    /// Per-item failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Batch-level error body returned by the inference backend
#[derive(Debug, Clone, Deserialize)]
pub struct BackendErrorDetail {
    pub detail: String,
}

/// What the upload endpoint hands back to the page
///
/// A batch either completed (possibly with per-item failures inside) or
/// degraded to a single user-visible message. The page renders whichever
/// shape it receives; nothing is retried.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum UploadOutcome {
    Completed(AnalysisResponse),
    Failed { error: String },
}

/// One merged Explore search result
///
/// Produced from a primary search hit plus a secondary thumbnail lookup;
/// ordering follows the external search ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSearchResult {
    pub id: String,
    pub name: String,
    pub description: String,
    pub link: String,
    pub image: String,
}
