//! Shared API types for ArchAI services

pub mod types;

pub use types::{
    AnalysisResponse, BackendErrorDetail, Category, FileAnalysis, SelectedFile, SiteSearchResult,
    UploadOutcome,
};
