//! Upload flow: per-category batch submission to the inference backend
//!
//! Each category (vegetation, soil) submits independently. A submission
//! packages every selected file into one multipart exchange; the batch
//! succeeds or fails as a whole, and its outcome replaces whatever the
//! page showed before. A simple per-category busy flag (not a queue)
//! rejects overlapping submissions.

use crate::clients::InferenceClient;
use archai_common::api::types::{AnalysisResponse, Category, SelectedFile};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Upload flow errors
#[derive(Debug, Error)]
pub enum UploadError {
    /// Submission attempted with an empty selection
    #[error("No files selected")]
    NoFiles,

    /// A batch for this category is already in flight
    #[error("An analysis for this category is already running")]
    Busy,

    /// The batch failed as a whole; carries the single user-visible message
    #[error("{0}")]
    Analysis(String),
}

/// Upload flow state: one busy flag per category
pub struct UploadFlow {
    client: Arc<InferenceClient>,
    busy: [AtomicBool; Category::COUNT],
}

impl UploadFlow {
    pub fn new(client: Arc<InferenceClient>) -> Self {
        Self {
            client,
            busy: [AtomicBool::new(false), AtomicBool::new(false)],
        }
    }

    /// Whether a batch for this category is currently in flight
    pub fn is_busy(&self, category: Category) -> bool {
        self.busy[category.index()].load(Ordering::SeqCst)
    }

    /// Submit one batch of files for a category
    ///
    /// Rejects empty selections and overlapping submissions. The busy flag
    /// releases when the exchange completes, success or failure, and the
    /// file buffers drop with it.
    pub async fn submit(
        &self,
        category: Category,
        files: Vec<SelectedFile>,
    ) -> Result<AnalysisResponse, UploadError> {
        if files.is_empty() {
            return Err(UploadError::NoFiles);
        }

        let _guard =
            BusyGuard::acquire(&self.busy[category.index()]).ok_or(UploadError::Busy)?;

        info!(category = %category, files = files.len(), "Submitting analysis batch");

        match self.client.analyze(category, files).await {
            Ok(batch) => Ok(batch),
            Err(e) => {
                warn!(category = %category, error = %e, "Analysis batch failed");
                Err(UploadError::Analysis(e.user_message()))
            }
        }
    }
}

/// RAII holder of a category's busy flag
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
