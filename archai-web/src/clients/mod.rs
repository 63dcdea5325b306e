//! HTTP clients for the external collaborators
//!
//! - `inference`: the archaeological-imagery inference backend
//! - `wiki`: Wikipedia search and page-thumbnail lookup

pub mod inference;
pub mod wiki;

pub use inference::{InferenceClient, InferenceError};
pub use wiki::{SearchHit, SiteSearch, WikiClient, WikiError};
