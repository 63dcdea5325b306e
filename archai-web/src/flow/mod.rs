//! Flow orchestration for the two analysis pages
//!
//! - `upload`: per-category batch submission to the inference backend
//! - `explore`: debounced site search with thumbnail enrichment
//! - `debounce`, `latest`, `fallback`: the small reusable pieces both
//!   flows are built from

pub mod debounce;
pub mod explore;
pub mod fallback;
pub mod latest;
pub mod upload;

pub use debounce::Debouncer;
pub use explore::ExploreFlow;
pub use latest::{LatestGate, Ticket};
pub use upload::{UploadError, UploadFlow};
