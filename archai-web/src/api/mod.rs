//! HTTP API handlers for archai-web

pub mod analyze;
pub mod explore;
pub mod health;
pub mod sites;
pub mod ui;

pub use analyze::analyze_routes;
pub use explore::explore_routes;
pub use health::health_routes;
pub use sites::sites_routes;
pub use ui::ui_routes;
