//! Community Hub Common Library
//!
//! Shared code for the Community Hub services including:
//! - Content store models, filters and repository
//! - Static directory filter/render pipeline
//! - Error types and handling
//! - Configuration management
//! - Metrics and observability

pub mod config;
pub mod db;
pub mod directory;
pub mod errors;
pub mod metrics;

// Re-export commonly used types
pub use config::AppConfig;
pub use db::{ContentStore, DbPool, Repository};
pub use directory::Directory;
pub use errors::{AppError, Result};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Stored `community_focus` value that matches every community filter
pub const COMMUNITY_WILDCARD: &str = "both";
