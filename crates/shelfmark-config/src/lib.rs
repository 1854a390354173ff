//! # Shelfmark Config
//!
//! Typed configuration loaded from layered sources: built-in defaults,
//! per-environment TOML files, and `SHELFMARK_`-prefixed environment
//! variables.

mod app_config;
mod loader;

pub use app_config::{AppConfig, AppMetadata, AuthConfig, DatabaseConfig};
pub use loader::ConfigLoader;
