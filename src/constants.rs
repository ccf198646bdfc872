//! Application constants and configuration

pub const APP_NAME: &str = "Search Dropdown";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LOG_FILE_NAME: &str = "search-dropdown.log";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Filter used when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info,search_dropdown=debug";

/// Suggestion catalog bundled into the binary
pub const DEFAULT_CATALOG: &str = include_str!("../assets/catalog.json");

pub const DEFAULT_MAX_SUGGESTIONS: usize = 20;
