//! Utility functions

use search_dropdown::constants::APP_NAME;
use std::path::PathBuf;

/// Per-user data directory holding settings and logs
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

pub fn get_logs_dir() -> PathBuf {
    get_data_dir().join("logs")
}
