//! Autocomplete suggestion dropdown for egui search bars

pub mod catalog;
pub mod constants;
pub mod dropdown;
pub mod theme;
pub mod types;
pub mod ui;

pub use catalog::{load_catalog, CatalogError};
pub use dropdown::{DropdownResponse, SearchDropdown};
pub use theme::DropdownStyle;
pub use types::{ItemType, SearchItem};
