//! UI module - shared rendering pieces used by the dropdown widget

pub mod components;
