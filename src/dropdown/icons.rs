//! Icon identifiers to Phosphor glyphs

use egui_phosphor::regular;

/// Glyph shown for identifiers with no known mapping
pub const FALLBACK_ICON: &str = regular::MAGNIFYING_GLASS;

/// Resolve an item's icon identifier. Accepts both `icon-tag` and `tag`.
pub fn glyph(icon: &str) -> &'static str {
    let name = icon.trim();
    let name = name.strip_prefix("icon-").unwrap_or(name);

    match name {
        "tag" => regular::TAG,
        "toggle" => regular::TOGGLE_LEFT,
        "user" => regular::USER,
        "star" => regular::STAR,
        "clock" | "history" => regular::CLOCK_COUNTER_CLOCKWISE,
        "search" => regular::MAGNIFYING_GLASS,
        "bookmark" => regular::BOOKMARK_SIMPLE,
        "filter" => regular::FUNNEL,
        "calendar" | "date" => regular::CALENDAR_BLANK,
        "project" | "folder" => regular::FOLDER,
        "warning" => regular::WARNING,
        "info" => regular::INFO,
        "link" => regular::LINK,
        _ => FALLBACK_ICON,
    }
}
