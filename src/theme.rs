//! Centralized theme tokens for the search dropdown
//! Colors, font sizes and spacing used by the widget and the demo host

use egui::Color32;

// =============================================================================
// COLORS - Surfaces
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_INPUT: Color32 = Color32::from_rgb(0x14, 0x14, 0x18);
pub const BG_DROPDOWN: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_OFF: Color32 = Color32::from_rgb(0x1f, 0x1f, 0x22); // group headers, hovered and active rows

// =============================================================================
// COLORS - Accent (Teal)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400
pub const ACCENT_LIGHT: Color32 = Color32::from_rgb(0x5e, 0xea, 0xd4); // teal-300

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_LIGHT: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700

pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_LARGE: f32 = 14.0;
pub const FONT_MEDIUM: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// SPACING
// =============================================================================
/// Spacing scale: `space(1)` = 8, `space(2)` = 16
pub const fn space(step: u8) -> f32 {
    match step {
        0 => 0.0,
        1 => 8.0,
        2 => 16.0,
        3 => 20.0,
        _ => 30.0,
    }
}

pub const SPACING_SM: f32 = 4.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const RADIUS_DEFAULT: u8 = 4;
pub const STROKE_DEFAULT: f32 = 1.0;
pub const SPINNER_MINI: f32 = 16.0;
pub const DROPDOWN_MAX_HEIGHT: f32 = 360.0;

// =============================================================================
// DROPDOWN STYLE
// =============================================================================
/// Styling hook for `SearchDropdown`; defaults come from the tokens above
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownStyle {
    pub background: Color32,
    pub border: Color32,
    pub corner_radius: egui::CornerRadius,
    pub shadow: egui::epaint::Shadow,
    pub max_height: f32,

    pub item_margin: egui::Margin,
    pub item_hover: Color32,
    pub item_text: Color32,
    pub item_font_size: f32,
    pub match_color: Color32,

    pub header_background: Color32,
    pub header_text: Color32,
    pub header_font_size: f32,
    pub header_icon_gap: f32,

    pub example_text: Color32,
    pub example_font_size: f32,

    pub spinner_size: f32,
}

impl Default for DropdownStyle {
    fn default() -> Self {
        let item_margin = egui::Margin::symmetric(space(2) as i8, space(1) as i8);
        Self {
            background: BG_DROPDOWN,
            border: BORDER_LIGHT,
            // Square top edge so the list sits flush under the input
            corner_radius: egui::CornerRadius {
                nw: 0,
                ne: 0,
                sw: RADIUS_DEFAULT,
                se: RADIUS_DEFAULT,
            },
            shadow: egui::epaint::Shadow {
                offset: [0, 1],
                blur: 1,
                spread: 0,
                color: Color32::from_black_alpha(20),
            },
            max_height: DROPDOWN_MAX_HEIGHT,
            item_margin,
            item_hover: BG_OFF,
            item_text: TEXT_SECONDARY,
            item_font_size: FONT_MEDIUM,
            match_color: ACCENT_LIGHT,
            header_background: BG_OFF,
            header_text: TEXT_MUTED,
            header_font_size: FONT_MEDIUM,
            header_icon_gap: space(1),
            example_text: TEXT_DIM,
            example_font_size: FONT_SMALL,
            spinner_size: SPINNER_MINI,
        }
    }
}

impl DropdownStyle {
    pub fn frame(&self) -> egui::Frame {
        egui::Frame::new()
            .fill(self.background)
            .stroke(egui::Stroke::new(STROKE_DEFAULT, self.border))
            .corner_radius(self.corner_radius)
            .shadow(self.shadow)
    }

    pub fn item_format(&self) -> egui::TextFormat {
        egui::TextFormat {
            font_id: egui::FontId::proportional(self.item_font_size),
            color: self.item_text,
            ..Default::default()
        }
    }

    pub fn header_format(&self) -> egui::TextFormat {
        egui::TextFormat {
            font_id: egui::FontId::proportional(self.header_font_size),
            color: self.header_text,
            ..Default::default()
        }
    }

    /// Emphasis for the matched part of a description
    pub fn emphasis(&self, base: &egui::TextFormat) -> egui::TextFormat {
        egui::TextFormat {
            color: self.match_color,
            underline: egui::Stroke::new(STROKE_DEFAULT, self.match_color),
            ..base.clone()
        }
    }
}

// =============================================================================
// HELPER - Search input frame
// =============================================================================
pub fn search_input_frame(focused: bool) -> egui::Frame {
    let border = if focused { BORDER_DEFAULT } else { BORDER_LIGHT };
    egui::Frame::new()
        .fill(BG_INPUT)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, border))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(8, 8))
}

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_DROPDOWN,
        extreme_bg_color: BG_BASE,
        faint_bg_color: BG_DROPDOWN,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0x3a, 0x3a, 0x3f),
            stroke: egui::Stroke::NONE,
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_LIGHT),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_scale() {
        assert_eq!(space(1), 8.0);
        assert_eq!(space(2), 16.0);
    }

    #[test]
    fn test_emphasis_keeps_font() {
        let style = DropdownStyle::default();
        let base = style.item_format();
        let emphasis = style.emphasis(&base);
        assert_eq!(emphasis.font_id, base.font_id);
        assert_eq!(emphasis.color, style.match_color);
        assert_ne!(emphasis.color, base.color);
    }
}
