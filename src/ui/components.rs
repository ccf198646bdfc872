//! Reusable UI components
//!
//! Small standalone pieces painted by the dropdown.

use crate::theme;

/// Centered spinner with a little breathing room above and below
pub fn loading_indicator(ui: &mut egui::Ui, size: f32) -> egui::Response {
    let margin = theme::space(1);
    ui.vertical_centered(|ui| {
        ui.add_space(margin);
        let response = ui.add(egui::Spinner::new().size(size).color(theme::TEXT_MUTED));
        ui.add_space(margin);
        response
    })
    .inner
}

/// Horizontal line along the bottom edge of `rect`
pub fn row_separator(ui: &egui::Ui, rect: egui::Rect, color: egui::Color32) {
    ui.painter().hline(
        rect.x_range(),
        rect.bottom(),
        egui::Stroke::new(theme::STROKE_DEFAULT, color),
    );
}
