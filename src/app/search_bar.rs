//! Search box with the anchored suggestion dropdown

use super::App;
use eframe::egui;
use search_dropdown::{theme, SearchDropdown};

impl App {
    fn dropdown_visible(&self, search_focused: bool) -> bool {
        !self.dropdown_dismissed
            && (search_focused || !self.search_query.is_empty() || self.dropdown_hovered)
    }

    pub fn render_search_bar(&mut self, ui: &mut egui::Ui) {
        let search_id = ui.make_persistent_id("search_box");
        let focused = ui.memory(|mem| mem.has_focus(search_id));

        // Navigation keys must be consumed before the text edit sees them
        if focused && self.dropdown_visible(focused) {
            self.handle_dropdown_keys(ui);
        }

        let search_frame = theme::search_input_frame(focused).show(ui, |ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS)
                            .size(theme::FONT_LARGE)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.search_query)
                        .id(search_id)
                        .hint_text("Search for events, users, tags, and more")
                        .frame(false)
                        .desired_width(ui.available_width()),
                );
                if self.focus_search {
                    self.focus_search = false;
                    response.request_focus();
                    if let Some(mut state) = egui::TextEdit::load_state(ui.ctx(), search_id) {
                        let ccursor = egui::text::CCursor::new(self.search_query.chars().count());
                        state
                            .cursor
                            .set_char_range(Some(egui::text::CCursorRange::one(ccursor)));
                        state.store(ui.ctx(), search_id);
                    }
                }
                if response.changed() {
                    self.dropdown_dismissed = false;
                    self.apply_query();
                }
            });
        });

        if !self.dropdown_visible(focused) {
            self.dropdown_hovered = false;
            return;
        }

        let mut selected: Option<String> = None;
        let output = SearchDropdown::new(&self.suggestions)
            .search_substring(self.search_query.trim())
            .loading(self.loading)
            .id_salt("search_suggestions")
            .on_click(|value, _| selected = Some(value.to_string()))
            .show_below(ui.ctx(), search_frame.response.rect);
        self.dropdown_hovered = output.response.contains_pointer();

        if let Some(value) = selected {
            self.select_suggestion(&value);
        }
    }

    fn handle_dropdown_keys(&mut self, ui: &mut egui::Ui) {
        let has_active = self.active_index.is_some();
        let (down, up, enter, escape) = ui.input_mut(|i| {
            (
                i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowDown),
                i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowUp),
                has_active && i.consume_key(egui::Modifiers::NONE, egui::Key::Enter),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if down {
            self.move_active(true);
        }
        if up {
            self.move_active(false);
        }
        if enter {
            if let Some(value) = self.active_value() {
                self.select_suggestion(&value);
            }
        }
        if escape {
            self.dropdown_dismissed = true;
            self.dropdown_hovered = false;
        }
    }

    pub fn render_status(&self, ui: &mut egui::Ui) {
        let small = |text: String, color: egui::Color32| {
            egui::Label::new(egui::RichText::new(text).size(theme::FONT_SMALL).color(color))
                .selectable(false)
        };

        if let Some(error) = &self.catalog_error {
            ui.add(small(
                format!("{}  {}", egui_phosphor::regular::WARNING, error),
                theme::STATUS_ERROR,
            ));
        }
        if let Some(value) = &self.last_selected {
            ui.add(small(format!("Selected: {value}"), theme::TEXT_SECONDARY));
        }

        let entries = self.catalog.iter().filter(|i| !i.is_header()).count();
        let status = if self.loading {
            "Loading catalog...".to_string()
        } else {
            format!("{entries} suggestions available · F5 to reload")
        };
        ui.add(small(status, theme::TEXT_DIM));
    }
}
