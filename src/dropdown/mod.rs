//! Autocomplete suggestion dropdown
//!
//! `SearchDropdown` renders the items handed to it by a search bar: a mini
//! loading indicator while `loading` is set, otherwise one row per item in
//! caller order. Header items become non-interactive group titles; every
//! other item is a clickable row whose description highlights the current
//! search substring.

pub mod highlight;
pub mod icons;
pub mod rows;

pub use highlight::{find_ignore_case, Highlight};
pub use rows::{DropdownView, Row, TITLE_SEPARATOR};

use crate::theme::DropdownStyle;
use crate::types::SearchItem;
use crate::ui::components::{loading_indicator, row_separator};
use egui::text::LayoutJob;
use tracing::trace;

type ClickHandler<'a> = Box<dyn FnMut(&str, &SearchItem) + 'a>;

/// Result of showing the dropdown for one frame
pub struct DropdownResponse {
    /// Response covering the whole dropdown frame
    pub response: egui::Response,
    /// Index of the item clicked this frame, if any
    pub clicked: Option<usize>,
}

pub struct SearchDropdown<'a> {
    items: &'a [SearchItem],
    search_substring: &'a str,
    loading: bool,
    style: DropdownStyle,
    id_salt: egui::Id,
    on_click: ClickHandler<'a>,
}

impl<'a> SearchDropdown<'a> {
    pub fn new(items: &'a [SearchItem]) -> Self {
        Self {
            items,
            search_substring: "",
            loading: false,
            style: DropdownStyle::default(),
            id_salt: egui::Id::new("search_dropdown"),
            on_click: Box::new(|_, _| {}),
        }
    }

    pub fn search_substring(mut self, search_substring: &'a str) -> Self {
        self.search_substring = search_substring;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn style(mut self, style: DropdownStyle) -> Self {
        self.style = style;
        self
    }

    /// Distinguish several dropdowns shown in the same `Ui`
    pub fn id_salt(mut self, id_salt: impl std::hash::Hash) -> Self {
        self.id_salt = egui::Id::new(id_salt);
        self
    }

    /// Called with the item's `value` and the item itself when a row is clicked
    pub fn on_click(mut self, on_click: impl FnMut(&str, &SearchItem) + 'a) -> Self {
        self.on_click = Box::new(on_click);
        self
    }

    /// Forward a click on the item at `index` to the click handler.
    ///
    /// Headers, out-of-range indices and clicks while loading are ignored.
    /// Returns whether the handler ran.
    pub fn dispatch_click(&mut self, index: usize) -> bool {
        if self.loading {
            return false;
        }
        let Some(item) = self.items.get(index) else {
            return false;
        };
        if item.is_header() {
            return false;
        }

        trace!(index, value = %item.value, "Dropdown item clicked");
        (self.on_click)(&item.value, item);
        true
    }

    /// Show the dropdown inside `ui`, filling its available width
    pub fn show(mut self, ui: &mut egui::Ui) -> DropdownResponse {
        let view = DropdownView::build(self.items, self.search_substring, self.loading);
        let style = &self.style;
        let id_salt = self.id_salt;
        let mut clicked = None;

        let frame = style.frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            match &view {
                DropdownView::Loading => {
                    loading_indicator(ui, style.spinner_size);
                }
                DropdownView::List(rows) => {
                    egui::ScrollArea::vertical()
                        .id_salt(id_salt)
                        .max_height(style.max_height)
                        .auto_shrink([false, true])
                        .show(ui, |ui| {
                            ui.spacing_mut().item_spacing.y = 0.0;
                            for (position, row) in rows.iter().enumerate() {
                                let rect = if row.is_clickable() {
                                    let response = show_entry(ui, style, row);
                                    if response.clicked() {
                                        clicked = Some(row.index);
                                    }
                                    response.rect
                                } else {
                                    show_header(ui, style, row)
                                };
                                if position + 1 < rows.len() {
                                    row_separator(ui, rect, style.border);
                                }
                            }
                        });
                }
            }
        });

        if let Some(index) = clicked {
            self.dispatch_click(index);
        }

        DropdownResponse {
            response: frame.response,
            clicked,
        }
    }

    /// Show the dropdown in a foreground area directly under `anchor`,
    /// matching its width. Use this to attach the list to a search input.
    pub fn show_below(self, ctx: &egui::Context, anchor: egui::Rect) -> DropdownResponse {
        egui::Area::new(egui::Id::new(("search_dropdown_area", self.id_salt)))
            .order(egui::Order::Foreground)
            .fixed_pos(anchor.left_bottom())
            .show(ctx, |ui| {
                ui.set_width(anchor.width());
                self.show(ui)
            })
            .inner
    }
}

/// Group title row. Carries no click sense.
///
/// The icon slot is only laid out when the item names an icon, so headers
/// without one start flush with their title instead of leaving an empty gap.
fn show_header(ui: &mut egui::Ui, style: &DropdownStyle, row: &Row<'_>) -> egui::Rect {
    egui::Frame::new()
        .fill(style.header_background)
        .inner_margin(style.item_margin)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                if let Some(icon) = row.item.icon.as_deref() {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(icons::glyph(icon))
                                .size(style.header_font_size)
                                .color(style.header_text),
                        )
                        .selectable(false),
                    );
                    ui.add_space(style.header_icon_gap);
                }

                let base = style.header_format();
                let mut job = LayoutJob::default();
                if let Some(title) = row.title_label() {
                    job.append(&title, 0.0, base.clone());
                    if !row.description.is_absent() {
                        job.append(" ", 0.0, base.clone());
                    }
                }
                row.description
                    .append_to(&mut job, &base, &style.emphasis(&base));
                ui.add(egui::Label::new(job).selectable(false));
            });
        })
        .response
        .rect
}

fn show_entry(ui: &mut egui::Ui, style: &DropdownStyle, row: &Row<'_>) -> egui::Response {
    // Reserved so the row background ends up behind its text
    let background = ui.painter().add(egui::Shape::Noop);

    let content = egui::Frame::new()
        .inner_margin(style.item_margin)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            let base = style.item_format();
            let mut job = LayoutJob::default();
            if let Some(title) = row.title_label() {
                job.append(&title, 0.0, base.clone());
            }
            row.description
                .append_to(&mut job, &base, &style.emphasis(&base));
            ui.add(egui::Label::new(job).selectable(false));

            if let Some(example) = row.example() {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(example)
                            .monospace()
                            .size(style.example_font_size)
                            .color(style.example_text),
                    )
                    .selectable(false),
                );
            }
        });

    let rect = content.response.rect;
    let response = ui.interact(
        rect,
        ui.id().with(("search_item", row.index)),
        egui::Sense::click(),
    );

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    if response.hovered() || row.item.active {
        ui.painter()
            .set(background, egui::Shape::rect_filled(rect, 0.0, style.item_hover));
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<SearchItem> {
        vec![
            SearchItem::header("Tags").with_icon("icon-tag"),
            SearchItem::entry("browser:")
                .with_title("browser")
                .with_desc("Browser name")
                .with_active(true),
            SearchItem::entry("release:").with_desc("Release version"),
            SearchItem::header("Status").with_desc("Issue status"),
            SearchItem::entry("is:unresolved")
                .with_desc("Unresolved issues")
                .with_example("is:unresolved"),
        ]
    }

    fn run_frame(mut add_contents: impl FnMut(&mut egui::Ui)) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| add_contents(ui));
        });
    }

    #[test]
    fn test_click_entry_invokes_handler_once() {
        let items = sample_items();
        let mut calls: Vec<(String, SearchItem)> = Vec::new();
        {
            let mut dropdown = SearchDropdown::new(&items)
                .on_click(|value, item| calls.push((value.to_string(), item.clone())));
            assert!(dropdown.dispatch_click(2));
        }
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "release:");
        assert_eq!(calls[0].1, items[2]);
    }

    #[test]
    fn test_each_click_invokes_handler() {
        let items = sample_items();
        let mut values = Vec::new();
        {
            let mut dropdown =
                SearchDropdown::new(&items).on_click(|value, _| values.push(value.to_string()));
            dropdown.dispatch_click(1);
            dropdown.dispatch_click(4);
            dropdown.dispatch_click(1);
        }
        assert_eq!(values, vec!["browser:", "is:unresolved", "browser:"]);
    }

    #[test]
    fn test_header_click_is_ignored() {
        let items = sample_items();
        let mut count = 0;
        {
            let mut dropdown = SearchDropdown::new(&items).on_click(|_, _| count += 1);
            assert!(!dropdown.dispatch_click(0));
            assert!(!dropdown.dispatch_click(3));
        }
        assert_eq!(count, 0);
    }

    #[test]
    fn test_click_ignored_while_loading_or_out_of_range() {
        let items = sample_items();
        let mut count = 0;
        {
            let mut dropdown = SearchDropdown::new(&items)
                .loading(true)
                .on_click(|_, _| count += 1);
            assert!(!dropdown.dispatch_click(1));
        }
        {
            let mut dropdown = SearchDropdown::new(&items).on_click(|_, _| count += 1);
            assert!(!dropdown.dispatch_click(items.len()));
        }
        assert_eq!(count, 0);
    }

    #[test]
    fn test_default_handler_is_noop() {
        let items = sample_items();
        let mut dropdown = SearchDropdown::new(&items);
        assert!(dropdown.dispatch_click(1));
    }

    #[test]
    fn test_show_list_without_input_has_no_click() {
        let items = sample_items();
        let mut clicked = Some(usize::MAX);
        let mut height = 0.0;
        run_frame(|ui| {
            let output = SearchDropdown::new(&items).search_substring("re").show(ui);
            clicked = output.clicked;
            height = output.response.rect.height();
        });
        assert_eq!(clicked, None);
        assert!(height > 0.0);
    }

    #[test]
    fn test_loading_is_shorter_than_list() {
        let items = sample_items();
        let mut loading_height = 0.0;
        let mut list_height = 0.0;
        run_frame(|ui| {
            loading_height = SearchDropdown::new(&items)
                .loading(true)
                .id_salt("loading")
                .show(ui)
                .response
                .rect
                .height();
        });
        run_frame(|ui| {
            list_height = SearchDropdown::new(&items)
                .id_salt("list")
                .show(ui)
                .response
                .rect
                .height();
        });
        assert!(loading_height > 0.0);
        assert!(list_height > loading_height);
    }

    /// Run one frame of a dropdown over `items` with `events` queued,
    /// returning the dropdown rect and the index it reported as clicked
    fn run_dropdown(
        ctx: &egui::Context,
        items: &[SearchItem],
        events: Vec<egui::Event>,
        values: &mut Vec<String>,
    ) -> (egui::Rect, Option<usize>) {
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let mut rect = egui::Rect::NOTHING;
        let mut clicked = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let output = SearchDropdown::new(items)
                    .on_click(|value, _| values.push(value.to_string()))
                    .show(ui);
                rect = output.response.rect;
                clicked = output.clicked;
            });
        });
        (rect, clicked)
    }

    /// Move onto the middle of the dropdown, press and release
    fn click_center(items: &[SearchItem]) -> (Vec<String>, usize) {
        let ctx = egui::Context::default();
        let mut values = Vec::new();
        let (rect, _) = run_dropdown(&ctx, items, Vec::new(), &mut values);
        let pos = rect.center();

        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        };
        let frames = vec![
            vec![egui::Event::PointerMoved(pos)],
            vec![button(true)],
            vec![button(false)],
            Vec::new(),
        ];

        let mut click_frames = 0;
        for events in frames {
            let (_, clicked) = run_dropdown(&ctx, items, events, &mut values);
            if clicked.is_some() {
                click_frames += 1;
            }
        }
        (values, click_frames)
    }

    #[test]
    fn test_pointer_click_on_entry_calls_handler_once() {
        let items = vec![SearchItem::entry("os:").with_desc("Operating system")];
        let (values, click_frames) = click_center(&items);
        assert_eq!(values, vec!["os:"]);
        assert_eq!(click_frames, 1);
    }

    #[test]
    fn test_pointer_click_on_header_does_nothing() {
        let items = vec![SearchItem::header("Tags").with_desc("Event tags")];
        let (values, click_frames) = click_center(&items);
        assert!(values.is_empty());
        assert_eq!(click_frames, 0);
    }

    fn painted_shapes(items: &[SearchItem], style: DropdownStyle) -> Vec<egui::Shape> {
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                SearchDropdown::new(items).style(style.clone()).show(ui);
            });
        });
        output.shapes.into_iter().map(|clipped| clipped.shape).collect()
    }

    fn marker_style() -> DropdownStyle {
        DropdownStyle {
            border: egui::Color32::from_rgb(1, 2, 3),
            item_hover: egui::Color32::from_rgb(4, 5, 6),
            header_background: egui::Color32::from_rgb(7, 8, 9),
            ..Default::default()
        }
    }

    #[test]
    fn test_separators_between_rows_only() {
        let style = marker_style();
        let items = vec![
            SearchItem::entry("os:").with_desc("Operating system"),
            SearchItem::header("Status"),
            SearchItem::entry("is:resolved").with_desc("Resolved issues"),
        ];
        let separators = painted_shapes(&items, style.clone())
            .iter()
            .filter(|shape| {
                matches!(shape, egui::Shape::LineSegment { stroke, .. } if stroke.color == style.border)
            })
            .count();
        assert_eq!(separators, items.len() - 1);
    }

    #[test]
    fn test_active_entry_gets_hover_fill() {
        let style = marker_style();
        let hover_fills = |items: &[SearchItem]| {
            painted_shapes(items, style.clone())
                .iter()
                .filter(|shape| matches!(shape, egui::Shape::Rect(rect) if rect.fill == style.item_hover))
                .count()
        };

        let mut items = vec![
            SearchItem::entry("os:").with_desc("Operating system"),
            SearchItem::header("Status"),
            SearchItem::entry("is:resolved")
                .with_desc("Resolved issues")
                .with_active(true),
        ];
        assert_eq!(hover_fills(&items), 1);

        items[2].active = false;
        assert_eq!(hover_fills(&items), 0);
    }

    #[test]
    fn test_show_below_matches_anchor_width() {
        let items = sample_items();
        let ctx = egui::Context::default();
        let anchor = egui::Rect::from_min_size(egui::pos2(10.0, 10.0), egui::vec2(240.0, 30.0));
        let mut rect = egui::Rect::NOTHING;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            rect = SearchDropdown::new(&items).show_below(ctx, anchor).response.rect;
        });
        assert_eq!(rect.left(), anchor.left());
        assert_eq!(rect.top(), anchor.bottom());
        // Frame stroke may add up to one point on each side
        assert!((rect.width() - anchor.width()).abs() <= 2.0);
    }
}
