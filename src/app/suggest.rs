//! Suggestion filtering and keyboard selection

use super::App;
use search_dropdown::dropdown::find_ignore_case;
use search_dropdown::SearchItem;
use tracing::info;

/// Catalog entries matching `query`, each group keeping its header.
///
/// An entry matches when its value, title or description contains the
/// trimmed query, ignoring case; an empty query matches everything. Headers
/// are kept only when at least one of their entries is kept. At most `limit`
/// entries are returned, headers not counted.
pub fn filter_suggestions(catalog: &[SearchItem], query: &str, limit: usize) -> Vec<SearchItem> {
    let query = query.trim();
    let mut suggestions = Vec::new();
    let mut pending_header: Option<&SearchItem> = None;
    let mut entries = 0;

    for item in catalog {
        if entries >= limit {
            break;
        }
        if item.is_header() {
            pending_header = Some(item);
            continue;
        }
        if !query.is_empty() && !item_matches(item, query) {
            continue;
        }
        if let Some(header) = pending_header.take() {
            suggestions.push(header.clone());
        }
        suggestions.push(SearchItem {
            active: false,
            ..item.clone()
        });
        entries += 1;
    }

    suggestions
}

fn item_matches(item: &SearchItem, query: &str) -> bool {
    [Some(item.value.as_str()), item.title.as_deref(), item.desc.as_deref()]
        .into_iter()
        .flatten()
        .any(|field| find_ignore_case(field, query).is_some())
}

/// Next selectable index when moving down (`forward`) or up, skipping headers.
/// Clamps at both ends; moving up with nothing active selects nothing.
pub fn step_active(items: &[SearchItem], current: Option<usize>, forward: bool) -> Option<usize> {
    let selectable = |i: &usize| !items[*i].is_header();

    match (current, forward) {
        (None, true) => (0..items.len()).find(selectable),
        (None, false) => None,
        (Some(index), true) => (index + 1..items.len()).find(selectable).or(Some(index)),
        (Some(index), false) => (0..index).rev().find(selectable).or(Some(index)),
    }
}

pub fn mark_active(items: &mut [SearchItem], active: Option<usize>) {
    for (index, item) in items.iter_mut().enumerate() {
        item.active = Some(index) == active;
    }
}

impl App {
    pub fn apply_query(&mut self) {
        self.suggestions = filter_suggestions(
            &self.catalog,
            &self.search_query,
            self.settings.max_suggestions,
        );
        self.active_index = None;
    }

    pub fn move_active(&mut self, forward: bool) {
        self.active_index = step_active(&self.suggestions, self.active_index, forward);
        mark_active(&mut self.suggestions, self.active_index);
    }

    pub fn active_value(&self) -> Option<String> {
        self.active_index
            .and_then(|index| self.suggestions.get(index))
            .filter(|item| !item.is_header())
            .map(|item| item.value.clone())
    }

    pub fn select_suggestion(&mut self, value: &str) {
        info!(value, "Suggestion selected");
        self.search_query = value.to_string();
        self.last_selected = Some(value.to_string());
        self.dropdown_dismissed = true;
        self.focus_search = true;
        self.apply_query();
    }
}
