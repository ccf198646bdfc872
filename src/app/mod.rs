//! App module - demo host state that drives the search dropdown

mod search_bar;
mod suggest;

use crate::settings::Settings;
use eframe::egui;
use search_dropdown::{load_catalog, theme, CatalogError, SearchItem};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

type CatalogResult = Result<Vec<SearchItem>, CatalogError>;
type CatalogSlot = Arc<Mutex<Option<CatalogResult>>>;

/// Lock the slot, recovering the value if a previous holder panicked
fn lock_slot(slot: &Mutex<Option<CatalogResult>>) -> MutexGuard<'_, Option<CatalogResult>> {
    slot.lock().unwrap_or_else(|poisoned| {
        warn!("Catalog slot lock was poisoned, recovering");
        PoisonError::into_inner(poisoned)
    })
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) catalog: Vec<SearchItem>,
    pub(crate) suggestions: Vec<SearchItem>,
    pub(crate) search_query: String,
    pub(crate) focus_search: bool,
    pub(crate) active_index: Option<usize>,
    // Dropdown visibility
    pub(crate) dropdown_dismissed: bool,
    pub(crate) dropdown_hovered: bool,
    // Catalog loading
    pub(crate) loading: bool,
    pub(crate) catalog_slot: CatalogSlot,
    pub(crate) catalog_error: Option<String>,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) last_selected: Option<String>,
    // Settings
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> std::io::Result<Self> {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor glyphs back the header icons
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("catalog-loader")
            .build()?;

        let mut app = Self {
            catalog: Vec::new(),
            suggestions: Vec::new(),
            search_query: settings.last_query.clone(),
            focus_search: true,
            active_index: None,
            dropdown_dismissed: false,
            dropdown_hovered: false,
            loading: false,
            catalog_slot: Arc::new(Mutex::new(None)),
            catalog_error: None,
            runtime,
            last_selected: None,
            settings,
            data_dir,
            window_pos: None,
            window_size: None,
            needs_center: false,
        };

        app.start_catalog_load(&cc.egui_ctx);
        Ok(app)
    }

    /// Load the configured catalog on the runtime; the dropdown shows its
    /// loading indicator until `poll_catalog` picks up the result
    pub fn start_catalog_load(&mut self, ctx: &egui::Context) {
        self.loading = true;
        self.active_index = None;

        let slot = self.catalog_slot.clone();
        let path = self.settings.catalog_path();
        let ctx = ctx.clone();
        debug!(path = ?path, "Starting catalog load");

        self.runtime.spawn_blocking(move || {
            let result = load_catalog(path.as_deref());
            *lock_slot(&slot) = Some(result);
            ctx.request_repaint();
        });
    }

    pub fn poll_catalog(&mut self) {
        let Some(result) = lock_slot(&self.catalog_slot).take() else {
            return;
        };

        self.loading = false;
        match result {
            Ok(items) => {
                info!(count = items.len(), "Catalog ready");
                self.catalog = items;
                self.catalog_error = None;
            }
            Err(e) => {
                warn!(error = %e, "Failed to load catalog");
                self.catalog.clear();
                self.catalog_error = Some(e.to_string());
            }
        }
        self.apply_query();
    }

    pub fn save_settings(&mut self) {
        self.settings.window_x = self.window_pos.map(|p| p.x);
        self.settings.window_y = self.window_pos.map(|p| p.y);
        self.settings.window_w = self.window_size.map(|s| s.x);
        self.settings.window_h = self.window_size.map(|s| s.y);
        self.settings.last_query = self.search_query.clone();
        self.settings.save(&self.data_dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poisoned_slot() -> CatalogSlot {
        let slot: CatalogSlot = Arc::new(Mutex::new(None));
        let held = slot.clone();
        let _ = std::thread::spawn(move || {
            let _guard = held.lock().unwrap();
            panic!("loader panicked while holding the slot");
        })
        .join();
        assert!(slot.is_poisoned());
        slot
    }

    #[test]
    fn test_poisoned_slot_still_delivers_result() {
        let slot = poisoned_slot();
        *lock_slot(&slot) = Some(Ok(vec![SearchItem::entry("os:")]));

        let result = lock_slot(&slot).take();
        let items = result.unwrap().unwrap();
        assert_eq!(items[0].value, "os:");
        assert!(lock_slot(&slot).is_none());
    }
}
