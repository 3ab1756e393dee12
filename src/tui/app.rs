// TUI application state
//
// Owns everything the interface needs: the master country list, the
// current filter query, the debounce deadline, grid selection, and the
// modal overlay. The master list is written only by a completed load
// cycle and read everywhere else; filtering derives index subsets and
// never touches it.

use super::debounce::Debouncer;
use super::modal::Modal;
use crate::config::Config;
use crate::countries::Country;
use crate::filter::{self, FilterQuery, PopulationBucket};
use crate::logging::LogBuffer;
use crate::theme::Theme;
use ratatui::layout::Rect;
use std::time::Instant;

/// Load lifecycle for the master list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// Fetch outstanding, nothing to filter yet
    Loading,
    /// Master list populated
    Ready,
    /// Load failed with no data to fall back on
    Failed(String),
}

/// Which control currently receives input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    Region,
    Bucket,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Region,
            Focus::Region => Focus::Bucket,
            Focus::Bucket => Focus::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Search => Focus::Bucket,
            Focus::Region => Focus::Search,
            Focus::Bucket => Focus::Region,
        }
    }
}

/// Spinner frames for the loading state
const SPINNER: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

/// Main application state for the TUI
pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub log_buffer: LogBuffer,

    /// The master list: sorted, immutable until the next load cycle
    master: Vec<Country>,
    pub phase: LoadPhase,

    /// Regions present in the master list, sorted, for the selector
    pub regions: Vec<String>,

    // Query state; any change arms the debouncer
    pub search: String,
    /// Selector position: 0 = all, otherwise regions[idx - 1]
    pub region_idx: usize,
    /// Selector position: 0 = all, otherwise PopulationBucket::ALL[idx - 1]
    pub bucket_idx: usize,
    pub debouncer: Debouncer,

    /// Current filtered subset: indices into the master list, master order
    pub filtered: Vec<usize>,

    /// Selection within `filtered`
    pub selected: usize,
    /// First visible grid row
    pub scroll_row: usize,
    /// Grid geometry, synced by the renderer each frame
    pub grid_columns: usize,
    pub grid_rows_visible: usize,

    pub focus: Focus,
    pub modal: Option<Modal>,
    /// Screen rect of the open overlay, synced by the renderer; lets
    /// mouse handling tell background clicks from clicks on the panel
    pub overlay_area: Option<Rect>,
    pub should_quit: bool,

    spinner_frame: usize,
}

impl App {
    pub fn with_config(config: Config, log_buffer: LogBuffer) -> Self {
        let theme = Theme::by_name(&config.theme);
        let debouncer = Debouncer::new(config.debounce());

        Self {
            config,
            theme,
            log_buffer,
            master: Vec::new(),
            phase: LoadPhase::Loading,
            regions: Vec::new(),
            search: String::new(),
            region_idx: 0,
            bucket_idx: 0,
            debouncer,
            filtered: Vec::new(),
            selected: 0,
            scroll_row: 0,
            grid_columns: 1,
            grid_rows_visible: 1,
            focus: Focus::default(),
            modal: None,
            overlay_area: None,
            should_quit: false,
            spinner_frame: 0,
        }
    }

    /// Read access to the master list
    pub fn master(&self) -> &[Country] {
        &self.master
    }

    /// The query as currently expressed by the three controls
    pub fn current_query(&self) -> FilterQuery {
        FilterQuery {
            text: self.search.clone(),
            region: self
                .region_idx
                .checked_sub(1)
                .and_then(|i| self.regions.get(i).cloned()),
            bucket: self
                .bucket_idx
                .checked_sub(1)
                .and_then(|i| PopulationBucket::ALL.get(i).copied()),
        }
    }

    /// Label for the region selector at its current position
    pub fn region_label(&self) -> &str {
        self.region_idx
            .checked_sub(1)
            .and_then(|i| self.regions.get(i))
            .map(String::as_str)
            .unwrap_or("All regions")
    }

    /// Label for the bucket selector at its current position
    pub fn bucket_label(&self) -> &str {
        self.bucket_idx
            .checked_sub(1)
            .and_then(|i| PopulationBucket::ALL.get(i))
            .map(|b| b.label())
            .unwrap_or("Any population")
    }

    /// Install a freshly loaded master list (already sorted by the
    /// loader), replacing any prior value wholesale.
    pub fn set_master(&mut self, countries: Vec<Country>) {
        self.master = countries;
        self.regions = derive_regions(&self.master);
        self.phase = LoadPhase::Ready;

        // Selector positions may point past the new region set
        if self.region_idx > self.regions.len() {
            self.region_idx = 0;
        }

        // A detail overlay from the previous list would hold a stale index
        self.close_modal();
        self.debouncer.cancel();
        self.apply_filter();
    }

    /// Record a failed load. Existing data is kept: the error replaces
    /// the grid only when there is nothing to show instead.
    pub fn load_failed(&mut self, message: String) {
        if self.master.is_empty() {
            self.phase = LoadPhase::Failed(message);
        } else {
            tracing::warn!("reload failed, keeping current dataset: {message}");
            self.phase = LoadPhase::Ready;
        }
    }

    /// Mark the start of a (re)load cycle
    pub fn begin_loading(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// Note an input-change event: arm the debounce deadline.
    /// The recompute itself runs when the event loop observes expiry.
    pub fn on_query_changed(&mut self, now: Instant) {
        self.debouncer.arm(now);
    }

    /// Fire the debouncer if its deadline has passed; recomputes the
    /// filtered subset with the latest query state
    pub fn fire_debounce(&mut self, now: Instant) -> bool {
        if self.debouncer.fire_at(now) {
            self.apply_filter();
            true
        } else {
            false
        }
    }

    /// Recompute the filtered subset from the current query.
    /// Selection and scroll reset: the subset may have changed shape.
    pub fn apply_filter(&mut self) {
        self.filtered = filter::apply(&self.master, &self.current_query());
        self.selected = 0;
        self.scroll_row = 0;
    }

    /// The country behind the current grid selection
    pub fn selected_country(&self) -> Option<&Country> {
        self.filtered
            .get(self.selected)
            .and_then(|&idx| self.master.get(idx))
    }

    /// Open the detail overlay for a country code.
    ///
    /// A code not present in the master list is silently ignored: a
    /// card activation can race a list reload, and the stale reference
    /// is benign.
    pub fn open_detail(&mut self, code: &str) {
        match self.master.iter().position(|c| c.cca3 == code) {
            Some(idx) => {
                self.modal = Some(Modal::Detail(idx));
            }
            None => {
                tracing::debug!(code, "detail requested for unknown country code");
            }
        }
    }

    /// Open the detail overlay for the selected card
    pub fn open_detail_selected(&mut self) {
        if let Some(code) = self.selected_country().map(|c| c.cca3.clone()) {
            self.open_detail(&code);
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
        self.overlay_area = None;
    }

    // Grid navigation. Deltas follow the geometry the renderer synced
    // last frame: left/right move one card, up/down move one row.

    pub fn select_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.ensure_selected_visible();
    }

    pub fn select_right(&mut self) {
        if self.selected + 1 < self.filtered.len() {
            self.selected += 1;
        }
        self.ensure_selected_visible();
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.grid_columns.max(1));
        self.ensure_selected_visible();
    }

    pub fn select_down(&mut self) {
        let next = self.selected + self.grid_columns.max(1);
        if next < self.filtered.len() {
            self.selected = next;
        }
        self.ensure_selected_visible();
    }

    pub fn select_page_up(&mut self) {
        let page = self.grid_columns.max(1) * self.grid_rows_visible.max(1);
        self.selected = self.selected.saturating_sub(page);
        self.ensure_selected_visible();
    }

    pub fn select_page_down(&mut self) {
        let page = self.grid_columns.max(1) * self.grid_rows_visible.max(1);
        self.selected = (self.selected + page).min(self.filtered.len().saturating_sub(1));
        self.ensure_selected_visible();
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.ensure_selected_visible();
    }

    pub fn select_last(&mut self) {
        self.selected = self.filtered.len().saturating_sub(1);
        self.ensure_selected_visible();
    }

    /// Keep the selected card's row inside the visible window
    fn ensure_selected_visible(&mut self) {
        let columns = self.grid_columns.max(1);
        let row = self.selected / columns;
        let visible = self.grid_rows_visible.max(1);

        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + visible {
            self.scroll_row = row + 1 - visible;
        }
    }

    // Selector movement; each change is an input-change event and goes
    // through the debouncer like a keystroke.

    pub fn region_next(&mut self, now: Instant) {
        self.region_idx = (self.region_idx + 1) % (self.regions.len() + 1);
        self.on_query_changed(now);
    }

    pub fn region_prev(&mut self, now: Instant) {
        let count = self.regions.len() + 1;
        self.region_idx = (self.region_idx + count - 1) % count;
        self.on_query_changed(now);
    }

    pub fn bucket_next(&mut self, now: Instant) {
        self.bucket_idx = (self.bucket_idx + 1) % (PopulationBucket::ALL.len() + 1);
        self.on_query_changed(now);
    }

    pub fn bucket_prev(&mut self, now: Instant) {
        let count = PopulationBucket::ALL.len() + 1;
        self.bucket_idx = (self.bucket_idx + count - 1) % count;
        self.on_query_changed(now);
    }

    /// Append a typed character to the search text
    pub fn search_push(&mut self, c: char, now: Instant) {
        self.search.push(c);
        self.on_query_changed(now);
    }

    /// Delete the last character of the search text
    pub fn search_pop(&mut self, now: Instant) {
        if self.search.pop().is_some() {
            self.on_query_changed(now);
        }
    }

    /// Clear the search text. Returns false if it was already empty.
    pub fn search_clear(&mut self, now: Instant) -> bool {
        if self.search.is_empty() {
            return false;
        }
        self.search.clear();
        self.on_query_changed(now);
        true
    }

    /// Advance the loading spinner
    pub fn tick_animation(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER[self.spinner_frame % SPINNER.len()]
    }
}

/// Unique regions present in the dataset, sorted for the selector
fn derive_regions(countries: &[Country]) -> Vec<String> {
    let mut regions: Vec<String> = countries
        .iter()
        .map(|c| c.region.clone())
        .filter(|r| !r.is_empty())
        .collect();
    regions.sort();
    regions.dedup();
    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::test_fixtures::country;
    use std::time::Duration;

    fn app_with_fixture() -> App {
        let mut app = App::with_config(Config::default(), LogBuffer::new());
        app.set_master(vec![
            country("FRA", "France", "Europe", 67_000_000),
            country("JPN", "Japan", "Asia", 125_800_000),
            country("MCO", "Monaco", "Europe", 39_244),
            country("USA", "United States", "Americas", 331_000_000),
        ]);
        app
    }

    #[test]
    fn set_master_derives_sorted_regions() {
        let app = app_with_fixture();
        assert_eq!(app.phase, LoadPhase::Ready);
        assert_eq!(app.regions, vec!["Americas", "Asia", "Europe"]);
        // Unfiltered: every record visible
        assert_eq!(app.filtered.len(), 4);
    }

    #[test]
    fn detail_lookup_miss_is_a_no_op() {
        let mut app = app_with_fixture();
        app.open_detail("XXX");
        assert!(app.modal.is_none());

        // And a hit opens the overlay for the right record
        app.open_detail("JPN");
        let idx = app
            .modal
            .as_ref()
            .and_then(|m| m.detail_index())
            .expect("detail modal should be open");
        assert_eq!(app.master()[idx].cca3, "JPN");
    }

    #[test]
    fn reload_closes_stale_detail_overlay() {
        let mut app = app_with_fixture();
        app.open_detail("USA");
        assert!(app.modal.is_some());

        app.set_master(vec![country("FRA", "France", "Europe", 67_000_000)]);
        assert!(app.modal.is_none());
    }

    #[test]
    fn debounce_defers_recompute_until_deadline() {
        let mut app = app_with_fixture();
        let t0 = Instant::now();

        app.search_push('j', t0);
        app.search_push('a', t0 + Duration::from_millis(50));

        // Before expiry the subset still reflects the old query
        assert!(!app.fire_debounce(t0 + Duration::from_millis(100)));
        assert_eq!(app.filtered.len(), 4);

        // One firing, with the final text
        assert!(app.fire_debounce(t0 + Duration::from_millis(300)));
        assert_eq!(app.filtered.len(), 1);
        assert_eq!(app.selected_country().unwrap().cca3, "JPN");

        // Consumed
        assert!(!app.fire_debounce(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn no_match_produces_empty_subset_not_error() {
        let mut app = app_with_fixture();
        let t0 = Instant::now();

        app.search_push('z', t0);
        app.search_push('z', t0);
        assert!(app.fire_debounce(t0 + Duration::from_secs(1)));

        assert!(app.filtered.is_empty());
        assert!(app.selected_country().is_none());
    }

    #[test]
    fn region_selector_wraps_and_arms_debounce() {
        let mut app = app_with_fixture();
        let t0 = Instant::now();

        assert_eq!(app.region_label(), "All regions");
        app.region_next(t0);
        assert_eq!(app.region_label(), "Americas");
        app.region_prev(t0);
        app.region_prev(t0);
        assert_eq!(app.region_label(), "Europe");
        assert!(app.debouncer.is_pending());

        assert!(app.fire_debounce(t0 + Duration::from_secs(1)));
        let codes: Vec<&str> = app
            .filtered
            .iter()
            .map(|&i| app.master()[i].cca3.as_str())
            .collect();
        assert_eq!(codes, vec!["FRA", "MCO"]);
    }

    #[test]
    fn grid_navigation_respects_geometry() {
        let mut app = app_with_fixture();
        app.grid_columns = 2;
        app.grid_rows_visible = 1;

        app.select_down();
        assert_eq!(app.selected, 2);
        assert_eq!(app.scroll_row, 1);

        app.select_right();
        assert_eq!(app.selected, 3);

        app.select_up();
        assert_eq!(app.selected, 1);
        assert_eq!(app.scroll_row, 0);

        // Clamped at the edges
        app.select_first();
        app.select_left();
        assert_eq!(app.selected, 0);
        app.select_last();
        app.select_down();
        assert_eq!(app.selected, 3);
    }

    #[test]
    fn first_load_failure_degrades_to_error_panel() {
        let mut app = App::with_config(Config::default(), LogBuffer::new());
        app.load_failed("connection refused".to_string());
        assert!(matches!(app.phase, LoadPhase::Failed(_)));

        // A reload failure with data on screen keeps the dataset
        let mut app = app_with_fixture();
        app.begin_loading();
        app.load_failed("connection refused".to_string());
        assert_eq!(app.phase, LoadPhase::Ready);
        assert_eq!(app.master().len(), 4);
    }
}
