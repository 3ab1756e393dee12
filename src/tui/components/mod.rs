// Components module - reusable UI building blocks
//
// Shell components are rendered on every frame:
// - Title bar: app name, version, dataset source
// - Search bar: free-text name filter
// - Filter bar: region and population-bucket selectors
// - Status bar: counts, load phase, latest warning
//
// Each component is a focused, single-responsibility module.

pub mod filter_bar;
pub mod formatters;
pub mod search_bar;
pub mod status_bar;
pub mod title_bar;

// Re-export render functions for convenient access
// Usage: components::title_bar::render(f, area, app)
//    or: components::render_title(f, area, app)

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the search bar (convenience wrapper)
pub fn render_search(f: &mut Frame, area: Rect, app: &App) {
    search_bar::render(f, area, app);
}

/// Render the filter selectors (convenience wrapper)
pub fn render_filters(f: &mut Frame, area: Rect, app: &App) {
    filter_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}
