// Views module - screen-level rendering logic
//
// The directory is a single screen: shell components (title, search,
// filters, status) around a content slot that shows the card grid, plus
// overlays rendered on top. This module composes the frame.

mod detail;
mod grid;

pub use detail::DetailView;
pub use grid::CardView;

use super::app::App;
use super::modal::Modal;
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to the entire frame
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    // Shell layout: title / search / filters / content / status
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(f.area());

    components::render_title(f, chunks[0], app);
    components::render_search(f, chunks[1], app);
    components::render_filters(f, chunks[2], app);
    grid::render(f, chunks[3], app);
    components::render_status(f, chunks[4], app);

    // Render modal overlay (on top of everything)
    match app.modal.clone() {
        Some(Modal::Help) => detail::render_help(f, app),
        Some(Modal::Detail(master_idx)) => detail::render_detail(f, app, master_idx),
        None => app.overlay_area = None,
    }
}
