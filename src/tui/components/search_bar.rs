// Search bar component
//
// A single-line text input for the name filter. Focus is shown through
// the border color; a block cursor marks the insertion point.

use crate::tui::app::{App, Focus};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the search input
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Search;

    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.border
    };

    let mut spans = Vec::new();
    if app.search.is_empty() {
        spans.push(Span::styled(
            "type to search by name",
            Style::default().fg(app.theme.muted),
        ));
    } else {
        spans.push(Span::styled(
            app.search.as_str(),
            Style::default().fg(app.theme.foreground),
        ));
    }
    if focused {
        spans.push(Span::styled(
            "█",
            Style::default().fg(app.theme.accent),
        ));
    }

    let title = if focused {
        " Search (Esc clears) "
    } else {
        " Search "
    };

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(input, area);
}
