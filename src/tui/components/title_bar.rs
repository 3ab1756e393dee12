// Title bar component
//
// Renders the app title with the dataset source on the right.

use crate::config::VERSION;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the title bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let mut spans = vec![
        Span::styled(
            " 🌍 terradex ",
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("v{VERSION}"), Style::default().fg(app.theme.muted)),
    ];

    // Source endpoint only when there is room for it
    if bp.at_least(Breakpoint::Normal) && !app.config.demo_mode {
        spans.push(Span::styled(
            format!("  {}", app.config.endpoint),
            Style::default().fg(app.theme.muted),
        ));
    }
    if app.config.demo_mode {
        spans.push(Span::styled(
            "  [demo dataset]",
            Style::default().fg(app.theme.highlight),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
