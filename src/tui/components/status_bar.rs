// Status bar component
//
// Shows the visible/total record count, the load phase, and the most
// recent warning from the log buffer.

use crate::logging::LogLevel;
use crate::tui::app::{App, LoadPhase};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let phase_text = match &app.phase {
        LoadPhase::Loading => format!("{} loading", app.spinner()),
        LoadPhase::Ready => format!("{} / {} countries", app.filtered.len(), app.master().len()),
        LoadPhase::Failed(_) => "load failed".to_string(),
    };

    let mut spans = vec![Span::styled(
        format!(" {phase_text}"),
        Style::default().fg(app.theme.status_bar),
    )];

    // Keybinding hints when there is room
    if bp.at_least(Breakpoint::Normal) {
        spans.push(Span::styled(
            "  │  Tab focus · Enter detail · F1 help · F5 reload · Ctrl+C quit",
            Style::default().fg(app.theme.muted),
        ));
    }

    // Surface the latest warning or error so problems are visible
    // without a log panel
    if let Some(entry) = app.log_buffer.latest_at_least(LogLevel::Warn) {
        spans.push(Span::styled(
            format!("  │  {} {}", entry.level.as_str(), entry.message),
            Style::default().fg(app.theme.error),
        ));
    }

    let status = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
