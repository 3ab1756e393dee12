// Filter bar component
//
// Two side-by-side selectors: region and population bucket. The
// focused selector reacts to Up/Down (or Left/Right) by cycling its
// value; every change is an input-change event for the filter engine.

use crate::tui::app::{App, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render both selectors
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_selector(
        f,
        halves[0],
        app,
        " Region ",
        app.region_label(),
        app.focus == Focus::Region,
    );
    render_selector(
        f,
        halves[1],
        app,
        " Population ",
        app.bucket_label(),
        app.focus == Focus::Bucket,
    );
}

/// One bordered selector with cycling arrows when focused
fn render_selector(
    f: &mut Frame,
    area: Rect,
    app: &App,
    title: &str,
    value: &str,
    focused: bool,
) {
    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.border
    };

    let value_style = if focused {
        Style::default()
            .fg(app.theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.foreground)
    };

    let line = if focused {
        Line::from(vec![
            Span::styled("◂ ", Style::default().fg(app.theme.muted)),
            Span::styled(value.to_string(), value_style),
            Span::styled(" ▸", Style::default().fg(app.theme.muted)),
        ])
    } else {
        Line::from(Span::styled(value.to_string(), value_style))
    };

    let selector = Paragraph::new(line).centered().block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title.to_string()),
    );

    f.render_widget(selector, area);
}
