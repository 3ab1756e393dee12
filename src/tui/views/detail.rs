// Overlay rendering: country detail and help
//
// Overlays are rendered on top of the grid in a centered rect that is
// cleared first. The detail projection (DetailView) is pure so the
// field formatting is testable without a terminal.

use crate::countries::Country;
use crate::tui::app::App;
use crate::tui::components::formatters::group_thousands;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// What the detail overlay displays - a pure projection of one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Flag emoji plus common name
    pub title: String,
    pub capital: String,
    /// Population with thousands grouping
    pub population: String,
    pub region: String,
    /// "Name (CODE)" for every currency, comma-joined, or "N/A"
    pub currencies: String,
    pub code: String,
    pub map_url: String,
    pub flag_url: String,
}

impl DetailView {
    pub fn from(country: &Country) -> Self {
        let title = if country.flag.is_empty() {
            country.common_name().to_string()
        } else {
            format!("{} {}", country.flag, country.common_name())
        };

        Self {
            title,
            capital: country.first_capital().to_string(),
            population: group_thousands(country.population),
            region: country.region.clone(),
            currencies: country.currency_summary(),
            code: country.cca3.clone(),
            map_url: country.maps.google_maps.clone(),
            flag_url: country.flags.svg.clone(),
        }
    }
}

/// Calculate centered rect for an overlay
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the country detail overlay for a master-list index.
///
/// An index past the end means the list was replaced under an open
/// overlay; nothing is drawn and the caller's close path handles it.
pub fn render_detail(f: &mut Frame, app: &mut App, master_idx: usize) {
    let Some(country) = app.master().get(master_idx) else {
        return;
    };
    let view = DetailView::from(country);

    let label = Style::default().fg(app.theme.muted);
    let value = Style::default().fg(app.theme.foreground);
    let field = |name: &str, content: &str| -> Line {
        Line::from(vec![
            Span::styled(format!("  {name:<12}"), label),
            Span::styled(content.to_string(), value),
        ])
    };

    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("  {}", view.title),
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        field("Capital", &view.capital),
        field("Population", &view.population),
        field("Region", &view.region),
        field("Currency", &view.currencies),
        field("Alpha code", &view.code),
        Line::raw(""),
    ];

    if !view.map_url.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("  Map         ", label),
            Span::styled(view.map_url.clone(), Style::default().fg(app.theme.accent)),
        ]));
    }
    if !view.flag_url.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("  Flag        ", label),
            Span::styled(view.flag_url.clone(), Style::default().fg(app.theme.accent)),
        ]));
    }

    let frame_area = f.area();
    let width = (frame_area.width * 70 / 100).clamp(40, 90);
    let height = (lines.len() as u16 + 3).min(frame_area.height);
    let area = centered_rect(width, height, frame_area);
    app.overlay_area = Some(area);

    // Clear the area behind the overlay
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .title(" Country ")
                .title_bottom(Line::from(" Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

/// Render the help overlay
pub fn render_help(f: &mut Frame, app: &mut App) {
    let key_style = Style::default().fg(app.theme.accent);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<14}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Searching", header_style)),
        kb("a-z …", "Type into the search bar"),
        kb("Backspace", "Delete last character"),
        kb("Esc", "Clear search / quit when empty"),
        Line::raw(""),
        Line::from(Span::styled("  Filters", header_style)),
        kb("Tab", "Focus next control"),
        kb("Shift+Tab", "Focus previous control"),
        kb("↑/↓ or ◂/▸", "Cycle focused selector"),
        Line::raw(""),
        Line::from(Span::styled("  Grid", header_style)),
        kb("↑ ↓ ← →", "Move card selection"),
        kb("PgUp/PgDn", "Jump a page of cards"),
        kb("Home/End", "First / last card"),
        kb("Enter", "Open country detail"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("F1", "Toggle this help"),
        kb("F5, Ctrl+R", "Reload the dataset"),
        kb("Ctrl+C", "Quit"),
    ]);

    let height = content.lines.len() as u16 + 2;
    let area = centered_rect(46, height, f.area());
    app.overlay_area = Some(area);

    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .title(" Help ")
                .title_bottom(Line::from(" Press F1 or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::test_fixtures::{country, with_currency};

    #[test]
    fn detail_view_formats_every_field() {
        let mut record = with_currency(
            country("USA", "United States", "Americas", 331_000_000),
            "USD",
            "United States dollar",
        );
        record.capital = vec!["Washington, D.C.".to_string()];
        record.maps.google_maps = "https://goo.gl/maps/example".to_string();

        let view = DetailView::from(&record);
        assert_eq!(view.population, "331,000,000");
        assert_eq!(view.capital, "Washington, D.C.");
        assert_eq!(view.currencies, "United States dollar (USD)");
        assert_eq!(view.code, "USA");
        assert_eq!(view.map_url, "https://goo.gl/maps/example");
    }

    #[test]
    fn detail_view_uses_placeholders_for_missing_fields() {
        let mut record = country("ATA", "Antarctica", "Antarctic", 1_000);
        record.capital.clear();

        let view = DetailView::from(&record);
        assert_eq!(view.capital, "N/A");
        assert_eq!(view.currencies, "N/A");
    }
}
