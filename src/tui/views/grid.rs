// Card grid view
//
// Projects the filtered subset into a responsive grid of country
// cards. The pure projection (CardView) is separated from the
// side-effecting render so it can be tested against fixtures.
//
// The grid also owns the non-data states of the content slot: the
// loading spinner, the load-failure panel, and the empty-result
// placeholder.

use crate::countries::Country;
use crate::tui::app::{App, LoadPhase};
use crate::tui::components::formatters::truncate_to_width;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rendered height of one card, borders included
const CARD_HEIGHT: u16 = 5;

/// What one card displays - a pure projection of a country record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Lookup key carried for detail activation
    pub code: String,
    /// Flag emoji plus common name
    pub title: String,
    pub region: String,
    /// First currency name, or the placeholder
    pub currency: String,
}

impl CardView {
    pub fn from(country: &Country) -> Self {
        let title = if country.flag.is_empty() {
            country.common_name().to_string()
        } else {
            format!("{} {}", country.flag, country.common_name())
        };

        Self {
            code: country.cca3.clone(),
            title,
            region: country.region.clone(),
            currency: country.first_currency_name().to_string(),
        }
    }
}

/// Render the content slot
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    match &app.phase {
        LoadPhase::Loading => render_loading(f, area, app),
        LoadPhase::Failed(message) => {
            let message = message.clone();
            render_failed(f, area, app, &message);
        }
        LoadPhase::Ready => {
            if app.filtered.is_empty() {
                render_no_matches(f, area, app);
            } else {
                render_cards(f, area, app);
            }
        }
    }
}

fn render_loading(f: &mut Frame, area: Rect, app: &App) {
    let text = format!("{} Loading countries…", app.spinner());
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(app.theme.loading))
        .centered();
    f.render_widget(paragraph, vertically_centered(area));
}

fn render_failed(f: &mut Frame, area: Rect, app: &App, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            "Connection error",
            Style::default()
                .fg(app.theme.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(app.theme.muted),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "Press F5 to retry",
            Style::default().fg(app.theme.foreground),
        )),
    ];
    let paragraph = Paragraph::new(lines).centered();
    f.render_widget(paragraph, vertically_centered(area));
}

fn render_no_matches(f: &mut Frame, area: Rect, app: &App) {
    let paragraph = Paragraph::new("No countries match your search.")
        .style(Style::default().fg(app.theme.muted))
        .centered();
    f.render_widget(paragraph, vertically_centered(area));
}

/// Shrink an area to a single centered line
fn vertically_centered(area: Rect) -> Rect {
    let y = area.y + area.height / 2;
    Rect::new(area.x, y.min(area.y + area.height.saturating_sub(1)), area.width, 1)
}

/// Render the card grid proper
fn render_cards(f: &mut Frame, area: Rect, app: &mut App) {
    let columns = Breakpoint::from_width(area.width).grid_columns();
    let rows_visible = (area.height / CARD_HEIGHT).max(1) as usize;

    // Sync geometry so grid navigation in App matches what is on screen
    app.grid_columns = columns;
    app.grid_rows_visible = rows_visible;

    let card_width = area.width / columns as u16;
    let total_rows = app.filtered.len().div_ceil(columns);

    // Clamp the scroll window now that geometry is known
    if app.scroll_row + rows_visible > total_rows {
        app.scroll_row = total_rows.saturating_sub(rows_visible);
    }

    let first_cell = app.scroll_row * columns;

    for (slot, &master_idx) in app
        .filtered
        .iter()
        .enumerate()
        .skip(first_cell)
        .take(rows_visible * columns)
    {
        let row = (slot - first_cell) / columns;
        let col = (slot - first_cell) % columns;

        let cell = Rect::new(
            area.x + col as u16 * card_width,
            area.y + row as u16 * CARD_HEIGHT,
            card_width,
            CARD_HEIGHT,
        );

        let selected = slot == app.selected;
        render_card(f, cell, app, &app.master()[master_idx], selected);
    }
}

/// Render a single country card
fn render_card(f: &mut Frame, area: Rect, app: &App, country: &Country, selected: bool) {
    let card = CardView::from(country);
    // Border plus one space of padding each side
    let inner_width = area.width.saturating_sub(4) as usize;

    let (border_color, border_mod) = if selected {
        (app.theme.highlight, Modifier::BOLD)
    } else {
        (app.theme.border, Modifier::empty())
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", truncate_to_width(&card.title, inner_width)),
            Style::default()
                .fg(app.theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" Region: ", Style::default().fg(app.theme.muted)),
            Span::styled(
                truncate_to_width(&card.region, inner_width.saturating_sub(8)),
                Style::default().fg(app.theme.foreground),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Currency: ", Style::default().fg(app.theme.muted)),
            Span::styled(
                truncate_to_width(&card.currency, inner_width.saturating_sub(10)),
                Style::default().fg(app.theme.accent),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).add_modifier(border_mod));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
