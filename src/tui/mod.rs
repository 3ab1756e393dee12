// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, loader results, debounce)
// - Rendering the UI
//
// Input dispatch is layered: an open modal absorbs everything, then
// global keys, then the focused control.

pub mod app;
pub mod components;
pub mod debounce;
pub mod layout;
pub mod modal;
pub mod views;

use crate::config::Config;
use crate::countries::Country;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, Focus, LoadPhase};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::ModalAction;
use ratatui::{backend::CrosstermBackend, layout::Position, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Result of one load cycle, delivered from the loader task
#[derive(Debug)]
pub enum LoadEvent {
    /// A sorted master list ready to install
    Loaded(Vec<Country>),
    /// The load failed; human-readable cause
    Failed(String),
}

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and cleans up when done.
/// `load_rx` delivers load results; `reload_tx` asks the loader task
/// for another cycle.
pub async fn run_tui(
    config: Config,
    log_buffer: LogBuffer,
    mut load_rx: mpsc::Receiver<LoadEvent>,
    reload_tx: mpsc::Sender<()>,
) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(config, log_buffer);

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut load_rx, &reload_tx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// tokio::select! waits on four sources at once:
/// 1. Keyboard / mouse input
/// 2. Timer ticks (spinner animation, periodic redraw)
/// 3. Loader results (master list installation)
/// 4. The debounce deadline (filter recomputation)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    load_rx: &mut mpsc::Receiver<LoadEvent>,
    reload_tx: &mpsc::Sender<()>,
) -> Result<()> {
    // Periodic redraw ticker (5 FPS is plenty for a spinner)
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        // Draw the UI
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        // Snapshot the deadline before select!: the input future below
        // captures `app` mutably, so no other future may borrow it
        let debounce_deadline = app.debouncer.deadline();

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event, reload_tx),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            // Loader results
            Some(load_event) = load_rx.recv() => {
                handle_load_event(app, load_event);
            }

            // Debounce deadline: recompute the filter with the latest
            // query state. Re-arming while we sleep restarts the wait
            // on the next loop iteration (last-write-wins).
            _ = wait_for_deadline(debounce_deadline) => {
                app.fire_debounce(Instant::now());
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Sleep until the debounce deadline, or forever when none is armed
async fn wait_for_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => {
            tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await
        }
        None => std::future::pending().await,
    }
}

/// Install a load result into the app state
fn handle_load_event(app: &mut App, load_event: LoadEvent) {
    match load_event {
        LoadEvent::Loaded(countries) => {
            app.set_master(countries);
        }
        LoadEvent::Failed(message) => {
            tracing::error!("load failed: {message}");
            app.load_failed(message);
        }
    }
}

/// Handle keyboard input
/// Layered dispatch: Modal → Global → Focused control
fn handle_key_event(app: &mut App, key_event: KeyEvent, reload_tx: &mpsc::Sender<()>) {
    // Press and Repeat both act; Release is ignored
    if key_event.kind == KeyEventKind::Release {
        return;
    }

    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: Global keys (work regardless of focus)
    if handle_global_keys(app, &key_event, reload_tx) {
        return;
    }

    // Layer 3: The focused control
    let now = Instant::now();
    match app.focus {
        Focus::Search => handle_search_keys(app, &key_event, now),
        Focus::Region => handle_selector_keys(app, &key_event, now, true),
        Focus::Bucket => handle_selector_keys(app, &key_event, now, false),
    }
}

/// Handle mouse input: wheel scrolls the grid selection; a click on
/// the background outside an open overlay dismisses it
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if app.modal.is_some() {
        if let MouseEventKind::Down(_) = mouse_event.kind {
            let position = Position::new(mouse_event.column, mouse_event.row);
            let on_panel = app
                .overlay_area
                .is_some_and(|area| area.contains(position));
            if !on_panel {
                app.close_modal();
            }
        }
        return;
    }
    match mouse_event.kind {
        MouseEventKind::ScrollUp => app.select_up(),
        MouseEventKind::ScrollDown => app.select_down(),
        _ => {}
    }
}

/// Handle modal input - returns true if a modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.close_modal(),
    }

    true // Modal absorbed the input
}

/// Handle global keys - returns true if handled
fn handle_global_keys(app: &mut App, key_event: &KeyEvent, reload_tx: &mpsc::Sender<()>) -> bool {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        // Quit: Ctrl+C (plain letters belong to the search bar)
        KeyCode::Char('c') | KeyCode::Char('C') if ctrl => {
            app.should_quit = true;
            true
        }
        // Help overlay
        KeyCode::F(1) => {
            app.modal = Some(modal::Modal::Help);
            true
        }
        // Reload the dataset, replacing the master list wholesale
        KeyCode::F(5) => {
            request_reload(app, reload_tx);
            true
        }
        KeyCode::Char('r') | KeyCode::Char('R') if ctrl => {
            request_reload(app, reload_tx);
            true
        }
        // Focus cycling
        KeyCode::Tab => {
            app.focus = app.focus.next();
            true
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            true
        }
        // Esc is layered: leave a selector, else clear search, else quit
        KeyCode::Esc => {
            if app.focus != Focus::Search {
                app.focus = Focus::Search;
            } else if !app.search_clear(Instant::now()) {
                app.should_quit = true;
            }
            true
        }
        _ => false,
    }
}

/// Ask the loader task for a fresh cycle, unless one is running
fn request_reload(app: &mut App, reload_tx: &mpsc::Sender<()>) {
    if app.phase == LoadPhase::Loading {
        return;
    }
    if reload_tx.try_send(()).is_ok() {
        tracing::info!("reloading country dataset");
        app.begin_loading();
    }
}

/// Keys for the search bar: text editing plus grid navigation
fn handle_search_keys(app: &mut App, key_event: &KeyEvent, now: Instant) {
    // Ctrl-modified characters are not text input
    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }

    match key_event.code {
        KeyCode::Char(c) => app.search_push(c, now),
        KeyCode::Backspace => app.search_pop(now),
        KeyCode::Enter => app.open_detail_selected(),
        // Grid navigation stays available while typing
        KeyCode::Up => app.select_up(),
        KeyCode::Down => app.select_down(),
        KeyCode::Left => app.select_left(),
        KeyCode::Right => app.select_right(),
        KeyCode::PageUp => app.select_page_up(),
        KeyCode::PageDown => app.select_page_down(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),
        _ => {}
    }
}

/// Keys for a focused selector: cycle its value
fn handle_selector_keys(app: &mut App, key_event: &KeyEvent, now: Instant, region: bool) {
    match key_event.code {
        KeyCode::Up | KeyCode::Left => {
            if region {
                app.region_prev(now);
            } else {
                app.bucket_prev(now);
            }
        }
        KeyCode::Down | KeyCode::Right => {
            if region {
                app.region_next(now);
            } else {
                app.bucket_next(now);
            }
        }
        KeyCode::Enter => app.open_detail_selected(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::test_fixtures::country;

    fn app_with_fixture() -> App {
        let mut app = App::with_config(Config::default(), LogBuffer::new());
        app.set_master(vec![
            country("FRA", "France", "Europe", 67_000_000),
            country("USA", "United States", "Americas", 331_000_000),
        ]);
        app
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_goes_to_search_and_arms_debounce() {
        let mut app = app_with_fixture();
        let (tx, _rx) = mpsc::channel(1);

        handle_key_event(&mut app, press(KeyCode::Char('f')), &tx);
        handle_key_event(&mut app, press(KeyCode::Char('r')), &tx);
        assert_eq!(app.search, "fr");
        assert!(app.debouncer.is_pending());
    }

    #[test]
    fn modal_absorbs_input_until_closed() {
        let mut app = app_with_fixture();
        let (tx, _rx) = mpsc::channel(1);

        handle_key_event(&mut app, press(KeyCode::Enter), &tx);
        assert!(app.modal.is_some());

        // Typing while the overlay is open must not reach the search bar
        handle_key_event(&mut app, press(KeyCode::Char('x')), &tx);
        assert_eq!(app.search, "");

        handle_key_event(&mut app, press(KeyCode::Esc), &tx);
        assert!(app.modal.is_none());
    }

    #[test]
    fn esc_layering_clears_search_before_quitting() {
        let mut app = app_with_fixture();
        let (tx, _rx) = mpsc::channel(1);

        handle_key_event(&mut app, press(KeyCode::Char('f')), &tx);
        handle_key_event(&mut app, press(KeyCode::Esc), &tx);
        assert_eq!(app.search, "");
        assert!(!app.should_quit);

        handle_key_event(&mut app, press(KeyCode::Esc), &tx);
        assert!(app.should_quit);
    }

    #[test]
    fn reload_key_marks_loading_and_signals_loader() {
        let mut app = app_with_fixture();
        let (tx, mut rx) = mpsc::channel(1);

        handle_key_event(&mut app, press(KeyCode::F(5)), &tx);
        assert_eq!(app.phase, LoadPhase::Loading);
        assert!(rx.try_recv().is_ok());

        // A second reload while one is outstanding is ignored
        handle_key_event(&mut app, press(KeyCode::F(5)), &tx);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn tab_cycles_focus_through_all_controls() {
        let mut app = app_with_fixture();
        let (tx, _rx) = mpsc::channel(1);

        assert_eq!(app.focus, Focus::Search);
        handle_key_event(&mut app, press(KeyCode::Tab), &tx);
        assert_eq!(app.focus, Focus::Region);
        handle_key_event(&mut app, press(KeyCode::Tab), &tx);
        assert_eq!(app.focus, Focus::Bucket);
        handle_key_event(&mut app, press(KeyCode::Tab), &tx);
        assert_eq!(app.focus, Focus::Search);
    }
}
