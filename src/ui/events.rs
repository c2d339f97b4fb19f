//! Translates terminal events into [`App`] changes.
//!
//! [`handle_event`] mutates the app and returns an [`Action`] for the things
//! only the run loop can do: dispatching a search, persisting the theme, and
//! quitting.
//!
//! Key handling depends on where input goes:
//!
//! - **Overlay open** - Esc/q/x close, j/k/arrows/PageUp/PageDown scroll.
//! - **Search input** - typing edits the query, Enter submits, Tab/Down/Esc
//!   move to the results grid.
//! - **Results grid** - arrows/hjkl move, Enter opens, `/` or Tab returns to
//!   the input, `t` cycles the theme, `q` quits.
//!
//! Ctrl+C quits from anywhere.

use crate::search::SearchRequest;
use crate::ui::app::{App, Focus};
use crate::ui::layout::{self, AppLayout};
use crate::ui::render::overlay_max_scroll;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

const PAGE_LINES: u16 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    /// Dispatch this request.
    Search(SearchRequest),
    /// The theme changed and should be saved.
    ThemeChanged,
    Quit,
}

/// Apply `event` to `app`. `area` is the full terminal area the last frame
/// was drawn into, used to hit-test mouse events.
pub fn handle_event(app: &mut App, event: &Event, area: Rect) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, *key, area),
        Event::Mouse(mouse) => handle_mouse(app, *mouse, area),
        _ => Action::None,
    }
}

fn handle_key(app: &mut App, key: KeyEvent, area: Rect) -> Action {
    let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if has_ctrl && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return Action::Quit;
    }

    if app.overlay.is_open() {
        let max = overlay_max_scroll(app, layout::overlay_area(area));
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('x') => app.close_overlay(),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_overlay_down(1, max),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_overlay_up(1),
            KeyCode::PageDown => app.scroll_overlay_down(PAGE_LINES, max),
            KeyCode::PageUp => app.scroll_overlay_up(PAGE_LINES),
            _ => {}
        }
        return Action::None;
    }

    match app.focus {
        Focus::Input => match key.code {
            KeyCode::Enter => return submit(app),
            KeyCode::Char('u') if has_ctrl => app.clear_query(),
            KeyCode::Char(c) if !has_ctrl => app.push_char(c),
            KeyCode::Backspace => app.pop_char(),
            KeyCode::Tab | KeyCode::Down | KeyCode::Esc => app.focus_results(),
            _ => {}
        },
        Focus::Results => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                app.should_quit = true;
                return Action::Quit;
            }
            KeyCode::Char('/') | KeyCode::Tab => app.focus_input(),
            KeyCode::Char('t') => {
                app.cycle_theme();
                return Action::ThemeChanged;
            }
            KeyCode::Left | KeyCode::Char('h') => app.move_left(),
            KeyCode::Right | KeyCode::Char('l') => app.move_right(),
            KeyCode::Down | KeyCode::Char('j') => app.move_down(),
            KeyCode::Up | KeyCode::Char('k') => {
                if !app.move_up() {
                    app.focus_input();
                }
            }
            KeyCode::Enter => app.open_selected(),
            _ => {}
        },
    }

    Action::None
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) -> Action {
    let position = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(_) => {
            if app.overlay.is_open() {
                let overlay = layout::overlay_area(area);
                if layout::close_button_area(overlay).contains(position) {
                    app.close_overlay();
                } else {
                    app.pointer_down(position, overlay);
                }
                return Action::None;
            }

            let screen = AppLayout::new(area);
            if screen.search_button.contains(position) {
                app.focus_input();
                return submit(app);
            }
            if screen.input.contains(position) {
                app.focus_input();
                return Action::None;
            }

            let hit = layout::card_grid(screen.results, app.results().len(), app.selected_index)
                .into_iter()
                .find(|(_, card)| card.contains(position))
                .map(|(index, _)| index);
            if let Some(index) = hit {
                app.focus_results();
                app.open_card(index);
            }
        }
        MouseEventKind::ScrollDown => {
            if app.overlay.is_open() {
                let max = overlay_max_scroll(app, layout::overlay_area(area));
                app.scroll_overlay_down(1, max);
            } else {
                app.move_down();
            }
        }
        MouseEventKind::ScrollUp => {
            if app.overlay.is_open() {
                app.scroll_overlay_up(1);
            } else {
                app.move_up();
            }
        }
        _ => {}
    }

    Action::None
}

fn submit(app: &mut App) -> Action {
    match app.submit_search() {
        Some(request) => Action::Search(request),
        None => Action::None,
    }
}
