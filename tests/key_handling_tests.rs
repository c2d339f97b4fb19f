//! Keyboard and mouse event handling tests
//!
//! Drives `handle_event` with synthetic crossterm events against an 80x30
//! screen.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use meal_explorer::meal::Meal;
use meal_explorer::search::SearchOutcome;
use meal_explorer::ui::app::{Focus, SearchState};
use meal_explorer::ui::layout::{self, AppLayout};
use meal_explorer::ui::render::overlay_max_scroll;
use meal_explorer::ui::theme::Theme;
use meal_explorer::ui::{handle_event, Action, App};
use ratatui::layout::Rect;

const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 30,
};

fn key_event(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        handle_event(app, &key_event(KeyCode::Char(c)), SCREEN);
    }
}

fn create_test_app() -> App {
    App::new(Theme::default_theme().clone())
}

fn app_with_results(names: &[&str]) -> App {
    let mut app = create_test_app();
    app.query = "x".to_string();
    let request = app.submit_search().unwrap();
    app.complete_search(SearchOutcome {
        generation: request.generation,
        result: Ok(names
            .iter()
            .map(|name| [("strMeal", *name)].into_iter().collect::<Meal>())
            .collect()),
    });
    app
}

#[test]
fn test_typing_edits_query() {
    let mut app = create_test_app();
    type_text(&mut app, "soupp");
    handle_event(&mut app, &key_event(KeyCode::Backspace), SCREEN);
    assert_eq!(app.query, "soup");

    handle_event(&mut app, &ctrl('u'), SCREEN);
    assert!(app.query.is_empty());
}

#[test]
fn test_enter_submits_query() {
    let mut app = create_test_app();
    type_text(&mut app, "Arrabiata");

    let action = handle_event(&mut app, &key_event(KeyCode::Enter), SCREEN);
    match action {
        Action::Search(request) => assert_eq!(request.query, "Arrabiata"),
        other => panic!("expected a search, got {other:?}"),
    }
    assert_eq!(app.state, SearchState::Loading);
}

#[test]
fn test_enter_with_empty_query_does_nothing() {
    let mut app = create_test_app();
    let action = handle_event(&mut app, &key_event(KeyCode::Enter), SCREEN);
    assert_eq!(action, Action::None);
    assert_eq!(app.state, SearchState::Idle);
}

#[test]
fn test_key_release_is_ignored() {
    let mut app = create_test_app();
    let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::empty());
    release.kind = KeyEventKind::Release;

    handle_event(&mut app, &Event::Key(release), SCREEN);
    assert!(app.query.is_empty());
}

#[test]
fn test_q_types_in_input_but_quits_in_results() {
    let mut app = create_test_app();
    let action = handle_event(&mut app, &key_event(KeyCode::Char('q')), SCREEN);
    assert_eq!(action, Action::None);
    assert_eq!(app.query, "q");
    assert!(!app.should_quit);

    handle_event(&mut app, &key_event(KeyCode::Tab), SCREEN);
    assert_eq!(app.focus, Focus::Results);
    let action = handle_event(&mut app, &key_event(KeyCode::Char('q')), SCREEN);
    assert_eq!(action, Action::Quit);
    assert!(app.should_quit);
}

#[test]
fn test_ctrl_c_quits_from_anywhere() {
    let mut app = app_with_results(&["Soup"]);
    app.open_card(0);

    let action = handle_event(&mut app, &ctrl('c'), SCREEN);
    assert_eq!(action, Action::Quit);
    assert!(app.should_quit);
}

#[test]
fn test_results_navigation_and_open() {
    let mut app = app_with_results(&["A", "B", "C"]);
    app.focus_results();

    handle_event(&mut app, &key_event(KeyCode::Char('l')), SCREEN);
    handle_event(&mut app, &key_event(KeyCode::Down), SCREEN);
    assert_eq!(app.selected_index, 2);

    handle_event(&mut app, &key_event(KeyCode::Enter), SCREEN);
    assert_eq!(app.overlay.meal().map(Meal::name), Some("C"));
}

#[test]
fn test_up_from_top_row_returns_to_input() {
    let mut app = app_with_results(&["A", "B"]);
    app.focus_results();

    handle_event(&mut app, &key_event(KeyCode::Up), SCREEN);
    assert_eq!(app.focus, Focus::Input);
}

#[test]
fn test_theme_key_reports_change() {
    let mut app = app_with_results(&["A"]);
    app.focus_results();

    let action = handle_event(&mut app, &key_event(KeyCode::Char('t')), SCREEN);
    assert_eq!(action, Action::ThemeChanged);
    assert_ne!(app.theme.name, Theme::default_theme().name);
}

#[test]
fn test_overlay_swallows_keys_and_closes_on_esc() {
    let mut app = app_with_results(&["A"]);
    app.open_card(0);

    handle_event(&mut app, &key_event(KeyCode::Char('j')), SCREEN);
    assert_eq!(app.overlay.scroll(), 1);
    assert!(app.query == "x", "typing must not reach the input");

    handle_event(&mut app, &key_event(KeyCode::Esc), SCREEN);
    assert!(!app.overlay.is_open());
}

#[test]
fn test_overlay_scroll_stops_at_last_line() {
    let mut app = create_test_app();
    app.query = "x".to_string();
    let request = app.submit_search().unwrap();
    let instructions: Vec<String> = (1..=30).map(|i| format!("Step {i}.")).collect();
    let meal: Meal = [
        ("strMeal", "Long Stew".to_string()),
        ("strInstructions", instructions.join("\n")),
    ]
    .into_iter()
    .collect();
    app.complete_search(SearchOutcome {
        generation: request.generation,
        result: Ok(vec![meal]),
    });
    app.open_card(0);

    let max = overlay_max_scroll(&app, layout::overlay_area(SCREEN));
    assert!(max > 0, "content should overflow the overlay");

    for _ in 0..20 {
        handle_event(&mut app, &key_event(KeyCode::PageDown), SCREEN);
    }
    assert_eq!(app.overlay.scroll(), max);

    // One step back is visible immediately
    handle_event(&mut app, &key_event(KeyCode::Char('k')), SCREEN);
    assert_eq!(app.overlay.scroll(), max - 1);
}

#[test]
fn test_click_on_card_opens_it() {
    let mut app = app_with_results(&["A", "B"]);
    let results = AppLayout::new(SCREEN).results;
    let (_, second) = layout::card_grid(results, 2, 0)[1];

    handle_event(&mut app, &click(second.x + 2, second.y + 1), SCREEN);
    assert_eq!(app.focus, Focus::Results);
    assert_eq!(app.overlay.meal().map(Meal::name), Some("B"));
}

#[test]
fn test_click_outside_overlay_closes_it() {
    let mut app = app_with_results(&["A"]);
    app.open_card(0);

    // Inside: stays open
    let overlay = layout::overlay_area(SCREEN);
    handle_event(&mut app, &click(overlay.x + 3, overlay.y + 3), SCREEN);
    assert!(app.overlay.is_open());

    // Top-left corner of the screen is outside
    handle_event(&mut app, &click(0, 0), SCREEN);
    assert!(!app.overlay.is_open());
    assert!(app.overlay.meal().is_none());
}

#[test]
fn test_click_close_button() {
    let mut app = app_with_results(&["A"]);
    app.open_card(0);

    let button = layout::close_button_area(layout::overlay_area(SCREEN));
    handle_event(&mut app, &click(button.x + 1, button.y), SCREEN);
    assert!(!app.overlay.is_open());
}

#[test]
fn test_click_search_button_submits() {
    let mut app = create_test_app();
    app.focus_results();
    app.query = "curry".to_string();

    let button = AppLayout::new(SCREEN).search_button;
    let action = handle_event(&mut app, &click(button.x + 2, button.y + 1), SCREEN);

    assert!(matches!(action, Action::Search(_)));
    assert_eq!(app.focus, Focus::Input);
}

#[test]
fn test_click_outside_when_closed_does_nothing() {
    let mut app = app_with_results(&["A"]);
    // Footer row: no card, no input
    handle_event(&mut app, &click(1, SCREEN.height - 1), SCREEN);
    assert!(!app.overlay.is_open());
}
