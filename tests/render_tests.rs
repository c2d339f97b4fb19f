//! Rendering tests
//!
//! Draws the widget into a ratatui `TestBackend` and checks the visible text
//! for each search state.

use meal_explorer::meal::Meal;
use meal_explorer::ui::app::{Overlay, SearchState, GENERIC_ERROR};
use meal_explorer::ui::layout::{self, AppLayout, CARD_HEIGHT};
use meal_explorer::ui::render::{NO_RESULTS, PLACEHOLDER_CARDS};
use meal_explorer::ui::theme::Theme;
use meal_explorer::ui::{render, App};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 40;

fn draw(app: &App) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|f| render(f, app)).unwrap();
    terminal
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn region_text(terminal: &Terminal<TestBackend>, area: Rect) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn app_in(state: SearchState) -> App {
    let mut app = App::new(Theme::default_theme().clone());
    app.state = state;
    app
}

fn meal(name: &str) -> Meal {
    [
        ("strMeal", name),
        ("strMealThumb", "https://example.com/thumb.jpg"),
        ("strInstructions", "Boil water.\nAdd pasta."),
        ("strIngredient1", "Penne"),
        ("strMeasure1", "1 pound"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_idle_shows_no_results_message() {
    let terminal = draw(&app_in(SearchState::Idle));
    let text = screen_text(&terminal);
    assert!(text.contains("MealExplorer"));
    assert!(text.contains(NO_RESULTS));
}

#[test]
fn test_loading_draws_six_placeholders() {
    let terminal = draw(&app_in(SearchState::Loading));
    let results = AppLayout::new(Rect::new(0, 0, WIDTH, HEIGHT)).results;

    let cards = layout::card_grid(results, PLACEHOLDER_CARDS, 0);
    assert_eq!(cards.len(), PLACEHOLDER_CARDS);

    for (_, card) in cards {
        let text = region_text(&terminal, card);
        assert!(text.contains('█'), "placeholder card should have skeleton bars");
    }
    assert!(!screen_text(&terminal).contains(NO_RESULTS));
}

#[test]
fn test_error_is_sole_content() {
    let terminal = draw(&app_in(SearchState::Failed(GENERIC_ERROR.to_string())));
    let results = AppLayout::new(Rect::new(0, 0, WIDTH, HEIGHT)).results;
    let text = region_text(&terminal, results);

    assert!(text.contains(GENERIC_ERROR));
    assert!(!text.contains('█'));
    assert!(!text.contains(NO_RESULTS));
}

#[test]
fn test_empty_results_message() {
    let terminal = draw(&app_in(SearchState::Ready(vec![])));
    assert!(screen_text(&terminal).contains(NO_RESULTS));
}

#[test]
fn test_one_card_per_result() {
    let app = app_in(SearchState::Ready(vec![
        meal("Spicy Arrabiata Penne"),
        meal("Penne Arrabiata"),
        meal("Arrabiata Shrimp"),
    ]));
    let terminal = draw(&app);
    let text = screen_text(&terminal);

    assert!(text.contains("Spicy Arrabiata Penne"));
    assert!(text.contains("Penne Arrabiata"));
    assert!(text.contains("Arrabiata Shrimp"));
    assert!(text.contains("https://example.com/thumb.jpg"));
}

#[test]
fn test_grid_scrolls_to_selected_card() {
    let meals: Vec<Meal> = (0..20).map(|i| meal(&format!("Dish {i:02}"))).collect();
    let mut app = app_in(SearchState::Ready(meals));
    app.focus_results();
    app.select(19);

    let text = screen_text(&draw(&app));
    assert!(text.contains("Dish 19"));
    assert!(!text.contains("Dish 00"));

    let results = AppLayout::new(Rect::new(0, 0, WIDTH, HEIGHT)).results;
    assert!(results.height / CARD_HEIGHT < 10, "test needs a grid that overflows");
}

#[test]
fn test_overlay_shows_full_record() {
    let mut app = app_in(SearchState::Ready(vec![meal("Spicy Arrabiata Penne")]));
    app.open_card(0);

    let terminal = draw(&app);
    let overlay = layout::overlay_area(Rect::new(0, 0, WIDTH, HEIGHT));
    let text = region_text(&terminal, overlay);

    assert!(text.contains("Spicy Arrabiata Penne"));
    assert!(text.contains("https://example.com/thumb.jpg"));
    assert!(text.contains("Ingredients:"));
    assert!(text.contains("Penne - 1 pound"));
    assert!(text.contains("Instructions:"));
    assert!(text.contains("Add pasta."));
    assert!(text.contains("[x]"));
}

#[test]
fn test_overlay_scroll_past_end_still_shows_last_line() {
    let mut app = app_in(SearchState::Ready(vec![meal("Spicy Arrabiata Penne")]));
    app.open_card(0);
    app.overlay = Overlay::Open {
        meal: app.overlay.meal().unwrap().clone(),
        scroll: u16::MAX,
    };

    let terminal = draw(&app);
    let overlay = layout::overlay_area(Rect::new(0, 0, WIDTH, HEIGHT));
    assert!(region_text(&terminal, overlay).contains("Add pasta."));
}
