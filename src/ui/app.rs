use crate::meal::Meal;
use crate::search::{SearchOutcome, SearchRequest};
use crate::ui::theme::Theme;
use ratatui::layout::{Position, Rect};

/// The only failure text users ever see.
pub const GENERIC_ERROR: &str = "Error fetching recipes";

/// Cards per row in the results grid.
pub const GRID_COLUMNS: usize = 2;

/// What the results area is showing. Exactly one of these holds at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Failed(String),
    Ready(Vec<Meal>),
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    /// Meals of a completed search; empty in every other state.
    pub fn results(&self) -> &[Meal] {
        match self {
            SearchState::Ready(meals) => meals,
            _ => &[],
        }
    }
}

/// The detail overlay. An open overlay always owns the meal it shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Closed,
    Open { meal: Meal, scroll: u16 },
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        matches!(self, Overlay::Open { .. })
    }

    pub fn meal(&self) -> Option<&Meal> {
        match self {
            Overlay::Open { meal, .. } => Some(meal),
            Overlay::Closed => None,
        }
    }

    pub fn scroll(&self) -> u16 {
        match self {
            Overlay::Open { scroll, .. } => *scroll,
            Overlay::Closed => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Results,
}

pub struct App {
    pub query: String,
    pub state: SearchState,
    pub overlay: Overlay,
    pub focus: Focus,
    pub selected_index: usize,
    pub should_quit: bool,
    pub theme: Theme,
    /// Frame counter driving the loading shimmer.
    pub tick: u64,
    generation: u64,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            query: String::new(),
            state: SearchState::Idle,
            overlay: Overlay::Closed,
            focus: Focus::Input,
            selected_index: 0,
            should_quit: false,
            theme,
            tick: 0,
            generation: 0,
        }
    }

    /// Generation of the most recently submitted search (0 before any).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    pub fn focus_results(&mut self) {
        self.focus = Focus::Results;
    }

    pub fn advance_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next().clone();
    }

    /// Commit the current query. Returns the request to dispatch, or `None`
    /// (with nothing changed) when the query is empty.
    pub fn submit_search(&mut self) -> Option<SearchRequest> {
        if self.query.is_empty() {
            return None;
        }

        self.generation += 1;
        self.state = SearchState::Loading;

        Some(SearchRequest {
            generation: self.generation,
            query: self.query.clone(),
        })
    }

    /// Apply a finished search. Outcomes for anything but the latest
    /// submitted search are discarded; returns whether state changed.
    pub fn complete_search(&mut self, outcome: SearchOutcome) -> bool {
        if outcome.generation != self.generation {
            log::debug!(
                "Discarding stale search #{} (latest is #{})",
                outcome.generation,
                self.generation
            );
            return false;
        }

        self.state = match outcome.result {
            Ok(meals) => SearchState::Ready(meals),
            Err(_) => SearchState::Failed(GENERIC_ERROR.to_string()),
        };
        self.selected_index = 0;
        true
    }

    pub fn results(&self) -> &[Meal] {
        self.state.results()
    }

    pub fn selected_meal(&self) -> Option<&Meal> {
        self.results().get(self.selected_index)
    }

    pub fn select(&mut self, index: usize) {
        if index < self.results().len() {
            self.selected_index = index;
        }
    }

    pub fn move_left(&mut self) {
        if self.selected_index % GRID_COLUMNS > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_right(&mut self) {
        let next = self.selected_index + 1;
        if next % GRID_COLUMNS != 0 && next < self.results().len() {
            self.selected_index = next;
        }
    }

    /// Move one row up. Returns `false` when already on the top row.
    pub fn move_up(&mut self) -> bool {
        if self.selected_index < GRID_COLUMNS {
            return false;
        }
        self.selected_index -= GRID_COLUMNS;
        true
    }

    /// Move one row down, landing on the last card if the row below is short.
    pub fn move_down(&mut self) {
        let count = self.results().len();
        if count == 0 {
            return;
        }
        let row = self.selected_index / GRID_COLUMNS;
        let last_row = (count - 1) / GRID_COLUMNS;
        if row < last_row {
            self.selected_index = (self.selected_index + GRID_COLUMNS).min(count - 1);
        }
    }

    /// Open the overlay on the card at `index`. Re-opening the card that is
    /// already shown leaves the overlay as it is.
    pub fn open_card(&mut self, index: usize) {
        let Some(meal) = self.results().get(index).cloned() else {
            return;
        };
        self.selected_index = index;

        if self.overlay.meal() == Some(&meal) {
            return;
        }
        self.overlay = Overlay::Open { meal, scroll: 0 };
    }

    pub fn open_selected(&mut self) {
        self.open_card(self.selected_index);
    }

    /// Explicit dismiss. No-op when already closed.
    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::Closed;
    }

    /// A pointer-down landed at `position`. Closes the overlay when it is
    /// open and the position lies outside `overlay_area`. Returns whether it
    /// closed.
    pub fn pointer_down(&mut self, position: Position, overlay_area: Rect) -> bool {
        if self.overlay.is_open() && !overlay_area.contains(position) {
            self.close_overlay();
            return true;
        }
        false
    }

    /// Scroll the overlay down, stopping at `max` (see
    /// [`overlay_max_scroll`](crate::ui::render::overlay_max_scroll)).
    pub fn scroll_overlay_down(&mut self, lines: u16, max: u16) {
        if let Overlay::Open { scroll, .. } = &mut self.overlay {
            *scroll = scroll.saturating_add(lines).min(max);
        }
    }

    pub fn scroll_overlay_up(&mut self, lines: u16) {
        if let Overlay::Open { scroll, .. } = &mut self.overlay {
            *scroll = scroll.saturating_sub(lines);
        }
    }
}
