//! Screen geometry shared by the renderer and mouse hit-testing.
//!
//! Both sides compute areas from the same terminal size, so a click can be
//! matched against exactly what was drawn.

use crate::ui::app::GRID_COLUMNS;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of one result card, borders included.
pub const CARD_HEIGHT: u16 = 5;

const SEARCH_BUTTON_WIDTH: u16 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub input: Rect,
    pub search_button: Rect,
    pub results: Rect,
    pub footer: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Search row
                Constraint::Min(0),    // Results
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let search_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(SEARCH_BUTTON_WIDTH),
            ])
            .split(rows[1]);

        Self {
            header: rows[0],
            input: search_row[0],
            search_button: search_row[1],
            results: rows[2],
            footer: rows[3],
        }
    }
}

/// Place `count` cards in `area`, scrolled so that `selected` is visible.
/// Returns `(card index, area)` for each card that fits on screen.
pub fn card_grid(area: Rect, count: usize, selected: usize) -> Vec<(usize, Rect)> {
    if count == 0 || area.width == 0 || area.height < CARD_HEIGHT {
        return Vec::new();
    }

    let visible_rows = (area.height / CARD_HEIGHT) as usize;
    let total_rows = count.div_ceil(GRID_COLUMNS);
    let selected_row = selected.min(count - 1) / GRID_COLUMNS;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let column_width = area.width / GRID_COLUMNS as u16;

    let mut cards = Vec::new();
    for (screen_row, row) in (first_row..total_rows.min(first_row + visible_rows)).enumerate() {
        for column in 0..GRID_COLUMNS {
            let index = row * GRID_COLUMNS + column;
            if index >= count {
                break;
            }
            let x = area.x + column as u16 * column_width;
            // Last column takes the odd leftover cell
            let width = if column == GRID_COLUMNS - 1 {
                area.width - column as u16 * column_width
            } else {
                column_width
            };
            let y = area.y + screen_row as u16 * CARD_HEIGHT;
            cards.push((index, Rect::new(x, y, width, CARD_HEIGHT)));
        }
    }
    cards
}

/// The detail overlay: centered, 70% wide and 80% tall.
pub fn overlay_area(area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(vertical[1])[1]
}

/// The `[x]` button drawn on the overlay's top border.
pub fn close_button_area(overlay: Rect) -> Rect {
    let width = 3.min(overlay.width);
    let x = overlay.right().saturating_sub(width + 2).max(overlay.x);
    Rect::new(x, overlay.y, width, 1.min(overlay.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Position;

    #[test]
    fn test_layout_splits_screen() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.input.y, 3);
        assert_eq!(layout.search_button.width, SEARCH_BUTTON_WIDTH);
        assert_eq!(layout.results.y, 6);
        assert_eq!(layout.results.height, 23);
        assert_eq!(layout.footer.y, 29);
    }

    #[test]
    fn test_card_grid_two_columns() {
        let area = Rect::new(0, 6, 81, 20);
        let cards = card_grid(area, 3, 0);

        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0], (0, Rect::new(0, 6, 40, CARD_HEIGHT)));
        assert_eq!(cards[1], (1, Rect::new(40, 6, 41, CARD_HEIGHT)));
        assert_eq!(cards[2], (2, Rect::new(0, 11, 40, CARD_HEIGHT)));
    }

    #[test]
    fn test_card_grid_scrolls_to_selection() {
        // Room for two rows of cards
        let area = Rect::new(0, 0, 80, 10);
        let cards = card_grid(area, 10, 7);

        let indices: Vec<usize> = cards.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![4, 5, 6, 7]);
        assert_eq!(cards[0].1.y, 0);
    }

    #[test]
    fn test_card_grid_too_small() {
        assert!(card_grid(Rect::new(0, 0, 80, 2), 4, 0).is_empty());
        assert!(card_grid(Rect::new(0, 0, 80, 20), 0, 0).is_empty());
    }

    #[test]
    fn test_overlay_is_centered_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let overlay = overlay_area(area);

        assert_eq!(overlay, Rect::new(15, 5, 70, 40));
        assert!(!overlay.contains(Position::new(0, 0)));
        assert!(overlay.contains(Position::new(50, 25)));
    }

    #[test]
    fn test_close_button_on_top_border() {
        let overlay = Rect::new(15, 5, 70, 40);
        let button = close_button_area(overlay);

        assert_eq!(button, Rect::new(80, 5, 3, 1));
        assert!(overlay.contains(Position::new(button.x, button.y)));
    }
}
