use crate::meal::Meal;
use crate::ui::app::{App, Focus, SearchState};
use crate::ui::layout::{self, AppLayout};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Number of skeleton cards shown while a search is in flight.
pub const PLACEHOLDER_CARDS: usize = 6;

pub const NO_RESULTS: &str = "No recipes found. Try a different search.";

const INPUT_PLACEHOLDER: &str = "Search for recipes...";

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = AppLayout::new(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.bg)),
        area,
    );

    render_header(frame, app, layout.header);
    render_search_bar(frame, app, &layout);
    render_results(frame, app, layout.results);
    render_footer(frame, app, layout.footer);

    if let Some(meal) = app.overlay.meal() {
        render_overlay(frame, app, meal, layout::overlay_area(area));
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        "MealExplorer",
        Style::default()
            .fg(app.theme.accent)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent)),
    );

    frame.render_widget(header, area);
}

fn render_search_bar(frame: &mut Frame, app: &App, layout: &AppLayout) {
    let focused = app.focus == Focus::Input && !app.overlay.is_open();
    let border_color = if focused {
        app.theme.accent
    } else {
        app.theme.fg_dim
    };

    let line = if app.query.is_empty() && !focused {
        Line::from(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(app.theme.fg_dim),
        ))
    } else {
        let mut spans = vec![Span::styled(
            app.query.clone(),
            Style::default().fg(app.theme.fg),
        )];
        if focused {
            spans.push(Span::styled(
                "▏",
                Style::default()
                    .fg(app.theme.accent)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        Line::from(spans)
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(input, layout.input);

    let button = Paragraph::new(Span::styled(
        "Search",
        Style::default()
            .fg(app.theme.bg)
            .bg(app.theme.accent)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent)),
    );
    frame.render_widget(button, layout.search_button);
}

fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    match &app.state {
        SearchState::Loading => render_placeholders(frame, app, area),
        SearchState::Failed(message) => render_message(
            frame,
            area,
            message,
            Style::default().fg(app.theme.error),
        ),
        SearchState::Ready(meals) if !meals.is_empty() => render_cards(frame, app, meals, area),
        SearchState::Idle | SearchState::Ready(_) => render_message(
            frame,
            area,
            NO_RESULTS,
            Style::default().fg(app.theme.fg_dim),
        ),
    }
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, style: Style) {
    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(message.to_string())])
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_placeholders(frame: &mut Frame, app: &App, area: Rect) {
    for (index, card) in layout::card_grid(area, PLACEHOLDER_CARDS, 0) {
        // Shimmer band walks across the cards every few frames
        let lit = (app.tick / 3) as usize % PLACEHOLDER_CARDS == index;
        let fill = if lit {
            app.theme.shimmer
        } else {
            app.theme.surface
        };

        let inner_width = card.width.saturating_sub(4) as usize;
        let bar = |fraction: usize| "█".repeat(inner_width * fraction / 4);

        let skeleton = Paragraph::new(vec![
            Line::from(Span::styled(bar(3), Style::default().fg(fill))),
            Line::from(""),
            Line::from(Span::styled(bar(2), Style::default().fg(fill))),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.surface)),
        );
        frame.render_widget(skeleton, card);
    }
}

fn render_cards(frame: &mut Frame, app: &App, meals: &[Meal], area: Rect) {
    for (index, card) in layout::card_grid(area, meals.len(), app.selected_index) {
        let meal = &meals[index];
        let selected = index == app.selected_index && app.focus == Focus::Results;

        let border_style = if selected {
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.surface)
        };

        let subtitle = match (meal.category(), meal.area()) {
            (Some(category), Some(area)) => format!("{category} · {area}"),
            (Some(one), None) | (None, Some(one)) => one.to_string(),
            (None, None) => String::new(),
        };

        let lines = vec![
            Line::from(Span::styled(
                meal.name().to_string(),
                Style::default()
                    .fg(app.theme.secondary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(subtitle, Style::default().fg(app.theme.fg))),
            Line::from(Span::styled(
                meal.thumbnail().unwrap_or_default().to_string(),
                Style::default().fg(app.theme.fg_dim),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(app.theme.surface))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        frame.render_widget(paragraph, card);
    }
}

/// Highest useful scroll offset for `app`'s overlay drawn into `area`: the
/// last content row sits at the top of the panel. Zero when closed.
pub fn overlay_max_scroll(app: &App, area: Rect) -> u16 {
    let Some(meal) = app.overlay.meal() else {
        return 0;
    };
    let width = usize::from(area.width.saturating_sub(2)).max(1);
    let rows: usize = overlay_lines(app, meal)
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows.saturating_sub(1)).unwrap_or(u16::MAX)
}

fn overlay_lines(app: &App, meal: &Meal) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(app.theme.secondary)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(app.theme.fg_dim);

    let mut lines = vec![
        Line::from(Span::styled(
            meal.name().to_string(),
            Style::default()
                .fg(app.theme.fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if let Some(thumb) = meal.thumbnail() {
        lines.push(Line::from(vec![
            Span::styled("Image: ", label),
            Span::raw(thumb.to_string()),
        ]));
    }
    if let Some(category) = meal.category() {
        lines.push(Line::from(vec![
            Span::styled("Category: ", label),
            Span::raw(category.to_string()),
        ]));
    }
    if let Some(area) = meal.area() {
        lines.push(Line::from(vec![
            Span::styled("Cuisine: ", label),
            Span::raw(area.to_string()),
        ]));
    }
    let tags = meal.tags();
    if !tags.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Tags: ", label),
            Span::raw(tags.join(", ")),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Ingredients:", heading)));
    for ingredient in meal.ingredients() {
        lines.push(Line::from(format!("  • {ingredient}")));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Instructions:", heading)));
    for paragraph in meal.instructions().lines() {
        lines.push(Line::from(paragraph.trim_end().to_string()));
    }

    if meal.source().is_some() || meal.youtube().is_some() {
        lines.push(Line::from(""));
    }
    if let Some(source) = meal.source() {
        lines.push(Line::from(vec![
            Span::styled("Source: ", label),
            Span::raw(source.to_string()),
        ]));
    }
    if let Some(video) = meal.youtube() {
        lines.push(Line::from(vec![
            Span::styled("Video: ", label),
            Span::raw(video.to_string()),
        ]));
    }

    lines
}

fn render_overlay(frame: &mut Frame, app: &App, meal: &Meal, area: Rect) {
    let scroll = app.overlay.scroll().min(overlay_max_scroll(app, area));
    let overlay = Paragraph::new(overlay_lines(app, meal))
        .style(Style::default().fg(app.theme.fg).bg(app.theme.surface))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Recipe ")
                .border_style(Style::default().fg(app.theme.accent)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(overlay, area);

    let close = Paragraph::new(Span::styled(
        "[x]",
        Style::default()
            .fg(app.theme.error)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(close, layout::close_button_area(area));
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.overlay.is_open() {
        "[↑↓/jk] Scroll  [Esc/x] Close  [click outside] Close"
    } else {
        match app.focus {
            Focus::Input => "[Enter] Search  [Ctrl+U] Clear  [Tab/↓] Results  [Ctrl+C] Quit",
            Focus::Results => {
                "[←↑↓→/hjkl] Move  [Enter] Open  [/] Search  [t] Theme  [q] Quit"
            }
        }
    };

    let footer = Paragraph::new(help_text).style(Style::default().fg(app.theme.fg_dim));
    frame.render_widget(footer, area);
}
