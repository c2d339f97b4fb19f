//! # Theme System
//!
//! Centralized colors for the MealExplorer TUI.
//!
//! Rendering code never hardcodes `ratatui::style::Color` values; it asks the
//! active [`Theme`] for a semantic role (card surface, skeleton shimmer,
//! error text, ...). The theme is picked by name from the config file or
//! `--theme`, and can be cycled at runtime with `t`.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default)
//! - **Catppuccin Macchiato**
//! - **Catppuccin Latte** - the only light theme
//! - **Dracula**
//! - **Nord**
//! - **Gruvbox Dark**

use ratatui::style::Color;

/// All colors used by the TUI, grouped by semantic role.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Human-readable name, matched case-insensitively in config.
    pub name: &'static str,

    /// Screen background.
    pub bg: Color,
    /// Raised surfaces: result cards, the overlay, skeleton blocks.
    pub surface: Color,
    /// Lighter band that sweeps across loading placeholders.
    pub shimmer: Color,

    /// Primary text.
    pub fg: Color,
    /// Hints, placeholders, footer, unfocused borders.
    pub fg_dim: Color,

    /// Focused borders, selected card, header.
    pub accent: Color,
    /// Meal titles and section headings.
    pub secondary: Color,
    /// Error message and the overlay close button.
    pub error: Color,
}

impl Theme {
    /// All built-in themes in cycle order.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The theme after `self` in [`Theme::all`], wrapping around.
    pub fn next(&self) -> &'static Theme {
        let pos = BUILT_IN_THEMES
            .iter()
            .position(|t| t.name == self.name)
            .unwrap_or(0);
        &BUILT_IN_THEMES[(pos + 1) % BUILT_IN_THEMES.len()]
    }
}

static BUILT_IN_THEMES: [Theme; 6] = [
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),          // base
        surface: Color::Rgb(49, 50, 68),     // surface0
        shimmer: Color::Rgb(69, 71, 90),     // surface1
        fg: Color::Rgb(205, 214, 244),       // text
        fg_dim: Color::Rgb(108, 112, 134),   // overlay0
        accent: Color::Rgb(137, 180, 250),   // blue
        secondary: Color::Rgb(250, 179, 135), // peach
        error: Color::Rgb(243, 139, 168),    // red
    },
    Theme {
        name: "Catppuccin Macchiato",
        bg: Color::Rgb(36, 39, 58),
        surface: Color::Rgb(54, 58, 79),
        shimmer: Color::Rgb(73, 77, 100),
        fg: Color::Rgb(202, 211, 245),
        fg_dim: Color::Rgb(110, 115, 141),
        accent: Color::Rgb(138, 173, 244),
        secondary: Color::Rgb(245, 169, 127),
        error: Color::Rgb(237, 135, 150),
    },
    Theme {
        name: "Catppuccin Latte",
        bg: Color::Rgb(239, 241, 245),
        surface: Color::Rgb(204, 208, 218),
        shimmer: Color::Rgb(188, 192, 204),
        fg: Color::Rgb(76, 79, 105),
        fg_dim: Color::Rgb(156, 160, 176),
        accent: Color::Rgb(30, 102, 245),
        secondary: Color::Rgb(254, 100, 11),
        error: Color::Rgb(210, 15, 57),
    },
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        surface: Color::Rgb(68, 71, 90),
        shimmer: Color::Rgb(88, 92, 114),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(189, 147, 249),    // purple
        secondary: Color::Rgb(255, 184, 108), // orange
        error: Color::Rgb(255, 85, 85),
    },
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        surface: Color::Rgb(59, 66, 82),
        shimmer: Color::Rgb(76, 86, 106),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(97, 110, 136),
        accent: Color::Rgb(136, 192, 208),
        secondary: Color::Rgb(208, 135, 112),
        error: Color::Rgb(191, 97, 106),
    },
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        surface: Color::Rgb(60, 56, 54),
        shimmer: Color::Rgb(80, 73, 69),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152),
        secondary: Color::Rgb(254, 128, 25),
        error: Color::Rgb(251, 73, 52),
    },
];
