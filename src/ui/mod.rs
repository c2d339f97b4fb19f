//! # UI Module
//!
//! The search widget: state, layout, rendering and input handling.
//!
//! ## Components
//!
//! - [`App`] - search state, results selection and the detail overlay
//! - [`mod@render`] - draws the widget from an [`App`]
//! - [`mod@events`] - turns key and mouse events into [`App`] changes
//! - [`mod@layout`] - geometry shared by drawing and mouse hit-testing
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                  MealExplorer                    │
//! ├──────────────────────────────────────┬──────────┤
//! │ Search: arrabiata▏                    │  Search  │
//! ├────────────────────────┬─────────────┴──────────┤
//! │ Spicy Arrabiata Penne  │ Penne Arrabiata         │
//! │ Vegetarian · Italian   │ Pasta · Italian         │
//! ├────────────────────────┼────────────────────────┤
//! │          ...           │          ...            │
//! ├────────────────────────┴────────────────────────┤
//! │ [Enter] Search  [Tab] Results  [Ctrl+C] Quit     │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! Opening a card draws the recipe overlay centered on top of the grid.

pub mod app;
pub mod config;
pub mod events;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod theme;

pub use app::App;
pub use events::{handle_event, Action};
pub use render::render;
