//! MealExplorer - search TheMealDB from the terminal
//!
//! This library provides the search widget behind the `meal-explorer` binary:
//! the meal record model, the recipe service client, and the TUI state,
//! rendering and event handling.

pub mod meal;
pub mod search;
pub mod ui;
