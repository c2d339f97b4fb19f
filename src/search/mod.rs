//! # Recipe Search
//!
//! Talks to the recipe service and carries results back to the UI loop.
//!
//! ## Flow
//!
//! ```text
//! App::submit_search ──► SearchRequest { generation, query }
//!                              │
//!                       spawn_search (tokio task)
//!                              │  RecipeService::search
//!                              ▼
//!                   SearchOutcome ──► mpsc ──► App::complete_search
//! ```
//!
//! Every request carries the generation number the [`App`](crate::ui::App)
//! handed out when it was submitted. Outcomes for anything but the newest
//! generation are dropped by the app, so a slow response can never replace
//! the results of a later search.
//!
//! The spawned task owns a [`PendingSearch`]. If the task ends without
//! reporting (panic, abort, runtime shutdown) the guard reports
//! [`SearchError::Interrupted`] on drop, so the UI never stays in the loading
//! state.

pub mod client;
pub mod error;

pub use client::{MealDbClient, RecipeService, DEFAULT_BASE_URL};
pub use error::SearchError;

use crate::meal::Meal;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// A search the UI has committed to. Produced by `App::submit_search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub generation: u64,
    pub query: String,
}

/// Result of one request, tagged with the generation it answers.
#[derive(Debug)]
pub struct SearchOutcome {
    pub generation: u64,
    pub result: Result<Vec<Meal>, SearchError>,
}

/// Delivery slot for a single in-flight search.
pub struct PendingSearch {
    generation: u64,
    tx: Option<UnboundedSender<SearchOutcome>>,
}

impl PendingSearch {
    pub fn new(generation: u64, tx: UnboundedSender<SearchOutcome>) -> Self {
        Self {
            generation,
            tx: Some(tx),
        }
    }

    /// Hand the outcome to the UI. A closed receiver means the UI is gone.
    pub fn complete(mut self, outcome: SearchOutcome) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(outcome);
        }
    }
}

impl Drop for PendingSearch {
    fn drop(&mut self) {
        if let Some(tx) = self.tx.take() {
            log::warn!(
                "Search #{} ended without a result, reporting it as interrupted",
                self.generation
            );
            let _ = tx.send(SearchOutcome {
                generation: self.generation,
                result: Err(SearchError::Interrupted),
            });
        }
    }
}

/// Run one lookup against `service`. Failures are logged here with their
/// cause; the UI only ever shows a generic message.
pub async fn run_search(service: &dyn RecipeService, request: &SearchRequest) -> SearchOutcome {
    log::debug!(
        "Dispatching search #{} for {:?}",
        request.generation,
        request.query
    );

    let result = service.search(&request.query).await;
    match &result {
        Ok(meals) => log::info!(
            "Search #{} for {:?} returned {} meal(s)",
            request.generation,
            request.query,
            meals.len()
        ),
        Err(e) => log::error!(
            "Error fetching recipes for {:?} (search #{}): {}",
            request.query,
            request.generation,
            e
        ),
    }

    SearchOutcome {
        generation: request.generation,
        result,
    }
}

/// Spawn `request` on the tokio runtime, delivering exactly one outcome on
/// `tx`.
pub fn spawn_search(
    service: Arc<dyn RecipeService>,
    request: SearchRequest,
    tx: UnboundedSender<SearchOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let pending = PendingSearch::new(request.generation, tx);
        let outcome = run_search(service.as_ref(), &request).await;
        pending.complete(outcome);
    })
}
