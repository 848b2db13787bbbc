//! Event handling and state transition logic.
//!
//! This module implements the event handler that drives the catalog screen's
//! lifecycle: `Idle → Loading → (Ready | Failed)`, re-entering `Loading` on
//! manual reload. It follows a unidirectional flow:
//!
//! 1. Events arrive from user input or a completed fetch
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for the runtime loop to execute
//!
//! # In-flight reloads
//!
//! A reload requested while a fetch is already in flight is ignored: the
//! handler emits no `StartFetch` while the phase is `Loading`. Combined with
//! the runtime's single-fetch-at-a-time execution, the final catalog always
//! reflects exactly one response, never a merge of two.

use crate::app::{Action, AppState, LoadPhase};
use crate::domain::Product;
use crate::fetch::FetchError;

/// Events triggered by user input or by a completed fetch.
#[derive(Debug)]
pub enum Event {
    /// The screen became active; starts the initial fetch.
    Activate,

    /// The user requested a manual reload.
    Reload,

    /// The search text changed. Re-derives the visible list, never refetches.
    QueryChanged(String),

    /// An in-flight fetch resolved, successfully or not.
    FetchCompleted(Result<Vec<Product>, FetchError>),

    /// The user asked to leave.
    Quit,
}

/// Processes an event, mutates application state, and returns actions for the
/// runtime loop to execute.
///
/// The returned vector is empty when the event requires no side effect (for
/// example a query edit, or a reload ignored while loading).
pub fn handle_event(state: &mut AppState, event: Event) -> Vec<Action> {
    match event {
        Event::Activate => begin_fetch(state),

        Event::Reload => {
            if state.is_loading() {
                tracing::debug!("reload ignored, fetch already in flight");
                return vec![];
            }
            begin_fetch(state)
        }

        Event::QueryChanged(query) => {
            state.query = query;
            // While loading, derivation waits for the fetch result; the
            // query text itself is still recorded.
            if !state.is_loading() {
                state.apply_filter();
            }
            vec![]
        }

        Event::FetchCompleted(Ok(products)) => {
            tracing::info!(count = products.len(), "fetch succeeded");
            state.store.replace_all(products);
            state.phase = LoadPhase::Ready;
            state.error = None;
            state.apply_filter();
            vec![]
        }

        Event::FetchCompleted(Err(error)) => {
            tracing::warn!(error = %error, "fetch failed, keeping stale catalog");
            state.phase = LoadPhase::Failed;
            state.error = Some(error.to_string());
            // Stale-but-visible: the store is untouched, so the previous
            // items (empty on first load) stay on screen.
            state.apply_filter();
            vec![]
        }

        Event::Quit => vec![Action::Quit],
    }
}

/// Enters `Loading` and requests a fetch.
fn begin_fetch(state: &mut AppState) -> Vec<Action> {
    state.phase = LoadPhase::Loading;
    state.error = None;
    vec![Action::StartFetch]
}
