//! Interactive runtime loop for the catalog browser.
//!
//! This binary is a thin shim around the library: it loads configuration,
//! initializes tracing, wires the store, client, and state together, and then
//! runs a line-oriented command loop on a current-thread tokio runtime.
//!
//! # Commands
//!
//! - any text: set the search query (empty line clears it)
//! - `:reload`: re-fetch the catalog (ignored while a fetch is in flight)
//! - `:quit` / `:q`: exit
//!
//! The fetch is the only suspension point. Actions emitted by the event
//! handler are executed inline, so a `StartFetch` is awaited to completion
//! and fed back as `FetchCompleted` before the next command is read.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use shelfview::observability::init_tracing;
use shelfview::ui::{render, CatalogViewModel};
use shelfview::{
    handle_event, Action, AppState, CatalogError, CatalogStore, Config, Event, FetchClient, Result,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = load_config()?;
    init_tracing(&config);

    let store = Arc::new(CatalogStore::new());
    let client = FetchClient::new(&config)?;
    let mut state = AppState::new(Arc::clone(&store));

    // External consumers observe the store through its subscription
    // contract rather than polling.
    store.subscribe(|products| {
        tracing::debug!(count = products.len(), "catalog observer notified");
    });

    dispatch(&mut state, &client, Event::Activate).await;
    print!("{}", render(&CatalogViewModel::from_state(&state)));

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        let event = match line.trim() {
            ":quit" | ":q" => Event::Quit,
            ":reload" => Event::Reload,
            text => Event::QueryChanged(text.to_string()),
        };

        if !dispatch(&mut state, &client, event).await {
            break;
        }
        print!("{}", render(&CatalogViewModel::from_state(&state)));
    }

    Ok(())
}

/// Feeds one event through the handler and executes the resulting actions.
///
/// `StartFetch` is awaited inline and its outcome re-dispatched as
/// `FetchCompleted`. Returns `false` when the loop should exit.
async fn dispatch(state: &mut AppState, client: &FetchClient, event: Event) -> bool {
    let mut pending = handle_event(state, event);

    while let Some(action) = pending.pop() {
        match action {
            Action::StartFetch => {
                let outcome = client.fetch().await;
                let mut follow_ups = handle_event(state, Event::FetchCompleted(outcome));
                pending.append(&mut follow_ups);
            }
            Action::Quit => return false,
        }
    }

    true
}

/// Resolves configuration from the optional CLI argument.
fn load_config() -> Result<Config> {
    match std::env::args().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            if !path.is_file() {
                return Err(CatalogError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            Config::from_file(&path)
        }
        None => Ok(Config::default()),
    }
}
