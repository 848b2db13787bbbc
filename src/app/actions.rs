//! Actions representing side effects to be executed by the runtime loop.
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! keeping state transitions pure while the binary's runtime loop performs
//! the effectful work (awaiting the network, exiting the loop).

/// Commands emitted by the event handler for the runtime loop to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start a catalog fetch.
    ///
    /// The runtime awaits [`FetchClient::fetch`](crate::fetch::FetchClient::fetch)
    /// and feeds the outcome back as
    /// [`Event::FetchCompleted`](crate::app::Event::FetchCompleted). The fetch
    /// is the single suspension point; the handler guarantees at most one is
    /// requested at a time.
    StartFetch,

    /// Leave the interactive loop and exit cleanly.
    Quit,
}
