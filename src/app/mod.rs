//! Application layer coordinating state, events, and actions.
//!
//! Sits between the binary's runtime loop and the domain/store/fetch layers,
//! implementing the event-driven flow that powers the catalog screen:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Fetch Completion ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filter`]: Pure case-insensitive title filter
//! - [`handler`]: Event processing and phase transitions
//! - [`state`]: Central state container and load phase

pub mod actions;
pub mod filter;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use filter::filter_by_title;
pub use handler::{handle_event, Event};
pub use state::{AppState, LoadPhase};
