//! Tracing setup.
//!
//! Logging uses the `tracing` ecosystem throughout the crate; this module
//! wires up the subscriber once at startup.

pub mod init;

pub use init::init_tracing;
