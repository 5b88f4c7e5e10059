//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Initialize subsystems → Start listener
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger the shutdown coordinator
//!
//! Shutdown (shutdown.rs):
//!     Coordinator fires → stop accepting → drain connections → Exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
