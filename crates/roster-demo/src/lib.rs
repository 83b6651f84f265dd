//! # Roster Demo
//!
//! Interactive side of Roster: an owned list of people that can be added
//! to, randomly extended and cleared, filtered by age, and reported through
//! a pluggable [`Reporter`].
//!
//! ## Features
//!
//! - **Roster**: explicit state object with validated insertion
//! - **Reporters**: console and in-memory sinks for log lines and renders
//! - **Script**: the timed demo walkthrough and type-error narration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod reporter;
pub mod roster;
pub mod script;

pub use reporter::{ConsoleReporter, LogEntry, LogLevel, MemoryReporter, Reporter, RosterView};
pub use roster::{Roster, RANDOM_NAMES, VALIDATION_MESSAGE};
pub use script::{run_demo, show_type_errors, Pacing};
