//! # Roster Core
//!
//! Core types shared across Roster components:
//! - Common error types
//! - The two user record shapes (directory listing and age-filter demo)
//! - The age filter and its summary statistics

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod filter;
pub mod user;

pub use error::{Error, Result};
pub use filter::{users_older_than, RosterStats, DEFAULT_AGE_THRESHOLD};
pub use user::{DirectoryUser, Person, MAX_AGE, MIN_AGE};
