//! # Roster Server
//!
//! HTTP service returning a fixed list of users.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod directory;
pub mod handlers;
pub mod server;

pub use directory::{StaticUserDirectory, UserDirectory};
pub use server::{AppState, Server, ServerConfig, DEFAULT_PORT};
