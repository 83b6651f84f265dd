//! User record types.
//!
//! The listing service and the age-filter demo each work with their own
//! shape of "user". They are kept as separate types.

use serde::{Deserialize, Serialize};

/// Lowest age accepted by validated insertion.
pub const MIN_AGE: u32 = 0;

/// Highest age accepted by validated insertion.
pub const MAX_AGE: u32 = 120;

/// A user as returned by the listing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    /// Unique identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

impl DirectoryUser {
    /// Creates a new directory user.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A user with an age, as filtered by the demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Identifier, unique within one roster.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: u32,
}

impl Person {
    /// Creates a new person.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }
}
