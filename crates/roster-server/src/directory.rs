//! User directory backing the `/users` endpoint.

use roster_core::{DirectoryUser, Result};

/// Source of the user listing served over HTTP.
pub trait UserDirectory: Send + Sync {
    /// Returns every user in the directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing cannot be produced.
    fn list_users(&self) -> Result<Vec<DirectoryUser>>;
}

/// Fixed, in-memory directory of four users.
#[derive(Debug, Clone)]
pub struct StaticUserDirectory {
    users: Vec<DirectoryUser>,
}

impl StaticUserDirectory {
    /// Creates the directory with its built-in users.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: vec![
                DirectoryUser::new(1, "Ana", "ana@email.com"),
                DirectoryUser::new(2, "Pedro", "pedro@email.com"),
                DirectoryUser::new(3, "Mariana", "mariana@email.com"),
                DirectoryUser::new(4, "Carlos", "carlos@email.com"),
            ],
        }
    }
}

impl Default for StaticUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDirectory for StaticUserDirectory {
    fn list_users(&self) -> Result<Vec<DirectoryUser>> {
        tracing::info!(count = self.users.len(), "Fetching all users from directory");
        Ok(self.users.clone())
    }
}
