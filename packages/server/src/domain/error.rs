//! Domain errors.

use thiserror::Error;

/// Reason a display name was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// Empty or whitespace only
    #[error("name must not be empty")]
    Empty,

    /// Contains something other than ASCII letters, digits, `_` or `-`
    #[error("name contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// Registry refused a new user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinError {
    #[error("chat room is full (maximum {capacity} users)")]
    RoomFull { capacity: usize },

    #[error("name '{0}' is already taken")]
    NameTaken(String),
}

/// Registry refused a rename
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenameError {
    #[error("name '{0}' is already taken")]
    NameTaken(String),

    #[error("user '{0}' is not registered")]
    UserNotFound(String),
}
