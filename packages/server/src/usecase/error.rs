//! UseCase 層のエラー型

use thiserror::Error;

use crate::domain::{JoinError, NameError, RenameError};

/// 参加処理のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinChatError {
    #[error("invalid name: {0}")]
    InvalidName(#[from] NameError),

    #[error("name '{0}' is already taken")]
    NameTaken(String),

    #[error("chat room is full (maximum {capacity} users)")]
    RoomFull { capacity: usize },
}

impl From<JoinError> for JoinChatError {
    fn from(e: JoinError) -> Self {
        match e {
            JoinError::RoomFull { capacity } => Self::RoomFull { capacity },
            JoinError::NameTaken(name) => Self::NameTaken(name),
        }
    }
}

/// メッセージ送信のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMessageError {
    #[error("empty message")]
    EmptyMessage,
}

/// 改名処理のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenameUserError {
    #[error("invalid name: {0}")]
    InvalidName(#[from] NameError),

    #[error("name '{0}' is already taken")]
    NameTaken(String),

    #[error("user '{0}' is not registered")]
    UserNotFound(String),
}

impl From<RenameError> for RenameUserError {
    fn from(e: RenameError) -> Self {
        match e {
            RenameError::NameTaken(name) => Self::NameTaken(name),
            RenameError::UserNotFound(name) => Self::UserNotFound(name),
        }
    }
}
