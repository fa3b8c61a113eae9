//! UseCase layer.
//!
//! Each use case drives the `RoomRepository` for one user action.

mod error;
mod join_chat;
mod leave_chat;
mod rename_user;
mod send_message;

pub use error::{JoinChatError, RenameUserError, SendMessageError};
pub use join_chat::{JoinChatUseCase, Joined};
pub use leave_chat::LeaveChatUseCase;
pub use rename_user::RenameUserUseCase;
pub use send_message::SendMessageUseCase;
