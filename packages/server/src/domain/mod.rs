//! Domain layer: the chat room, its users and the events fanned out to them.
//!
//! Nothing in this layer performs I/O. Outbound text is only enqueued on each
//! user's channel; the UI layer owns the sockets.

mod error;
mod event;
mod history;
mod name;
mod repository;
mod room;
mod user;

pub use error::{JoinError, NameError, RenameError};
pub use event::{BroadcastEvent, prompt_line};
pub use history::{HistoryBuffer, LifecycleReplay, ParseLifecycleReplayError};
pub use name::{UserName, is_valid_name};
pub use repository::RoomRepository;
#[cfg(test)]
pub use repository::MockRoomRepository;
pub use room::{BroadcastReport, ChatRoom, DEFAULT_MAX_USERS};
pub use user::{OUTBOUND_QUEUE_CAPACITY, User, UserChannel, outbound_channel};
