//! Registered chat user.

use tokio::sync::mpsc::{self, error::TrySendError};

use super::name::UserName;

/// Texts a session may have queued before further deliveries to it are dropped
pub const OUTBOUND_QUEUE_CAPACITY: usize = 1024;

/// Outbound queue of a session. A writer task drains it into the socket.
pub type UserChannel = mpsc::Sender<String>;

/// Create the outbound queue of one session
pub fn outbound_channel() -> (UserChannel, mpsc::Receiver<String>) {
    mpsc::channel(OUTBOUND_QUEUE_CAPACITY)
}

/// One registered session: its display name and the channel to reach it
#[derive(Debug, Clone)]
pub struct User {
    pub name: UserName,
    pub channel: UserChannel,
}

impl User {
    pub fn new(name: UserName, channel: UserChannel) -> Self {
        Self { name, channel }
    }

    /// Enqueue text for this user without waiting.
    ///
    /// Returns `false` when the session's writer is gone or its queue is full
    /// (the client stopped reading).
    pub fn deliver(&self, text: String) -> bool {
        match self.channel.try_send(text) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                tracing::warn!("Outbound queue of '{}' is full, dropping text", self.name);
                false
            }
            Err(TrySendError::Closed(_)) => {
                tracing::warn!("Failed to deliver to '{}': session closed", self.name);
                false
            }
        }
    }
}
