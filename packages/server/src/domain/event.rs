//! Broadcast events and their wire texts.

use super::name::UserName;

/// Prompt shown to a user after every event: `[<timestamp>][<name>]:`
pub fn prompt_line(timestamp: &str, name: &UserName) -> String {
    format!("[{}][{}]:", timestamp, name)
}

/// Notification fanned out to every registered session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BroadcastEvent {
    Join {
        name: UserName,
    },
    /// `content` is the raw line, trailing newline included
    Message {
        sender: UserName,
        content: String,
    },
    Leave {
        name: UserName,
    },
    Rename {
        old_name: UserName,
        new_name: UserName,
    },
}

impl BroadcastEvent {
    /// The session that caused the event. It never receives the announcement.
    pub fn originator(&self) -> &UserName {
        match self {
            Self::Join { name } | Self::Leave { name } => name,
            Self::Message { sender, .. } => sender,
            Self::Rename { new_name, .. } => new_name,
        }
    }

    /// Payload carried by the event: the line for a message, the previous
    /// name for a rename, nothing for join and leave.
    pub fn content(&self) -> &str {
        match self {
            Self::Message { content, .. } => content,
            Self::Rename { old_name, .. } => old_name.as_str(),
            Self::Join { .. } | Self::Leave { .. } => "",
        }
    }

    pub fn is_lifecycle(&self) -> bool {
        !matches!(self, Self::Message { .. })
    }

    /// Line recorded in the history buffer.
    ///
    /// Messages keep their timestamp; lifecycle announcements do not.
    pub fn history_line(&self, timestamp: &str) -> String {
        match self {
            Self::Message { sender, content } => {
                format!("[{}][{}]:{}", timestamp, sender, content)
            }
            Self::Join { name } => format!("{} has joined our chat...\n", name),
            Self::Leave { name } => format!("{} has left the chat\n", name),
            Self::Rename { old_name, new_name } => {
                format!("{} has changed their name to {}\n", old_name, new_name)
            }
        }
    }

    /// Text written to every recipient except the originator
    pub fn announcement(&self, timestamp: &str) -> String {
        format!("\n{}", self.history_line(timestamp))
    }
}
