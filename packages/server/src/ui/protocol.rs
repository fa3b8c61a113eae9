//! Fixed texts of the line protocol.
//!
//! Prompts end with `:` and no newline; the client types right after them.

/// Asked until a valid, unused name is given
pub const NAME_PROMPT: &str = "[ENTER YOUR NAME]:";

/// Asked while renaming
pub const NEW_NAME_PROMPT: &str = "Please enter new username:";

/// Exact line that switches a session into rename mode
pub const RENAME_COMMAND: &str = "--name\n";

pub const INVALID_NAME_NOTICE: &str = "Invalid name. Name must:\n\
- Not be empty\n\
- Only contain letters, numbers, underscore (_), or hyphen (-)\n\
Please try again.\n";

pub const INVALID_NEW_NAME_NOTICE: &str = "Invalid name. Please try again.\n";

pub const NAME_TAKEN_NOTICE: &str = "This name is already taken. Please choose another name.\n";

pub const EMPTY_MESSAGE_NOTICE: &str = "You cannot submit an empty message.";

/// Sent to a connection refused because the room is at capacity
pub fn room_full_notice(capacity: usize) -> String {
    format!(
        "Sorry, the chat room is full (maximum {} users). Please try again later.\n",
        capacity
    )
}
