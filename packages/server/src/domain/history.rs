//! Replay log handed to newly joined sessions.

use std::{fmt, str::FromStr};

use thiserror::Error;

use super::event::BroadcastEvent;

/// Which lifecycle announcements (join, leave, rename) are also copied into
/// the message backup and therefore replayed to new users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LifecycleReplay {
    /// Lifecycle announcements are never replayed
    Never,
    /// Only announcements carrying content are replayed (renames)
    #[default]
    WithContent,
    /// Every lifecycle announcement is replayed
    Always,
}

impl LifecycleReplay {
    fn copies(self, event: &BroadcastEvent) -> bool {
        match self {
            Self::Never => false,
            Self::WithContent => !event.content().is_empty(),
            Self::Always => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown lifecycle replay policy '{0}' (expected never, with-content or always)")]
pub struct ParseLifecycleReplayError(String);

impl FromStr for LifecycleReplay {
    type Err = ParseLifecycleReplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "never" => Ok(Self::Never),
            "with-content" => Ok(Self::WithContent),
            "always" => Ok(Self::Always),
            other => Err(ParseLifecycleReplayError(other.to_string())),
        }
    }
}

impl fmt::Display for LifecycleReplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Never => "never",
            Self::WithContent => "with-content",
            Self::Always => "always",
        };
        f.write_str(s)
    }
}

/// Append-only history of broadcast events.
///
/// `messages` is replayed verbatim to new users; `lifecycle` keeps every
/// join/leave/rename announcement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryBuffer {
    messages: Vec<String>,
    lifecycle: Vec<String>,
    policy: LifecycleReplay,
}

impl HistoryBuffer {
    pub fn new(policy: LifecycleReplay) -> Self {
        Self {
            messages: Vec::new(),
            lifecycle: Vec::new(),
            policy,
        }
    }

    /// Append `event` formatted with `timestamp`.
    ///
    /// Messages with empty content are not recorded.
    pub fn record(&mut self, event: &BroadcastEvent, timestamp: &str) {
        let line = event.history_line(timestamp);
        if !event.is_lifecycle() {
            if !event.content().is_empty() {
                self.messages.push(line);
            }
            return;
        }

        if self.policy.copies(event) {
            self.messages.push(line.clone());
        }
        self.lifecycle.push(line);
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn lifecycle(&self) -> &[String] {
        &self.lifecycle
    }
}
