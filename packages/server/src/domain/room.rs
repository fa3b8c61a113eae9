//! Chat room aggregate: user registry plus broadcast engine.
//!
//! `ChatRoom` is plain data. Callers serialize access to it (the in-memory
//! repository keeps it behind a single mutex), so every method here observes
//! and leaves a consistent registry and history.

use chrono::NaiveDateTime;
use irori_shared::time::format_chat_timestamp;

use super::{
    error::{JoinError, RenameError},
    event::{BroadcastEvent, prompt_line},
    history::{HistoryBuffer, LifecycleReplay},
    name::UserName,
    user::User,
};

/// Default registry capacity
pub const DEFAULT_MAX_USERS: usize = 10;

/// Outcome of one broadcast
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// Users the announcement was addressed to (originator excluded)
    pub recipients: usize,
    /// Enqueue failures, announcement or prompt
    pub failures: usize,
}

#[derive(Debug)]
pub struct ChatRoom {
    /// Registered users in join order
    users: Vec<User>,
    history: HistoryBuffer,
    capacity: usize,
}

impl ChatRoom {
    pub fn new(capacity: usize, policy: LifecycleReplay) -> Self {
        Self {
            users: Vec::new(),
            history: HistoryBuffer::new(policy),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn is_full(&self) -> bool {
        self.users.len() >= self.capacity
    }

    /// Whether any user's name equals `name`, ignoring ASCII case
    fn contains(&self, name: &str) -> bool {
        self.users.iter().any(|user| user.name.matches(name))
    }

    pub fn user_names(&self) -> Vec<UserName> {
        self.users.iter().map(|user| user.name.clone()).collect()
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Register `user` after replaying the message backup to it.
    ///
    /// Capacity and uniqueness are checked before anything is written, so a
    /// refused user receives nothing. The backup goes out as one queued text
    /// so it takes a single slot of the user's outbound queue. Returns the
    /// number of replayed lines.
    pub fn try_join(&mut self, user: User) -> Result<usize, JoinError> {
        if self.is_full() {
            return Err(JoinError::RoomFull {
                capacity: self.capacity,
            });
        }
        if self.contains(user.name.as_str()) {
            return Err(JoinError::NameTaken(user.name.as_str().to_string()));
        }

        let backup = self.history.messages();
        let replayed = if backup.is_empty() || user.deliver(backup.concat()) {
            backup.len()
        } else {
            0
        };

        self.users.push(user);
        Ok(replayed)
    }

    /// Remove the first user named exactly `name`. Absent names are ignored.
    pub fn remove(&mut self, name: &UserName) -> bool {
        match self.users.iter().position(|user| &user.name == name) {
            Some(index) => {
                self.users.remove(index);
                true
            }
            None => false,
        }
    }

    /// Rename `old_name` to `new_name` if no user (the renaming one
    /// included) already matches `new_name`.
    pub fn rename(&mut self, old_name: &UserName, new_name: UserName) -> Result<(), RenameError> {
        if self.contains(new_name.as_str()) {
            return Err(RenameError::NameTaken(new_name.as_str().to_string()));
        }

        let user = self
            .users
            .iter_mut()
            .find(|user| &user.name == old_name)
            .ok_or_else(|| RenameError::UserNotFound(old_name.as_str().to_string()))?;
        user.name = new_name;
        Ok(())
    }

    /// Fan `event` out to every user and append it to the history.
    ///
    /// Everyone but the originator gets the announcement; everyone, the
    /// originator included, then gets a fresh prompt with their own name.
    /// Delivery failures are counted and skipped.
    pub fn broadcast(&mut self, event: &BroadcastEvent, now: &NaiveDateTime) -> BroadcastReport {
        let timestamp = format_chat_timestamp(now);
        let announcement = event.announcement(&timestamp);
        let mut report = BroadcastReport::default();

        for user in &self.users {
            if &user.name != event.originator() {
                report.recipients += 1;
                if !user.deliver(announcement.clone()) {
                    report.failures += 1;
                }
            }
            if !user.deliver(prompt_line(&timestamp, &user.name)) {
                report.failures += 1;
            }
        }

        self.history.record(event, &timestamp);
        report
    }
}

impl Default for ChatRoom {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_USERS, LifecycleReplay::default())
    }
}
