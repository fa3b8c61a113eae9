//! Repository trait definition.
//!
//! The use cases depend on this trait only. The in-memory implementation in
//! the infrastructure layer keeps the whole `ChatRoom` behind one lock, so
//! every method below is atomic with respect to every other.

use async_trait::async_trait;

use super::{
    BroadcastEvent, BroadcastReport, HistoryBuffer, JoinError, RenameError, User, UserName,
};

/// Chat room repository
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Maximum number of registered users
    async fn capacity(&self) -> usize;

    async fn is_full(&self) -> bool;

    /// Register a user, replaying the message backup to it first
    ///
    /// Returns the number of replayed lines.
    async fn try_join(&self, user: User) -> Result<usize, JoinError>;

    /// Remove a user by exact name; `false` if it was not registered
    async fn remove(&self, name: &UserName) -> bool;

    /// Atomically check uniqueness of `new_name` and rename `old_name`
    async fn rename(&self, old_name: &UserName, new_name: UserName) -> Result<(), RenameError>;

    /// Fan an event out to the registered users and record it
    async fn broadcast(&self, event: BroadcastEvent) -> BroadcastReport;

    /// Registered names in join order
    async fn user_names(&self) -> Vec<UserName>;

    /// Snapshot of the history buffer
    async fn history(&self) -> HistoryBuffer;
}
