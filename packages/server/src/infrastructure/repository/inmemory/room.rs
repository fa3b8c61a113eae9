//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! `ChatRoom` 集約を 1 つの `tokio::sync::Mutex` で保護します。
//!
//! ## ロックの粒度
//!
//! 参加者リストと履歴バッファは同じロックの内側にあります。
//! 定員・重複チェックとその後の追加や改名、ブロードキャストの配信と履歴追加は
//! 全て 1 回のロック取得の中で行われ、途中の状態が他のセッションから見えることはありません。

use std::sync::Arc;

use async_trait::async_trait;
use irori_shared::time::Clock;
use tokio::sync::Mutex;

use crate::domain::{
    BroadcastEvent, BroadcastReport, ChatRoom, HistoryBuffer, JoinError, RenameError,
    RoomRepository, User, UserName,
};

/// インメモリ Room Repository 実装
pub struct InMemoryRoomRepository {
    /// ChatRoom 集約（参加者リスト + 履歴）
    room: Arc<Mutex<ChatRoom>>,
    /// ブロードキャストのタイムスタンプ取得用
    clock: Arc<dyn Clock>,
}

impl InMemoryRoomRepository {
    /// 新しい InMemoryRoomRepository を作成
    pub fn new(room: Arc<Mutex<ChatRoom>>, clock: Arc<dyn Clock>) -> Self {
        Self { room, clock }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn capacity(&self) -> usize {
        self.room.lock().await.capacity()
    }

    async fn is_full(&self) -> bool {
        self.room.lock().await.is_full()
    }

    async fn try_join(&self, user: User) -> Result<usize, JoinError> {
        let mut room = self.room.lock().await;
        room.try_join(user)
    }

    async fn remove(&self, name: &UserName) -> bool {
        let mut room = self.room.lock().await;
        room.remove(name)
    }

    async fn rename(&self, old_name: &UserName, new_name: UserName) -> Result<(), RenameError> {
        let mut room = self.room.lock().await;
        room.rename(old_name, new_name)
    }

    async fn broadcast(&self, event: BroadcastEvent) -> BroadcastReport {
        let mut room = self.room.lock().await;
        // ロック取得後に時刻を取ることで、履歴のタイムスタンプが配信順に並ぶ
        let now = self.clock.now();
        room.broadcast(&event, &now)
    }

    async fn user_names(&self) -> Vec<UserName> {
        self.room.lock().await.user_names()
    }

    async fn history(&self) -> HistoryBuffer {
        self.room.lock().await.history().clone()
    }
}
