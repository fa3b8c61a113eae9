//! UseCase: チャット参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinChatUseCase::execute() メソッド
//! - 名前の検証、参加登録、履歴の再生、参加通知
//!
//! ### なぜこのテストが必要か
//! - 不正な名前・重複した名前・定員超過がそれぞれ正しいエラーになることを保証
//! - 参加者本人には参加通知が届かず、既存参加者には届くことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規ユーザーの参加
//! - 異常系：不正な名前、重複した名前、定員超過

use std::sync::Arc;

use crate::domain::{BroadcastEvent, RoomRepository, User, UserChannel, UserName};

use super::error::JoinChatError;

/// 参加成功時の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joined {
    /// 登録された名前
    pub name: UserName,
    /// 再生した履歴の行数
    pub replayed: usize,
}

/// チャット参加のユースケース
pub struct JoinChatUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl JoinChatUseCase {
    /// 新しい JoinChatUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 部屋が満員かどうか（名前入力の前に確認する）
    pub async fn is_room_full(&self) -> bool {
        self.repository.is_full().await
    }

    /// 部屋の定員
    pub async fn capacity(&self) -> usize {
        self.repository.capacity().await
    }

    /// 参加を実行
    ///
    /// # Arguments
    ///
    /// * `candidate` - 前後の空白を除去済みの名前候補
    /// * `channel` - 参加者へのメッセージ送信用チャンネル
    ///
    /// # Returns
    ///
    /// * `Ok(Joined)` - 参加成功（履歴は再生済み、参加通知は送信済み）
    /// * `Err(JoinChatError)` - 参加失敗（登録状態は変化しない）
    pub async fn execute(
        &self,
        candidate: &str,
        channel: UserChannel,
    ) -> Result<Joined, JoinChatError> {
        // 1. 名前の検証
        let name = UserName::try_from(candidate)?;

        // 2. 定員・重複チェックと登録（履歴の再生を含む）
        let replayed = self
            .repository
            .try_join(User::new(name.clone(), channel))
            .await?;

        // 3. 参加通知をブロードキャスト
        self.repository
            .broadcast(BroadcastEvent::Join { name: name.clone() })
            .await;

        Ok(Joined { name, replayed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ChatRoom, LifecycleReplay, MockRoomRepository, NameError, outbound_channel},
        infrastructure::repository::InMemoryRoomRepository,
    };
    use irori_shared::time::SystemClock;
    use tokio::sync::Mutex;

    fn create_test_repository(capacity: usize) -> Arc<InMemoryRoomRepository> {
        let room = Arc::new(Mutex::new(ChatRoom::new(capacity, LifecycleReplay::Never)));
        Arc::new(InMemoryRoomRepository::new(room, Arc::new(SystemClock)))
    }

    #[tokio::test]
    async fn test_join_success_notifies_others() {
        // テスト項目: 参加に成功すると既存参加者に参加通知が届き、本人にはプロンプトのみが届く
        // given (前提条件):
        let repository = create_test_repository(10);
        let usecase = JoinChatUseCase::new(repository.clone());
        let (tx1, mut rx1) = outbound_channel();
        usecase.execute("alice", tx1).await.unwrap();
        while rx1.try_recv().is_ok() {}

        // when (操作):
        let (tx2, mut rx2) = outbound_channel();
        let result = usecase.execute("bob", tx2).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Ok(Joined {
                name: UserName::try_from("bob").unwrap(),
                replayed: 0
            })
        );
        assert_eq!(rx1.try_recv().unwrap(), "\nbob has joined our chat...\n");
        assert!(rx1.try_recv().unwrap().ends_with("][alice]:"));
        let own = rx2.try_recv().unwrap();
        assert!(own.ends_with("][bob]:"));
        assert!(rx2.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_join_invalid_name() {
        // テスト項目: 不正な名前では参加できず、登録されない
        // given (前提条件):
        let repository = create_test_repository(10);
        let usecase = JoinChatUseCase::new(repository.clone());

        // when (操作):
        let (tx, _rx) = outbound_channel();
        let result = usecase.execute("bad name", tx).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(JoinChatError::InvalidName(NameError::InvalidCharacter(' ')))
        );
        assert!(repository.user_names().await.is_empty());
    }

    #[tokio::test]
    async fn test_join_duplicate_name() {
        // テスト項目: 大文字小文字違いの重複した名前では参加できない
        // given (前提条件):
        let repository = create_test_repository(10);
        let usecase = JoinChatUseCase::new(repository.clone());
        let (tx1, _rx1) = outbound_channel();
        usecase.execute("alice", tx1).await.unwrap();

        // when (操作):
        let (tx2, _rx2) = outbound_channel();
        let result = usecase.execute("Alice", tx2).await;

        // then (期待する結果):
        assert_eq!(result, Err(JoinChatError::NameTaken("Alice".to_string())));
        assert_eq!(repository.user_names().await.len(), 1);
    }

    #[tokio::test]
    async fn test_join_room_full() {
        // テスト項目: 定員超過時にエラーが返され、満員判定が true になる
        // given (前提条件):
        let repository = create_test_repository(1);
        let usecase = JoinChatUseCase::new(repository.clone());
        let (tx1, _rx1) = outbound_channel();
        usecase.execute("alice", tx1).await.unwrap();

        // when (操作):
        let (tx2, _rx2) = outbound_channel();
        let result = usecase.execute("bob", tx2).await;

        // then (期待する結果):
        assert_eq!(result, Err(JoinChatError::RoomFull { capacity: 1 }));
        assert!(usecase.is_room_full().await);
        assert_eq!(usecase.capacity().await, 1);
    }

    #[tokio::test]
    async fn test_join_refused_does_not_broadcast() {
        // テスト項目: Repository が参加を拒否した場合はブロードキャストしない
        // given (前提条件):
        let mut repository = MockRoomRepository::new();
        repository
            .expect_try_join()
            .times(1)
            .returning(|_| Err(crate::domain::JoinError::RoomFull { capacity: 10 }));
        repository.expect_broadcast().never();
        let usecase = JoinChatUseCase::new(Arc::new(repository));

        // when (操作):
        let (tx, _rx) = outbound_channel();
        let result = usecase.execute("alice", tx).await;

        // then (期待する結果):
        assert_eq!(result, Err(JoinChatError::RoomFull { capacity: 10 }));
    }
}
