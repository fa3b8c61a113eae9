//! UseCase: 退出処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - LeaveChatUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 退出時に参加者リストから削除され、残りの参加者に 1 回だけ通知されることを保証
//! - 切断の競合（二重の退出処理）でサーバーが落ちないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加者の退出と通知
//! - エッジケース：未登録ユーザーの退出（通知なし）

use std::sync::Arc;

use crate::domain::{BroadcastEvent, RoomRepository, UserName};

/// 退出のユースケース
pub struct LeaveChatUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl LeaveChatUseCase {
    /// 新しい LeaveChatUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 退出を実行
    ///
    /// 登録されていた場合のみ退出通知をブロードキャストする。
    ///
    /// # Returns
    ///
    /// 参加者リストから削除された場合 `true`
    pub async fn execute(&self, name: &UserName) -> bool {
        if !self.repository.remove(name).await {
            tracing::debug!("'{}' was not registered, skipping leave notice", name);
            return false;
        }

        self.repository
            .broadcast(BroadcastEvent::Leave { name: name.clone() })
            .await;
        true
    }
}
