//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 送信者以外にメッセージがブロードキャストされ、送信者にはエコーされないことを保証
//! - 改行のみのメッセージがブロードキャストも履歴追加もされないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：メッセージ送信とブロードキャスト
//! - 異常系：空メッセージ
//! - エッジケース：送信者のみが接続している場合

use std::sync::Arc;

use crate::domain::{BroadcastEvent, BroadcastReport, RoomRepository, UserName};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `sender` - 送信者の名前
    /// * `line` - クライアントから受信した 1 行（末尾の改行を含む）
    ///
    /// # Returns
    ///
    /// * `Ok(BroadcastReport)` - ブロードキャストの結果
    /// * `Err(SendMessageError::EmptyMessage)` - 改行のみの行（何も配信しない）
    pub async fn execute(
        &self,
        sender: &UserName,
        line: String,
    ) -> Result<BroadcastReport, SendMessageError> {
        if line.is_empty() || line == "\n" {
            return Err(SendMessageError::EmptyMessage);
        }

        let report = self
            .repository
            .broadcast(BroadcastEvent::Message {
                sender: sender.clone(),
                content: line,
            })
            .await;

        if report.failures > 0 {
            tracing::warn!(
                "Message from '{}' could not be delivered {} time(s)",
                sender,
                report.failures
            );
        }

        Ok(report)
    }
}
