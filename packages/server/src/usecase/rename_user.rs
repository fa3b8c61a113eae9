//! UseCase: 改名処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RenameUserUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 不正な名前や使用中の名前では登録状態が一切変化しないことを保証
//! - 重複チェックと改名が同じロック内で行われ、同時改名でも名前が重複しないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：改名と通知
//! - 異常系：不正な名前、使用中の名前、自分自身の名前

use std::sync::Arc;

use crate::domain::{BroadcastEvent, RoomRepository, UserName};

use super::error::RenameUserError;

/// 改名のユースケース
pub struct RenameUserUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl RenameUserUseCase {
    /// 新しい RenameUserUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 改名を実行
    ///
    /// # Arguments
    ///
    /// * `current` - 現在の名前
    /// * `candidate` - 前後の空白を除去済みの新しい名前の候補
    ///
    /// # Returns
    ///
    /// * `Ok(UserName)` - 改名後の名前（改名通知は送信済み）
    /// * `Err(RenameUserError)` - 改名失敗（登録状態は変化しない）
    pub async fn execute(
        &self,
        current: &UserName,
        candidate: &str,
    ) -> Result<UserName, RenameUserError> {
        // 1. 名前の検証
        let new_name = UserName::try_from(candidate)?;

        // 2. 重複チェックと改名（同じロック内で行われる）
        self.repository.rename(current, new_name.clone()).await?;

        // 3. 改名通知をブロードキャスト
        self.repository
            .broadcast(BroadcastEvent::Rename {
                old_name: current.clone(),
                new_name: new_name.clone(),
            })
            .await;

        Ok(new_name)
    }
}
