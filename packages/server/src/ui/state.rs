//! Server state shared by every session.

use std::sync::Arc;

use irori_shared::time::Clock;

use crate::{
    domain::RoomRepository,
    usecase::{JoinChatUseCase, LeaveChatUseCase, RenameUserUseCase, SendMessageUseCase},
};

/// Shared application state
pub struct AppState {
    /// JoinChatUseCase（参加のユースケース）
    pub join_chat_usecase: Arc<JoinChatUseCase>,
    /// SendMessageUseCase（メッセージ送信のユースケース）
    pub send_message_usecase: Arc<SendMessageUseCase>,
    /// RenameUserUseCase（改名のユースケース）
    pub rename_user_usecase: Arc<RenameUserUseCase>,
    /// LeaveChatUseCase（退出のユースケース）
    pub leave_chat_usecase: Arc<LeaveChatUseCase>,
    /// Greeting sent to every new connection
    pub banner: Arc<str>,
    /// Clock for prompts written outside a broadcast
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Build every use case on top of one repository
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        banner: impl Into<Arc<str>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            join_chat_usecase: Arc::new(JoinChatUseCase::new(repository.clone())),
            send_message_usecase: Arc::new(SendMessageUseCase::new(repository.clone())),
            rename_user_usecase: Arc::new(RenameUserUseCase::new(repository.clone())),
            leave_chat_usecase: Arc::new(LeaveChatUseCase::new(repository)),
            banner: banner.into(),
            clock,
        }
    }
}
