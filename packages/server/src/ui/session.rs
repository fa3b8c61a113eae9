//! Per-connection session state machine.
//!
//! ```text
//! Connecting -> Naming -> Active -> (RenamePending -> Active)* -> Disconnected
//! ```
//!
//! A session owns the read half of its connection and the sending half of its
//! outbound queue. It never touches other sessions directly: every change to
//! shared state goes through the use cases in [`AppState`].

use std::sync::Arc;

use irori_shared::time::format_chat_timestamp;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{
    domain::{UserChannel, UserName, prompt_line},
    usecase::{JoinChatError, RenameUserError, SendMessageError},
};

use super::{error::SessionError, protocol, state::AppState};

/// States of one client connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Capacity gate and greeting
    Connecting,
    /// Negotiating a display name
    Naming,
    /// Registered and exchanging messages
    Active,
    /// Registered and choosing a new display name
    RenamePending,
    /// Terminal
    Disconnected,
}

pub struct Session<R> {
    reader: R,
    outbound: UserChannel,
    state: Arc<AppState>,
    /// Name under which this session is registered, once it is
    registered: Option<UserName>,
}

impl<R> Session<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(reader: R, outbound: UserChannel, state: Arc<AppState>) -> Self {
        Self {
            reader,
            outbound,
            state,
            registered: None,
        }
    }

    /// Drive the session until the client leaves.
    ///
    /// A registered user is always removed and announced as leaving, whether
    /// the session ends normally or with an error.
    pub async fn run(mut self) -> Result<(), SessionError> {
        let result = self.drive().await;

        if let Some(name) = self.registered.take() {
            self.state.leave_chat_usecase.execute(&name).await;
            tracing::info!("Client disconnected ({})", name);
        }

        result
    }

    async fn drive(&mut self) -> Result<(), SessionError> {
        let mut state = SessionState::Connecting;
        loop {
            tracing::trace!(?state, "session state");
            state = match state {
                SessionState::Connecting => self.greet().await?,
                SessionState::Naming => self.choose_name().await?,
                SessionState::Active => self.receive_line().await?,
                SessionState::RenamePending => self.choose_new_name().await?,
                SessionState::Disconnected => return Ok(()),
            };
        }
    }

    async fn greet(&mut self) -> Result<SessionState, SessionError> {
        let join = &self.state.join_chat_usecase;
        if join.is_room_full().await {
            let capacity = join.capacity().await;
            tracing::warn!("Server reached the maximum of {} users", capacity);
            self.send(protocol::room_full_notice(capacity)).await?;
            return Ok(SessionState::Disconnected);
        }

        let banner = self.state.banner.to_string();
        self.send(banner).await?;
        Ok(SessionState::Naming)
    }

    async fn choose_name(&mut self) -> Result<SessionState, SessionError> {
        loop {
            self.send(protocol::NAME_PROMPT).await?;
            let Some(line) = self.read_line().await? else {
                tracing::info!("Client left before choosing a name");
                return Ok(SessionState::Disconnected);
            };
            let candidate = line.trim();

            match self
                .state
                .join_chat_usecase
                .execute(candidate, self.outbound.clone())
                .await
            {
                Ok(joined) => {
                    tracing::info!(
                        "New client connected ({}), replayed {} line(s)",
                        joined.name,
                        joined.replayed
                    );
                    self.registered = Some(joined.name);
                    return Ok(SessionState::Active);
                }
                Err(JoinChatError::InvalidName(e)) => {
                    tracing::info!("Client entered an invalid name ({:?}): {}", candidate, e);
                    self.send(protocol::INVALID_NAME_NOTICE).await?;
                }
                Err(JoinChatError::NameTaken(name)) => {
                    tracing::info!("Client chose a name already in use ({})", name);
                    self.send(protocol::NAME_TAKEN_NOTICE).await?;
                }
                Err(JoinChatError::RoomFull { capacity }) => {
                    tracing::warn!("Server reached the maximum of {} users", capacity);
                    self.send(protocol::room_full_notice(capacity)).await?;
                    return Ok(SessionState::Disconnected);
                }
            }
        }
    }

    async fn receive_line(&mut self) -> Result<SessionState, SessionError> {
        let Some(name) = self.registered.clone() else {
            return Ok(SessionState::Disconnected);
        };
        let Some(line) = self.read_line().await? else {
            return Ok(SessionState::Disconnected);
        };

        if line == protocol::RENAME_COMMAND {
            return Ok(SessionState::RenamePending);
        }

        match self
            .state
            .send_message_usecase
            .execute(&name, line.clone())
            .await
        {
            Ok(report) => {
                tracing::info!(
                    "Message received from ({}) for {} recipient(s): {:?}",
                    name,
                    report.recipients,
                    line
                );
            }
            Err(SendMessageError::EmptyMessage) => {
                tracing::info!("Client tried to send an empty message ({})", name);
                let timestamp = format_chat_timestamp(&self.state.clock.now());
                self.send(protocol::EMPTY_MESSAGE_NOTICE).await?;
                self.send(format!("\n{}", prompt_line(&timestamp, &name))).await?;
            }
        }
        Ok(SessionState::Active)
    }

    async fn choose_new_name(&mut self) -> Result<SessionState, SessionError> {
        let Some(current) = self.registered.clone() else {
            return Ok(SessionState::Disconnected);
        };

        loop {
            self.send(protocol::NEW_NAME_PROMPT).await?;
            tracing::info!("Client tries to change their name ({})", current);
            let Some(line) = self.read_line().await? else {
                return Ok(SessionState::Disconnected);
            };

            match self
                .state
                .rename_user_usecase
                .execute(&current, line.trim())
                .await
            {
                Ok(new_name) => {
                    tracing::info!(
                        "Client ({}) changed their name successfully to ({})",
                        current,
                        new_name
                    );
                    self.registered = Some(new_name);
                    return Ok(SessionState::Active);
                }
                Err(RenameUserError::InvalidName(e)) => {
                    tracing::info!("Client ({}) entered an invalid name: {}", current, e);
                    self.send(protocol::INVALID_NEW_NAME_NOTICE).await?;
                }
                Err(RenameUserError::NameTaken(name)) => {
                    tracing::info!(
                        "Client ({}) failed to change their name to ({})",
                        current,
                        name
                    );
                    self.send(protocol::NAME_TAKEN_NOTICE).await?;
                }
                Err(RenameUserError::UserNotFound(name)) => {
                    tracing::error!("Session user ({}) is missing from the registry", name);
                    return Ok(SessionState::Disconnected);
                }
            }
        }
    }

    /// Read one newline-terminated line.
    ///
    /// `None` on end of stream, including a final line with no newline.
    /// Invalid UTF-8 is replaced rather than rejected.
    async fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut buf = Vec::new();
        let n = self.reader.read_until(b'\n', &mut buf).await?;
        if n == 0 || buf.last() != Some(&b'\n') {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Queue text for this client, waiting while its queue is full
    async fn send(&self, text: impl Into<String>) -> Result<(), SessionError> {
        self.outbound
            .send(text.into())
            .await
            .map_err(|_| SessionError::OutboundClosed)
    }
}
