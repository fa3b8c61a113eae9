//! Server execution logic.

use std::{future::Future, net::SocketAddr, sync::Arc};

use tokio::{
    io::{AsyncWriteExt, BufReader},
    net::{TcpListener, TcpStream, tcp::OwnedWriteHalf},
    sync::mpsc,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::domain::outbound_channel;

use super::{error::ServerError, session::Session, signal::shutdown_signal, state::AppState};

/// TCP chat server
///
/// This struct owns the shared state and spawns one session task per
/// accepted connection.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(Arc::new(app_state));
/// server.run("0.0.0.0".to_string(), 8989).await?;
/// ```
pub struct Server {
    state: Arc<AppState>,
}

impl Server {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Bind to `host:port` and serve until Ctrl+C
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address.
    pub async fn run(self, host: String, port: u16) -> Result<(), ServerError> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: bind_addr.clone(),
                source,
            })?;

        tracing::info!("Chat server listening on {}", listener.local_addr()?);
        tracing::info!("Connect with: nc {} {}", host, port);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, shutdown_signal()).await;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Accept connections on `listener` until `shutdown` resolves.
    ///
    /// Sessions already running are not interrupted by the shutdown.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F)
    where
        F: Future<Output = ()> + Send,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                accepted = listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        tokio::spawn(handle_connection(stream, peer, self.state.clone()));
                    }
                    Err(e) => {
                        tracing::error!("Failed to accept connection: {}", e);
                    }
                },
                _ = &mut shutdown => {
                    tracing::info!("Stopped accepting connections");
                    break;
                }
            }
        }
    }
}

async fn handle_connection(stream: TcpStream, peer: SocketAddr, state: Arc<AppState>) {
    let span = tracing::info_span!("session", id = %Uuid::new_v4(), %peer);

    async move {
        tracing::info!("Client connected");

        let (read_half, write_half) = stream.into_split();
        let (tx, rx) = outbound_channel();
        let writer = tokio::spawn(write_outbound(write_half, rx).in_current_span());

        let session = Session::new(BufReader::new(read_half), tx, state);
        if let Err(e) = session.run().await {
            tracing::warn!("Session ended with error: {}", e);
        }

        // The writer drains what is left once every sender is dropped
        if let Err(e) = writer.await {
            tracing::error!("Writer task failed: {}", e);
        }
        tracing::info!("Connection closed");
    }
    .instrument(span)
    .await
}

/// Copy queued text to the socket until the queue closes or a write fails
async fn write_outbound(mut writer: OwnedWriteHalf, mut rx: mpsc::Receiver<String>) {
    while let Some(text) = rx.recv().await {
        if let Err(e) = writer.write_all(text.as_bytes()).await {
            tracing::warn!("Failed to write to client: {}", e);
            return;
        }
    }

    if let Err(e) = writer.shutdown().await {
        tracing::debug!("Failed to shut down write half: {}", e);
    }
}
