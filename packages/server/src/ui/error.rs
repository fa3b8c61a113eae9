//! Error types for the chat server.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Startup errors. Any of these stops the process before it accepts clients.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to load banner from {}: {source}", path.display())]
    Banner {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("server I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Connection fault ending one session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("read failed: {0}")]
    Read(#[from] io::Error),

    /// The writer task stopped, so nothing more can reach the client
    #[error("connection closed while sending")]
    OutboundClosed,
}
