//! Server configuration.

use std::path::PathBuf;

use crate::domain::LifecycleReplay;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8989;
pub const DEFAULT_BANNER_PATH: &str = "resources/welcome.txt";
pub const DEFAULT_LOG_FILE: &str = "server.log";

/// Everything the server needs to start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Registry capacity
    pub max_users: usize,
    pub banner_path: PathBuf,
    pub lifecycle_replay: LifecycleReplay,
    /// `None` logs to stdout only
    pub log_file: Option<PathBuf>,
}

