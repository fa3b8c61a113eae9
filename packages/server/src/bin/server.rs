//! Line-oriented TCP chat server.
//!
//! Clients join with netcat, pick a name and chat with everyone in the room.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin irori-server
//! cargo run --bin irori-server -- 2525 --max-users 4 --no-log-file
//! nc localhost 8989
//! ```

use std::{path::PathBuf, process::ExitCode, sync::Arc};

use clap::Parser;
use irori_server::{
    config::{
        DEFAULT_BANNER_PATH, DEFAULT_HOST, DEFAULT_LOG_FILE, DEFAULT_PORT, ServerConfig,
    },
    domain::{ChatRoom, DEFAULT_MAX_USERS, LifecycleReplay},
    infrastructure::repository::InMemoryRoomRepository,
    ui::{Server, load_banner, state::AppState},
};
use irori_shared::{logger::setup_logger, time::SystemClock};
use tokio::sync::Mutex;

#[derive(Parser, Debug)]
#[command(name = "irori-server")]
#[command(about = "Line-oriented TCP chat server", long_about = None)]
struct Args {
    /// Port number to listen on
    #[arg(default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = DEFAULT_HOST)]
    host: String,

    /// Maximum number of users in the room
    #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_USERS, value_parser = parse_max_users)]
    max_users: usize,

    /// Greeting banner sent to every new connection
    #[arg(short = 'b', long, default_value = DEFAULT_BANNER_PATH)]
    banner: PathBuf,

    /// Which join/leave/rename announcements are replayed to new users
    /// (never, with-content, always)
    #[arg(long, default_value_t = LifecycleReplay::default())]
    lifecycle_replay: LifecycleReplay,

    /// File mirroring the log output
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Log to stdout only
    #[arg(long)]
    no_log_file: bool,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            max_users: args.max_users,
            banner_path: args.banner,
            lifecycle_replay: args.lifecycle_replay,
            log_file: (!args.no_log_file).then_some(args.log_file),
        }
    }
}

fn parse_max_users(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = ServerConfig::from(Args::parse());

    // Initialize tracing
    if let Err(e) = setup_logger(env!("CARGO_BIN_NAME"), "info", config.log_file.as_deref()) {
        eprintln!("Failed to open log file: {}", e);
        return ExitCode::FAILURE;
    }

    // Initialize dependencies in order:
    // 1. Banner
    // 2. Repository
    // 3. AppState (UseCases)
    // 4. Server

    // 1. Load the banner once; a missing banner stops startup
    let banner = match load_banner(&config.banner_path).await {
        Ok(banner) => banner,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    // 2. Create Repository (in-memory room)
    let clock = Arc::new(SystemClock);
    let room = Arc::new(Mutex::new(ChatRoom::new(
        config.max_users,
        config.lifecycle_replay,
    )));
    let repository = Arc::new(InMemoryRoomRepository::new(room, clock.clone()));
    tracing::info!(
        "Chat room created (maximum {} users, lifecycle replay: {})",
        config.max_users,
        config.lifecycle_replay
    );

    // 3. Create AppState with every UseCase
    let state = Arc::new(AppState::new(repository, banner, clock));

    // 4. Create and run the server
    let server = Server::new(state);
    if let Err(e) = server.run(config.host, config.port).await {
        tracing::error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
