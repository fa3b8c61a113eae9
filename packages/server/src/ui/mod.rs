//! TCP chat server implementation.

mod banner;
mod error;
pub mod protocol;
mod server;
mod session;
mod signal;
pub mod state;

pub use banner::load_banner;
pub use error::{ServerError, SessionError};
pub use server::Server;
pub use session::{Session, SessionState};
