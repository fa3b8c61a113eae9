//! Irori: a single-room, line-oriented TCP chat server.
//!
//! Clients connect with a plain TCP client such as `nc`, choose a display
//! name, and exchange timestamped broadcast messages. New clients receive the
//! chat history before any live message.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;
