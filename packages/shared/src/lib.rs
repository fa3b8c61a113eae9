//! Shared utilities for the Irori chat server.
//!
//! - `logger`: tracing subscriber setup (stdout + optional log file)
//! - `time`: clock abstraction and chat timestamp formatting

pub mod logger;
pub mod time;
