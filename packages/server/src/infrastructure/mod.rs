//! Infrastructure layer.
//!
//! Concrete implementations of the traits defined by the domain layer.

pub mod repository;
