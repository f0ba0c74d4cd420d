//! Htmldrop Core Library
//!
//! This crate provides the domain error types, configuration, constants, and
//! response models shared by the htmldrop storage and API crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, LogLevel};
pub use storage_types::StorageBackend;
