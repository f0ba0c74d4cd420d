//! Htmldrop Storage Library
//!
//! This crate provides the storage abstraction and implementations for
//! htmldrop: the `Storage` trait plus S3 and local-filesystem backends.
//!
//! # Storage keys
//!
//! Keys are single path segments of the form `{uuid}-{filename}`, generated by
//! the intake handler. Keys must not contain a `..` path component or a
//! leading `/`; the local backend rejects such keys rather than resolving
//! them.

pub mod factory;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use htmldrop_core::StorageBackend;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
