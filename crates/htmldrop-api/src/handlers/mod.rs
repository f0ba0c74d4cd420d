//! HTTP handlers.

pub mod index;
pub mod upload;
pub mod uploaded_file;
