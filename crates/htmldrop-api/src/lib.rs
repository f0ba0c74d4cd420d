//! Htmldrop API
//!
//! Axum HTTP service for the htmldrop page uploader: one intake endpoint, a
//! static upload page, artifact serving, and health probes.

pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod utils;
