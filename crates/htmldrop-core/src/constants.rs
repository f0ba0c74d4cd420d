//! Shared constants.

/// Required filename suffix for uploads, compared case-insensitively.
pub const HTML_EXTENSION: &str = ".html";

/// Content type stored and served for every artifact.
pub const UPLOAD_CONTENT_TYPE: &str = "text/html";
