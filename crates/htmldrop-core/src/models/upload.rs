use serde::{Deserialize, Serialize};

/// Successful upload response: the locator under which the stored page can be
/// fetched. An absolute URL for object-store backends, a root-relative path
/// for the local filesystem backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub link: String,
}
