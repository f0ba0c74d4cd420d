//! Response models shared between the API and its clients.

mod upload;

pub use upload::UploadResponse;
