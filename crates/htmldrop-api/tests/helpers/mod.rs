//! Shared test helpers: a test server backed by a tempdir local store, and a
//! variant with an injected storage backend for failure-path tests.

#![allow(dead_code)]

pub mod storage;

use axum_test::TestServer;
use htmldrop_api::setup;
use htmldrop_api::state::AppState;
use htmldrop_core::{Config, StorageBackend};
use htmldrop_storage::Storage;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

pub struct TestApp {
    pub server: TestServer,
    // Keeps the storage directory alive for the duration of the test.
    _storage_dir: TempDir,
}

pub fn test_config(storage_path: &Path) -> Config {
    Config {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        max_upload_bytes: 10 * 1024 * 1024,
        storage_backend: StorageBackend::Local,
        s3_bucket: None,
        s3_region: None,
        s3_endpoint: None,
        local_storage_path: storage_path.to_string_lossy().into_owned(),
        local_storage_base_url: "/uploads".to_string(),
    }
}

/// Build the full application against a tempdir-backed local store.
pub async fn setup_test_app() -> TestApp {
    let storage_dir = tempfile::tempdir().expect("create storage tempdir");
    let config = test_config(storage_dir.path());

    let (_state, router) = setup::initialize_app(config)
        .await
        .expect("initialize app");

    TestApp {
        server: TestServer::new(router).expect("start test server"),
        _storage_dir: storage_dir,
    }
}

/// Build the application with an injected storage backend.
pub fn setup_app_with_storage(storage: Arc<dyn Storage>) -> TestServer {
    let config = test_config(Path::new("unused"));
    let state = Arc::new(AppState { config, storage });
    let router = setup::routes::setup_routes(state).expect("setup routes");
    TestServer::new(router).expect("start test server")
}
