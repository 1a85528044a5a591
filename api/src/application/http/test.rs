use std::path::Path;
use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use tempfile::TempDir;
use test_context::AsyncTestContext;

use crate::application::http::server::http_server::{router, state};
use crate::args::Args;

/// Server over a fresh data directory. The upstream URL points at a closed
/// port, so any accidental model call fails fast.
pub async fn test_server(data_dir: &Path) -> TestServer {
    let data_dir = data_dir.to_string_lossy().into_owned();
    let args = Args::parse_from([
        "pantry-chef",
        "--gemini-api-key",
        "test-key",
        "--llm-base-url",
        "http://127.0.0.1:9",
        "--llm-timeout-secs",
        "2",
        "--data-dir",
        data_dir.as_str(),
    ]);

    let state = state(Arc::new(args)).await.expect("failed to build state");
    let router = router(state).expect("failed to build router");

    TestServer::new(router).expect("failed to start test server")
}

pub struct ApiTestContext {
    pub server: TestServer,
    pub data_dir: TempDir,
}

impl AsyncTestContext for ApiTestContext {
    async fn setup() -> Self {
        let data_dir = tempfile::tempdir().expect("failed to create temp dir");
        let server = test_server(data_dir.path()).await;

        Self { server, data_dir }
    }
}
