//! Shared helpers for the hub conformance test suite.
//!
//! Provides [`spawn_hub`]: binds a `TcpListener` on an ephemeral port, wires
//! up the docs server with a seeded mock hub backed by `MemoryStorage`, and
//! returns both the local URL and the underlying storage so tests can inspect
//! state without going through the HTTP layer.

use std::sync::Arc;

use hubspec_server::{build_router, fixtures, ApiDocs, MemoryStorage, ServerConfig, Storage};

/// The only API key the conformance hub accepts.
pub const API_KEY: &str = "conformance-key";

/// Start an ephemeral in-process mock hub and return `(base_url, storage)`.
///
/// The hub runs in a background `tokio` task bound to an OS-assigned port on
/// `127.0.0.1`, seeded with [`fixtures`], and accepts only [`API_KEY`]. The
/// OpenAPI document it serves lists `base_url` as its only server.
///
/// # Panics
///
/// Panics if the TCP listener cannot be bound or the hub fails to start.
pub async fn spawn_hub() -> (String, Arc<MemoryStorage>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("get local addr");
    let base_url = format!("http://{addr}");

    let mem_storage = Arc::new(MemoryStorage::new());
    fixtures::seed(mem_storage.as_ref())
        .await
        .expect("seed fixtures");
    let storage: Arc<dyn Storage> = Arc::clone(&mem_storage) as Arc<dyn Storage>;

    let config = ServerConfig {
        bind_addr: addr,
        servers: vec![base_url.clone()],
        mock_hub: true,
        api_keys: vec![API_KEY.into()],
    };
    let docs = Arc::new(ApiDocs::build(&config.doc_options()).expect("render OpenAPI document"));
    let router = build_router(storage, config, docs);

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("conformance hub error");
    });

    (base_url, mem_storage)
}
