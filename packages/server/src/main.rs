//! `hubspec-server`: serves the Hub API documentation, optionally with a
//! mock hub behind it.
//!
//! # Quick start
//!
//! ```sh
//! # Docs page on the default port:
//! hubspec-server
//!
//! # Docs plus a seeded mock hub, advertising the local server:
//! HUBSPEC_MOCK_HUB=true HUBSPEC_SERVER_URL=http://localhost:3000 hubspec-server
//! ```
//!
//! # Environment variables
//!
//! See [`hubspec_server::ServerConfig`] for the full list.

use std::sync::Arc;

use hubspec_server::{build_router, fixtures, ApiDocs, MemoryStorage, ServerConfig, Storage};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hubspec_server=info,tower_http=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env().unwrap_or_else(|e| panic!("invalid configuration: {e}"));

    let docs = ApiDocs::build(&config.doc_options())
        .unwrap_or_else(|e| panic!("failed to render the OpenAPI document: {e}"));

    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    if config.mock_hub {
        fixtures::seed(storage.as_ref())
            .await
            .unwrap_or_else(|e| panic!("failed to seed the mock hub: {e}"));
        tracing::info!("mock hub: enabled with fixture data under /v1/");
    }
    if !config.api_keys.is_empty() {
        tracing::info!("mock hub: {} API key(s) accepted", config.api_keys.len());
    }

    let bind_addr = config.bind_addr;
    let app = build_router(storage, config, Arc::new(docs));

    tracing::info!("listening on {bind_addr}, docs at /api-docs");
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));

    axum::serve(listener, app).await.expect("server error");
}
