//! Public surface for the `hubspec-server` crate.
//!
//! Exposes the router builder, config and storage types so that external
//! crates (e.g. the conformance test suite) can spin up an in-process docs
//! server and mock hub without spawning a subprocess.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod storage;

pub use config::ServerConfig;
pub use handlers::docs::ApiDocs;
pub use router::build_router;
pub use storage::{fixtures, memory::MemoryStorage, Storage};
