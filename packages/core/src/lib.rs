// Library root - exposes internal modules for integration tests in `tests/`.
// Production entry point remains `src/main.rs`.

pub mod api;
pub mod error;
pub mod filters;
pub mod metrics;
pub mod models;
pub mod seed;
pub mod stats;
pub mod store;

// Startup plumbing used by `main.rs`.
pub mod cli;
pub mod config;
pub mod logging;
