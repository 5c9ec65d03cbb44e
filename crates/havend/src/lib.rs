//! HostelHaven AI daemon library - exposes modules for testing.

pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod server;
