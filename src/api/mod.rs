//! HTTP surface: router, handlers and response helpers

pub mod handler;
pub mod helpers;
pub mod server;

pub use server::{AppState, create_router, serve, shutdown_signal};
