/// Adapter layer for interface implementations.
///
/// This module contains adapters that implement domain interfaces:
/// - The summary cache and its error policy
/// - Persistence adapters (Redis, in-memory)
pub mod cache;
pub mod persistence;

pub use cache::SummaryCache;
