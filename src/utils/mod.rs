//! Markup processing helpers

pub mod links;
pub mod text;

pub use links::{LinkPartition, extract_links};
pub use text::extract_text;
