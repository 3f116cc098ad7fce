//! # Filter Pipeline
//!
//! The engine plays the host role around the filter contract: it looks
//! filters up, resolves their options, and runs them over decoded images.

pub mod engine;

// Re-exports for convenience
pub use engine::{FilterEngine, PreparedStep};
