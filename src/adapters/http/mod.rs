//! HTTP adapters - REST API implementations.

pub mod evaluation;

// Re-export key types for convenience
pub use evaluation::evaluation_router;
