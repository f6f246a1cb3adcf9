//! # Connector Layer
//!
//! Adapters between the application layer and the outside world:
//! - Sample files on disk (tokio fs)
//! - Terminal progress (indicatif)

pub mod adapter;

pub use adapter::*;
