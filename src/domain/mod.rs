//! # Domain Layer
//!
//! Observations, hypotheses and test outcomes.
//! This layer is independent of I/O, progress reporting and the CLI.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
