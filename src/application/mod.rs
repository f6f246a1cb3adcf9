//! # Application Layer
//!
//! Statistical tests, resampling and planning use cases built on the
//! domain types. Interfaces define the seams that connectors implement.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
