//! Utility modules
//!
//! This module contains the error types and result types shared by every emitter.

pub mod error;

// Re-export commonly used items
pub use error::{EmitError, EmitResult};
