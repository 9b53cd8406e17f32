//! Dense tensor implementation and operations
//!
//! This module provides the dense tensor implementation organized into
//! functional sub-modules.

// Core type definition
pub mod types;

// Operation modules (organized by functionality)
mod creation;
mod elementwise;
mod indexing;
mod linalg;

// Supporting modules
pub mod tensor_traits;

// Re-export the main type
pub use types::Tensor;
