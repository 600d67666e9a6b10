// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Piecewise non-linearities on a single scalar.
//!
//! ## Currently Implemented:
//! - [`ReLU`](relu/fn.relu_op.html): Rectified Linear Unit.

pub mod relu;

// Re-export key functions
pub use relu::relu_op;
