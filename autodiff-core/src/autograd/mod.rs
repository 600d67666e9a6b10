//! # Automatic differentiation engine
//!
//! - [`BackwardOp`]: the local derivative rule every interior node carries.
//! - [`graph`]: topological ordering of the nodes reachable from a terminal and
//!   reverse propagation of gradients along that order.
//! - [`BackwardConfig`]: seed and accumulation mode of a backward pass.
//! - [`grad_check`]: comparison of analytical gradients against finite differences.

pub mod backward_op;
pub mod config;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use config::BackwardConfig;
pub use graph::NodeId;
