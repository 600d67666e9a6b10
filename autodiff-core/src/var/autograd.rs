// src/var/autograd.rs

use crate::autograd::{graph::ComputationGraph, BackwardConfig};
use crate::error::AutodiffError;
use crate::var::Var;

impl Var {
    /// Computes the gradient of this node w.r.t. every node it depends on.
    ///
    /// After the call, `grad()` on any node reachable from `self` returns
    /// \( \frac{\partial\,\text{self}}{\partial\,\text{node}} \). Gradients from
    /// a previous pass over the same nodes are replaced, so calling this twice
    /// yields the same values. See [`Var::backward_with`] to accumulate instead.
    ///
    /// # Errors
    /// * `RequiresGradNotMet` if this node was built only from constants.
    /// * Any error raised by a local derivative rule (e.g. `DivisionByZero`
    ///   when differentiating `sqrt` at 0). No gradient is written in that case.
    pub fn backward(&self) -> Result<(), AutodiffError> {
        self.backward_with(BackwardConfig::default())
    }

    /// Runs a backward pass with an explicit seed and accumulation mode.
    pub fn backward_with(&self, config: BackwardConfig) -> Result<(), AutodiffError> {
        if !self.requires_grad() {
            return Err(AutodiffError::RequiresGradNotMet);
        }
        if !config.seed.is_finite() {
            return Err(AutodiffError::NonFiniteSeed(config.seed));
        }
        if self.grad_fn().is_none() {
            log::debug!("backward() called on a leaf node. Only the seed is written.");
        }

        let graph = ComputationGraph::new(self);
        log::debug!(
            "backward over {} nodes (seed={}, accumulate={})",
            graph.len(),
            config.seed,
            config.accumulate
        );
        let gradients = graph.backward(config.seed)?;

        for node in graph.nodes() {
            let grad = gradients.get(&node.node_id()).copied().unwrap_or(0.0);
            let mut guard = node.write_data();
            if config.accumulate {
                guard.grad += grad;
            } else {
                guard.grad = grad;
            }
            if !guard.grad.is_finite() {
                log::warn!(
                    "non-finite gradient {} on node {:?} ({})",
                    guard.grad,
                    node.node_id(),
                    guard.op_name.unwrap_or("leaf")
                );
            }
        }

        Ok(())
    }
}
