use crate::autograd::BackwardOp;
use crate::error::AutodiffError;
use crate::ops::{build_binary_node, tracked_inputs};
use crate::var::Var;
use std::rc::Rc;

// --- Backward Operation Structure ---

/// Backward operation context for addition.
#[derive(Debug)]
struct AddBackward {
    a_node: Option<Var>,
    b_node: Option<Var>,
}

// --- Backward Operation Implementation ---

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, AutodiffError> {
        // dz/da = dz/db = 1
        let grads = self
            .a_node
            .iter()
            .chain(self.b_node.iter())
            .map(|_| grad_output)
            .collect();
        Ok(grads)
    }

    fn inputs(&self) -> Vec<Var> {
        tracked_inputs(&self.a_node, &self.b_node)
    }
}

// --- Forward Operation ---

/// Computes `a + b`.
pub fn add_op(a: &Var, b: &Var) -> Var {
    build_binary_node(
        a,
        b,
        a.value() + b.value(),
        |a_node, b_node| Rc::new(AddBackward { a_node, b_node }),
        "add",
    )
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
