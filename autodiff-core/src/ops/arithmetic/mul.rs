use crate::autograd::BackwardOp;
use crate::error::AutodiffError;
use crate::ops::{build_binary_node, tracked_inputs};
use crate::var::Var;
use std::rc::Rc;

// --- Backward Operation Structure ---

/// Backward operation context for multiplication.
#[derive(Debug)]
struct MulBackward {
    a_node: Option<Var>,
    b_node: Option<Var>,
    a_value: f64,
    b_value: f64,
}

// --- Backward Operation Implementation ---

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, AutodiffError> {
        let mut grads = Vec::with_capacity(2);
        // grad_a = grad_output * b
        if self.a_node.is_some() {
            grads.push(grad_output * self.b_value);
        }
        // grad_b = grad_output * a
        if self.b_node.is_some() {
            grads.push(grad_output * self.a_value);
        }
        Ok(grads)
    }

    fn inputs(&self) -> Vec<Var> {
        tracked_inputs(&self.a_node, &self.b_node)
    }
}

// --- Forward Operation ---

/// Computes `a * b`.
pub fn mul_op(a: &Var, b: &Var) -> Var {
    let a_value = a.value();
    let b_value = b.value();
    build_binary_node(
        a,
        b,
        a_value * b_value,
        |a_node, b_node| {
            Rc::new(MulBackward {
                a_node,
                b_node,
                a_value,
                b_value,
            })
        },
        "mul",
    )
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
