use crate::autograd::BackwardOp;
use crate::error::AutodiffError;
use crate::ops::{build_binary_node, tracked_inputs};
use crate::var::Var;
use std::rc::Rc;

#[derive(Debug)]
struct SubBackward {
    a_node: Option<Var>,
    b_node: Option<Var>,
}

impl BackwardOp for SubBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, AutodiffError> {
        let mut grads = Vec::with_capacity(2);
        if self.a_node.is_some() {
            grads.push(grad_output);
        }
        if self.b_node.is_some() {
            grads.push(-grad_output);
        }
        Ok(grads)
    }

    fn inputs(&self) -> Vec<Var> {
        tracked_inputs(&self.a_node, &self.b_node)
    }
}

/// Computes `a - b`.
pub fn sub_op(a: &Var, b: &Var) -> Var {
    build_binary_node(
        a,
        b,
        a.value() - b.value(),
        |a_node, b_node| Rc::new(SubBackward { a_node, b_node }),
        "sub",
    )
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
