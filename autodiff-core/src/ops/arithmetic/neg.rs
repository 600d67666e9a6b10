use crate::autograd::BackwardOp;
use crate::error::AutodiffError;
use crate::ops::build_unary_node;
use crate::var::Var;
use std::rc::Rc;

// --- Backward Operation ---

#[derive(Debug)]
struct NegBackward {
    input: Var,
}

impl BackwardOp for NegBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, AutodiffError> {
        Ok(vec![-grad_output])
    }

    fn inputs(&self) -> Vec<Var> {
        vec![self.input.clone()]
    }
}

// --- Forward Operation ---

/// Computes `-a`.
pub fn neg_op(a: &Var) -> Var {
    build_unary_node(a, -a.value(), |input| Rc::new(NegBackward { input }), "neg")
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
