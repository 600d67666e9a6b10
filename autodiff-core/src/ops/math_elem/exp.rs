use crate::autograd::BackwardOp;
use crate::error::AutodiffError;
use crate::ops::build_unary_node;
use crate::var::Var;
use std::rc::Rc;

#[derive(Debug)]
struct ExpBackward {
    input: Var,
    output: f64,
}

impl BackwardOp for ExpBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, AutodiffError> {
        Ok(vec![grad_output * self.output])
    }

    fn inputs(&self) -> Vec<Var> {
        vec![self.input.clone()]
    }
}

/// Computes \( e^a \).
pub fn exp_op(a: &Var) -> Var {
    let output = a.value().exp();
    build_unary_node(a, output, |input| Rc::new(ExpBackward { input, output }), "exp")
}
