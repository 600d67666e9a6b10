use crate::autograd::BackwardOp;
use crate::error::AutodiffError;
use crate::ops::build_unary_node;
use crate::var::Var;
use std::rc::Rc;

#[derive(Debug)]
struct TanhBackward {
    input: Var,
    output: f64,
}

impl BackwardOp for TanhBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, AutodiffError> {
        Ok(vec![grad_output * (1.0 - self.output * self.output)])
    }

    fn inputs(&self) -> Vec<Var> {
        vec![self.input.clone()]
    }
}

/// Computes the hyperbolic tangent of a scalar.
pub fn tanh_op(a: &Var) -> Var {
    let output = a.value().tanh();
    build_unary_node(a, output, |input| Rc::new(TanhBackward { input, output }), "tanh")
}
