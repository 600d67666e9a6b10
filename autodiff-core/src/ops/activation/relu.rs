use crate::autograd::BackwardOp;
use crate::error::AutodiffError;
use crate::ops::build_unary_node;
use crate::var::Var;
use std::rc::Rc;

// --- Backward Operation ---

#[derive(Debug)]
struct ReluBackward {
    input: Var,
    input_value: f64,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, AutodiffError> {
        // grad = upstream_grad * (input > 0)
        let mask = if self.input_value > 0.0 { 1.0 } else { 0.0 };
        Ok(vec![grad_output * mask])
    }

    fn inputs(&self) -> Vec<Var> {
        vec![self.input.clone()]
    }
}

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `ReLU(x) = max(0, x)`.
///
/// The derivative at 0 is taken to be 0.
pub fn relu_op(a: &Var) -> Var {
    let input_value = a.value();
    let output = if input_value > 0.0 { input_value } else { 0.0 };
    build_unary_node(
        a,
        output,
        |input| Rc::new(ReluBackward { input, input_value }),
        "relu",
    )
}
