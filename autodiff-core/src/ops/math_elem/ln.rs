// autodiff-core/src/ops/math_elem/ln.rs

use crate::autograd::BackwardOp;
use crate::error::AutodiffError;
use crate::ops::build_unary_node;
use crate::var::Var;
use std::rc::Rc;

// --- LnBackward Definition ---

/// Backward pass structure for the natural logarithm (`ln`) operation.
///
/// Stores the input value, as it is needed to compute the gradient (1 / input).
#[derive(Debug)]
struct LnBackward {
    input: Var,
    input_value: f64,
}

// --- BackwardOp Implementation for LnBackward ---

impl BackwardOp for LnBackward {
    /// Computes the gradient for \( z = \ln(a) \).
    ///
    /// Using the chain rule \( \frac{dL}{da} = \frac{dL}{dz} \cdot \frac{1}{a} \).
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, AutodiffError> {
        Ok(vec![grad_output / self.input_value])
    }

    fn inputs(&self) -> Vec<Var> {
        vec![self.input.clone()]
    }
}

// --- ln_op Implementation (Public API + Autograd Setup) ---

/// Computes the natural logarithm (base \( e \)) of a scalar.
///
/// # Errors
/// Returns `AutodiffError::DomainError` if the input is zero or negative.
/// A NaN input is not rejected and yields NaN.
pub fn ln_op(a: &Var) -> Result<Var, AutodiffError> {
    let input_value = a.value();
    if input_value <= 0.0 {
        return Err(AutodiffError::domain(
            "ln",
            input_value,
            "logarithm of a non-positive value",
        ));
    }
    Ok(build_unary_node(
        a,
        input_value.ln(),
        |input| Rc::new(LnBackward { input, input_value }),
        "ln",
    ))
}

// --- Tests ---
#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
