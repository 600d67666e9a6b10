use crate::autograd::BackwardOp;
use crate::error::AutodiffError;
use crate::ops::build_unary_node;
use crate::var::Var;
use std::rc::Rc;

/// Backward context for \( z = \sqrt{a} \): \( \frac{dz}{da} = \frac{1}{2\sqrt{a}} \).
#[derive(Debug)]
struct SqrtBackward {
    input: Var,
    output: f64,
}

impl BackwardOp for SqrtBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, AutodiffError> {
        if self.output == 0.0 {
            return Err(AutodiffError::division_by_zero("sqrt backward", grad_output));
        }
        Ok(vec![grad_output / (2.0 * self.output)])
    }

    fn inputs(&self) -> Vec<Var> {
        vec![self.input.clone()]
    }
}

/// Computes the square root of a scalar.
///
/// # Errors
/// Returns `AutodiffError::DomainError` for negative inputs. The gradient at 0
/// is undefined and makes the backward pass fail with `DivisionByZero`.
pub fn sqrt_op(a: &Var) -> Result<Var, AutodiffError> {
    let input_value = a.value();
    if input_value < 0.0 {
        return Err(AutodiffError::domain(
            "sqrt",
            input_value,
            "square root of a negative value",
        ));
    }
    let output = input_value.sqrt();
    Ok(build_unary_node(
        a,
        output,
        |input| Rc::new(SqrtBackward { input, output }),
        "sqrt",
    ))
}

#[cfg(test)]
#[path = "sqrt_test.rs"]
mod tests;
