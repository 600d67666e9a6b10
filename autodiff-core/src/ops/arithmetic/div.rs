use crate::autograd::BackwardOp;
use crate::error::AutodiffError;
use crate::ops::{build_binary_node, tracked_inputs};
use crate::var::Var;
use std::rc::Rc;

// --- Backward Operation Structure ---
#[derive(Debug)]
struct DivBackward {
    a_node: Option<Var>,
    b_node: Option<Var>,
    a_value: f64,
    b_value: f64,
}

// --- Backward Operation Implementation ---
impl BackwardOp for DivBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, AutodiffError> {
        // For z = a / b:
        // grad(a) = grad_output * (1 / b)
        // grad(b) = grad_output * (-a / b^2)
        if self.b_value == 0.0 {
            return Err(AutodiffError::division_by_zero("div backward", self.a_value));
        }
        let mut grads = Vec::with_capacity(2);
        if self.a_node.is_some() {
            grads.push(grad_output / self.b_value);
        }
        if self.b_node.is_some() {
            grads.push(-grad_output * self.a_value / (self.b_value * self.b_value));
        }
        Ok(grads)
    }

    fn inputs(&self) -> Vec<Var> {
        tracked_inputs(&self.a_node, &self.b_node)
    }
}

// --- Forward Operation ---

/// Computes `a / b`.
///
/// # Errors
/// Returns `AutodiffError::DivisionByZero` if `b` is zero. No node is created.
pub fn div_op(a: &Var, b: &Var) -> Result<Var, AutodiffError> {
    let a_value = a.value();
    let b_value = b.value();
    if b_value == 0.0 {
        return Err(AutodiffError::division_by_zero("div", a_value));
    }
    Ok(build_binary_node(
        a,
        b,
        a_value / b_value,
        |a_node, b_node| {
            Rc::new(DivBackward {
                a_node,
                b_node,
                a_value,
                b_value,
            })
        },
        "div",
    ))
}

/// Computes `1 / a`.
pub fn reciprocal_op(a: &Var) -> Result<Var, AutodiffError> {
    div_op(&Var::constant(1.0), a)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
