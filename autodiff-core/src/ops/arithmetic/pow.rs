use crate::autograd::BackwardOp;
use crate::error::AutodiffError;
use crate::ops::{build_binary_node, tracked_inputs};
use crate::var::Var;
use std::rc::Rc;

// --- Backward Operation Structure ---

/// Backward context for `z = base ^ exponent`.
#[derive(Debug)]
struct PowBackward {
    base_node: Option<Var>,
    exponent_node: Option<Var>,
    base: f64,
    exponent: f64,
    output: f64,
}

// --- Backward Operation Implementation ---

impl BackwardOp for PowBackward {
    /// dz/dbase = exponent * base^(exponent - 1)
    /// dz/dexponent = base^exponent * ln(base)
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, AutodiffError> {
        let mut grads = Vec::with_capacity(2);

        if self.base_node.is_some() {
            if self.base == 0.0 && self.exponent < 1.0 {
                return Err(AutodiffError::division_by_zero("pow backward (base)", self.exponent));
            }
            grads.push(grad_output * self.exponent * self.base.powf(self.exponent - 1.0));
        }

        if self.exponent_node.is_some() {
            if self.base < 0.0 {
                return Err(AutodiffError::domain(
                    "pow backward (exponent)",
                    self.base,
                    "derivative w.r.t. the exponent needs ln of a negative base",
                ));
            }
            // base == 0 only reaches here with exponent >= 0, where z is flat in the exponent.
            let local = if self.base == 0.0 { 0.0 } else { self.output * self.base.ln() };
            grads.push(grad_output * local);
        }

        Ok(grads)
    }

    fn inputs(&self) -> Vec<Var> {
        tracked_inputs(&self.base_node, &self.exponent_node)
    }
}

// --- Forward Operation ---

/// Computes `base ^ exponent`, differentiable in both operands.
///
/// # Errors
/// * `DivisionByZero` if `base` is 0 and `exponent` is negative.
/// * `DomainError` if `base` is negative and `exponent` is a finite
///   non-integer (the result would be complex). Infinite exponents give the
///   native limit.
pub fn pow_op(base: &Var, exponent: &Var) -> Result<Var, AutodiffError> {
    let base_value = base.value();
    let exponent_value = exponent.value();
    if base_value == 0.0 && exponent_value < 0.0 {
        return Err(AutodiffError::division_by_zero("pow", 1.0));
    }
    if base_value < 0.0 && exponent_value.is_finite() && exponent_value.fract() != 0.0 {
        return Err(AutodiffError::domain(
            "pow",
            base_value,
            "negative base raised to a non-integer power",
        ));
    }

    let output = base_value.powf(exponent_value);
    Ok(build_binary_node(
        base,
        exponent,
        output,
        |base_node, exponent_node| {
            Rc::new(PowBackward {
                base_node,
                exponent_node,
                base: base_value,
                exponent: exponent_value,
                output,
            })
        },
        "pow",
    ))
}

/// Computes `base ^ exponent` for a constant exponent.
pub fn powf_op(base: &Var, exponent: f64) -> Result<Var, AutodiffError> {
    pow_op(base, &Var::constant(exponent))
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
