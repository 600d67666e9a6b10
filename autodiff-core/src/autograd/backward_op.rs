use crate::error::AutodiffError;
use crate::var::Var;
use std::fmt::Debug;

/// Defines the backward pass of a differentiable scalar operation.
///
/// Every interior `Var` whose operands require gradients stores an
/// implementation of this trait in its `grad_fn`. It holds the operand values
/// captured during the forward pass, so the local derivative is evaluated at
/// exactly those values.
pub trait BackwardOp: Debug {
    /// Computes one chain-rule step.
    ///
    /// Receives \( \frac{dT}{d\text{Output}} \) (`grad_output`) and returns
    /// \( \frac{dT}{d\text{Output}} \cdot \frac{d\text{Output}}{d\text{Input}_i} \)
    /// for each input.
    ///
    /// # Returns
    /// * `Ok(Vec<f64>)`: one contribution per input. The order **must** match
    ///   the order of `inputs()`.
    /// * `Err(AutodiffError)`: if the derivative is undefined at the recorded
    ///   operand values (e.g. it would divide by zero).
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, AutodiffError>;

    /// Returns the operands that receive a contribution.
    ///
    /// Operands that do not require gradients are omitted.
    fn inputs(&self) -> Vec<Var>;
}
