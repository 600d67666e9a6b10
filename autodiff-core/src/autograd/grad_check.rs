use crate::error::AutodiffError;
use crate::var::Var;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(AutodiffError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(AutodiffError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

/// Checks analytical gradients against central finite differences.
///
/// `func` builds an expression from one leaf per entry of `inputs`. Its
/// gradient w.r.t. each leaf is compared with
/// \( \frac{f(x + \epsilon) - f(x - \epsilon)}{2\epsilon} \); the two must agree
/// within `tolerance`, either absolutely or relative to the larger magnitude.
pub fn check_grad<F>(func: F, inputs: &[f64], epsilon: f64, tolerance: f64) -> Result<(), GradCheckError>
where
    F: Fn(&[Var]) -> Result<Var, AutodiffError>,
{
    // --- Analytical gradients ---
    let leaves: Vec<Var> = inputs.iter().map(|&v| Var::new(v)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;

    // --- Numerical gradients, one input at a time ---
    for (i, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let loss_plus = evaluate_perturbed(&func, inputs, i, epsilon)?;
        let loss_minus = evaluate_perturbed(&func, inputs, i, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        if !approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

fn evaluate_perturbed<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> Result<f64, GradCheckError>
where
    F: Fn(&[Var]) -> Result<Var, AutodiffError>,
{
    let perturbed: Vec<Var> = inputs
        .iter()
        .enumerate()
        .map(|(j, &v)| Var::new(if j == index { v + delta } else { v }))
        .collect();
    func(&perturbed)
        .map(|out| out.value())
        .map_err(GradCheckError::ForwardPassError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_grad_accepts_correct_gradient() -> Result<(), GradCheckError> {
        check_grad(|x| Ok(&(&x[0] * &x[1]) + &x[0]), &[2.0, 3.0], 1e-6, 1e-6)
    }

    #[test]
    fn test_check_grad_reports_forward_error() {
        let result = check_grad(|x| &x[0] / &x[1], &[1.0, 0.0], 1e-6, 1e-6);
        assert!(matches!(
            result,
            Err(GradCheckError::ForwardPassError(AutodiffError::DivisionByZero { .. }))
        ));
    }

    #[test]
    fn test_check_grad_detects_wrong_rule() {
        // detach() cuts the graph, so the analytical gradient misses x[0] * x[1].
        let result = check_grad(
            |x| Ok(&(&x[0] * &x[1]).detach() + &x[0]),
            &[2.0, 3.0],
            1e-6,
            1e-6,
        );
        match result {
            Err(GradCheckError::GradientMismatch { input_index, .. }) => assert_eq!(input_index, 0),
            other => panic!("Expected GradientMismatch, got {:?}", other),
        }
    }
}
