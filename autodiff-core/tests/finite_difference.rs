use autodiff_core::autograd::grad_check::{check_grad, GradCheckError};
use autodiff_core::{AutodiffError, Var};
use rand::rngs::StdRng;
use rand::Rng;

mod common;
use common::{signed_magnitude, test_rng, FD_EPSILON, FD_TOLERANCE};

const TRIALS: usize = 25;

/// Runs `check_grad` on `TRIALS` input vectors drawn by `draw`.
fn check_random<F, D>(func: F, mut draw: D) -> Result<(), GradCheckError>
where
    F: Fn(&[Var]) -> Result<Var, AutodiffError>,
    D: FnMut(&mut StdRng) -> Vec<f64>,
{
    let mut rng = test_rng();
    for _ in 0..TRIALS {
        let inputs = draw(&mut rng);
        check_grad(&func, &inputs, FD_EPSILON, FD_TOLERANCE)?;
    }
    Ok(())
}

fn two_in(low: f64, high: f64) -> impl FnMut(&mut StdRng) -> Vec<f64> {
    move |rng: &mut StdRng| vec![rng.gen_range(low..high), rng.gen_range(low..high)]
}

fn one_in(low: f64, high: f64) -> impl FnMut(&mut StdRng) -> Vec<f64> {
    move |rng: &mut StdRng| vec![rng.gen_range(low..high)]
}

#[test]
fn test_add_sub_mul_match_finite_differences() -> Result<(), GradCheckError> {
    check_random(|v| Ok(&v[0] + &v[1]), two_in(-3.0, 3.0))?;
    check_random(|v| Ok(&v[0] - &v[1]), two_in(-3.0, 3.0))?;
    check_random(|v| Ok(&v[0] * &v[1]), two_in(-3.0, 3.0))?;
    check_random(|v| Ok(-&v[0]), one_in(-3.0, 3.0))
}

#[test]
fn test_div_matches_finite_differences() -> Result<(), GradCheckError> {
    check_random(
        |v| &v[0] / &v[1],
        |rng| vec![rng.gen_range(-3.0..3.0), signed_magnitude(rng, 0.5, 3.0)],
    )
}

#[test]
fn test_pow_matches_finite_differences() -> Result<(), GradCheckError> {
    check_random(
        |v| v[0].pow(&v[1]),
        |rng| vec![rng.gen_range(0.5..3.0), rng.gen_range(-2.0..2.0)],
    )
}

#[test]
fn test_unary_ops_match_finite_differences() -> Result<(), GradCheckError> {
    check_random(|v| v[0].ln(), one_in(0.1, 5.0))?;
    check_random(|v| v[0].sqrt(), one_in(0.1, 5.0))?;
    check_random(|v| Ok(v[0].exp()), one_in(-2.0, 2.0))?;
    check_random(|v| Ok(v[0].sin()), one_in(-3.0, 3.0))?;
    check_random(|v| Ok(v[0].cos()), one_in(-3.0, 3.0))?;
    check_random(|v| Ok(v[0].tanh()), one_in(-3.0, 3.0))?;
    check_random(|v| Ok(v[0].relu()), |rng| vec![signed_magnitude(rng, 0.1, 3.0)])
}

#[test]
fn test_composite_expression_matches_finite_differences() -> Result<(), GradCheckError> {
    // f(a, b, c) = ln(a^2 + 1) * sin(b) / (c^2 + 1) + a * b * c
    check_random(
        |v| {
            let (a, b, c) = (&v[0], &v[1], &v[2]);
            let left = (&a.powf(2.0)? + 1.0).ln()? * b.sin();
            let scaled = (left / (&(c * c) + 1.0))?;
            Ok(&scaled + &(&(a * b) * c))
        },
        |rng| (0..3).map(|_| rng.gen_range(-2.0..2.0)).collect(),
    )
}
