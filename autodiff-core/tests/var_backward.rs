use autodiff_core::{AutodiffError, BackwardConfig, Var};
use approx::assert_relative_eq;

mod common;

#[test]
fn test_given_example() -> Result<(), AutodiffError> {
    let x1 = Var::new(2.0);
    let x2 = Var::new(3.0);
    let y = &x1 * &x2;
    y.backward()?;
    assert_eq!(x1.grad(), 3.0);
    assert_eq!(x2.grad(), 2.0);
    Ok(())
}

#[test]
fn test_fan_out_accumulation() -> Result<(), AutodiffError> {
    let x = Var::new(5.0);
    let y = &x * &x;
    y.backward()?;
    assert_eq!(x.grad(), 2.0 * x.value());
    Ok(())
}

#[test]
fn test_chain_rule_composition() -> Result<(), AutodiffError> {
    let x1 = Var::new(2.0);
    let x2 = Var::new(3.0);
    let y = &(&x1 * &x2) + &x1;
    assert_eq!(y.value(), 8.0);
    y.backward()?;
    assert_eq!(x1.grad(), 4.0);
    assert_eq!(x2.grad(), 2.0);
    Ok(())
}

#[test]
fn test_diamond_graph() -> Result<(), AutodiffError> {
    // y1 and y2 both depend on x2; y3 depends on both.
    let x1 = Var::new(1.0);
    let x2 = Var::new(2.0);
    let x3 = Var::new(3.0);
    let y1 = &x1 * &x2;
    let y2 = &x2 + &x3;
    let y3 = (&y1 / &y2)?;
    y3.backward()?;
    assert_relative_eq!(x1.grad(), 0.4, epsilon = 1e-12);
    assert_relative_eq!(x2.grad(), 0.12, epsilon = 1e-12);
    assert_relative_eq!(x3.grad(), -0.08, epsilon = 1e-12);
    assert_relative_eq!(y1.grad(), 0.2, epsilon = 1e-12);
    assert_relative_eq!(y2.grad(), -0.08, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_idempotent_rerun() -> Result<(), AutodiffError> {
    let x1 = Var::new(1.5);
    let x2 = Var::new(-0.5);
    let y = (&(&x1 * &x2) + &x1.exp()) * &x2;

    y.backward()?;
    let first = (x1.grad(), x2.grad());
    y.backward()?;
    assert_eq!((x1.grad(), x2.grad()), first);
    Ok(())
}

#[test]
fn test_reused_leaf_in_new_expression() -> Result<(), AutodiffError> {
    let x = Var::new(2.0);
    let y = &x * 3.0;
    y.backward()?;
    assert_eq!(x.grad(), 3.0);

    let z = &x * &x;
    z.backward()?;
    assert_eq!(x.grad(), 4.0);
    Ok(())
}

#[test]
fn test_gradient_accumulation_across_passes() -> Result<(), AutodiffError> {
    let w = Var::new(0.5);
    let accumulate = BackwardConfig::default().with_accumulate(true);
    for sample in [1.0, 2.0, 3.0] {
        let loss = (&w * sample).powf(2.0)?;
        loss.backward_with(accumulate)?;
    }
    // sum of 2 * w * s^2
    assert_relative_eq!(w.grad(), 2.0 * 0.5 * 14.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_division_by_zero_before_any_gradient() {
    let one = Var::new(1.0);
    let zero = Var::new(0.0);
    let result = &one / &zero;
    assert!(matches!(result, Err(AutodiffError::DivisionByZero { .. })));
    assert_eq!(one.grad(), 0.0);
    assert_eq!(zero.grad(), 0.0);
}

#[test]
fn test_log_of_negative_is_domain_error() {
    let result = Var::new(-1.0).ln();
    assert!(matches!(result, Err(AutodiffError::DomainError { .. })));
}

#[test]
fn test_error_messages_name_operation_and_value() {
    let err = Var::new(-1.0).ln().err().map(|e| e.to_string());
    assert_eq!(
        err.as_deref(),
        Some("Domain error in ln for value -1: logarithm of a non-positive value")
    );
    let err = (&Var::new(3.0) / 0.0).err().map(|e| e.to_string());
    assert_eq!(err.as_deref(), Some("Division by zero in div (numerator 3)"));
}

#[test]
fn test_new_nodes_only_reference_existing_ones() {
    // Every operand of a node was created before it, so no node is its own ancestor.
    let x = Var::new(1.0);
    let mut current = x.clone();
    let mut history = vec![x.clone()];
    for _ in 0..50 {
        current = &(&current * 1.01) + &x;
        for operand in current.operands() {
            assert!(!operand.same_node(&current));
        }
        assert!(history.iter().all(|h| !h.same_node(&current)));
        history.push(current.clone());
    }
}

#[test]
fn test_long_chain() -> Result<(), AutodiffError> {
    let x = Var::new(1.0);
    let mut y = x.clone();
    for _ in 0..1000 {
        y = &y + &x;
    }
    y.backward()?;
    assert_eq!(y.value(), 1001.0);
    assert_eq!(x.grad(), 1001.0);
    Ok(())
}

#[test]
fn test_deep_chain_backward_and_drop() -> Result<(), AutodiffError> {
    let x = Var::new(1.0);
    let mut y = x.clone();
    for _ in 0..100_000 {
        y = &y + &x;
    }
    y.backward()?;
    assert_eq!(y.value(), 100_001.0);
    assert_eq!(x.grad(), 100_001.0);

    drop(y);
    // The leaf outlives the chain that was built on it.
    assert_eq!(x.value(), 1.0);
    Ok(())
}

#[test]
fn test_deep_sum_backward() -> Result<(), AutodiffError> {
    let xs: Vec<Var> = (0..100_000).map(|i| Var::new(i as f64)).collect();
    let total: Var = xs.iter().sum();
    total.backward()?;
    assert!(xs.iter().all(|x| x.grad() == 1.0));
    Ok(())
}
