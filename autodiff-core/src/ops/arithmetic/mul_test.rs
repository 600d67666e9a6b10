#[cfg(test)]
mod tests {
    use crate::error::AutodiffError;
    use crate::ops::arithmetic::mul_op;
    use crate::var::Var;

    #[test]
    fn test_mul_forward() {
        let c = mul_op(&Var::new(2.0), &Var::new(3.0));
        assert_eq!(c.value(), 6.0);
        assert_eq!(c.op_name(), Some("mul"));
    }

    #[test]
    fn test_mul_backward() -> Result<(), AutodiffError> {
        let x1 = Var::new(2.0);
        let x2 = Var::new(3.0);
        let y = mul_op(&x1, &x2);
        y.backward()?;
        assert_eq!(x1.grad(), 3.0);
        assert_eq!(x2.grad(), 2.0);
        Ok(())
    }

    #[test]
    fn test_mul_fan_out_accumulates() -> Result<(), AutodiffError> {
        let x = Var::new(4.0);
        let y = mul_op(&x, &x);
        y.backward()?;
        assert_eq!(x.grad(), 8.0);
        Ok(())
    }

    #[test]
    fn test_mul_by_constant() -> Result<(), AutodiffError> {
        let x = Var::new(2.0);
        let three = Var::constant(3.0);
        let y = mul_op(&three, &x);
        y.backward()?;
        assert_eq!(x.grad(), 3.0);
        assert_eq!(three.grad(), 0.0);
        Ok(())
    }
}
