use crate::autograd::BackwardOp;
use crate::error::AutodiffError;
use crate::ops::build_unary_node;
use crate::var::Var;
use std::rc::Rc;

// d/da sin(a) = cos(a)
#[derive(Debug)]
struct SinBackward {
    input: Var,
    input_value: f64,
}

impl BackwardOp for SinBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, AutodiffError> {
        Ok(vec![grad_output * self.input_value.cos()])
    }

    fn inputs(&self) -> Vec<Var> {
        vec![self.input.clone()]
    }
}

// d/da cos(a) = -sin(a)
#[derive(Debug)]
struct CosBackward {
    input: Var,
    input_value: f64,
}

impl BackwardOp for CosBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, AutodiffError> {
        Ok(vec![-grad_output * self.input_value.sin()])
    }

    fn inputs(&self) -> Vec<Var> {
        vec![self.input.clone()]
    }
}

/// Computes `sin(a)`, `a` in radians.
pub fn sin_op(a: &Var) -> Var {
    let input_value = a.value();
    build_unary_node(
        a,
        input_value.sin(),
        |input| Rc::new(SinBackward { input, input_value }),
        "sin",
    )
}

/// Computes `cos(a)`, `a` in radians.
pub fn cos_op(a: &Var) -> Var {
    let input_value = a.value();
    build_unary_node(
        a,
        input_value.cos(),
        |input| Rc::new(CosBackward { input, input_value }),
        "cos",
    )
}
