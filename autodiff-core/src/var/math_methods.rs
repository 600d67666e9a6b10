// src/var/math_methods.rs

use crate::error::AutodiffError;
use crate::ops::activation::relu_op;
use crate::ops::arithmetic::{pow_op, powf_op, reciprocal_op};
use crate::ops::math_elem::{cos_op, exp_op, ln_op, sin_op, sqrt_op, tanh_op};
use crate::var::Var;

/// Method-call forms of the unary and power operations.
impl Var {
    /// Raises `self` to a differentiable exponent. See [`pow_op`].
    pub fn pow(&self, exponent: &Var) -> Result<Var, AutodiffError> {
        pow_op(self, exponent)
    }

    /// Raises `self` to a constant exponent.
    pub fn powf(&self, exponent: f64) -> Result<Var, AutodiffError> {
        powf_op(self, exponent)
    }

    pub fn reciprocal(&self) -> Result<Var, AutodiffError> {
        reciprocal_op(self)
    }

    pub fn exp(&self) -> Var {
        exp_op(self)
    }

    /// Natural logarithm. Fails with `DomainError` for non-positive values.
    pub fn ln(&self) -> Result<Var, AutodiffError> {
        ln_op(self)
    }

    /// Alias of [`Var::ln`].
    pub fn log(&self) -> Result<Var, AutodiffError> {
        ln_op(self)
    }

    pub fn sqrt(&self) -> Result<Var, AutodiffError> {
        sqrt_op(self)
    }

    pub fn sin(&self) -> Var {
        sin_op(self)
    }

    pub fn cos(&self) -> Var {
        cos_op(self)
    }

    pub fn tanh(&self) -> Var {
        tanh_op(self)
    }

    pub fn relu(&self) -> Var {
        relu_op(self)
    }
}
