//! `std::ops` sugar over the `_op` functions.
//!
//! Every operator accepts `Var` or `&Var` on both sides, and `f64` on either
//! side. Plain numbers are wrapped with [`Var::constant`] and receive no
//! gradient. `/` can fail and therefore yields `Result<Var, AutodiffError>`.

use crate::error::AutodiffError;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::var::Var;
use std::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! impl_binary_overload {
    ($trait:ident, $method:ident, $op_fn:ident, $output:ty) => {
        impl<'a, 'b> $trait<&'b Var> for &'a Var {
            type Output = $output;

            fn $method(self, rhs: &'b Var) -> $output {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Var> for Var {
            type Output = $output;

            fn $method(self, rhs: Var) -> $output {
                $op_fn(&self, &rhs)
            }
        }

        impl<'a> $trait<Var> for &'a Var {
            type Output = $output;

            fn $method(self, rhs: Var) -> $output {
                $op_fn(self, &rhs)
            }
        }

        impl<'b> $trait<&'b Var> for Var {
            type Output = $output;

            fn $method(self, rhs: &'b Var) -> $output {
                $op_fn(&self, rhs)
            }
        }

        impl<'a> $trait<f64> for &'a Var {
            type Output = $output;

            fn $method(self, rhs: f64) -> $output {
                $op_fn(self, &Var::constant(rhs))
            }
        }

        impl $trait<f64> for Var {
            type Output = $output;

            fn $method(self, rhs: f64) -> $output {
                $op_fn(&self, &Var::constant(rhs))
            }
        }

        impl<'b> $trait<&'b Var> for f64 {
            type Output = $output;

            fn $method(self, rhs: &'b Var) -> $output {
                $op_fn(&Var::constant(self), rhs)
            }
        }

        impl $trait<Var> for f64 {
            type Output = $output;

            fn $method(self, rhs: Var) -> $output {
                $op_fn(&Var::constant(self), &rhs)
            }
        }
    };
}

impl_binary_overload!(Add, add, add_op, Var);
impl_binary_overload!(Sub, sub, sub_op, Var);
impl_binary_overload!(Mul, mul, mul_op, Var);
impl_binary_overload!(Div, div, div_op, Result<Var, AutodiffError>);

impl<'a> Neg for &'a Var {
    type Output = Var;

    fn neg(self) -> Var {
        neg_op(self)
    }
}

impl Neg for Var {
    type Output = Var;

    fn neg(self) -> Var {
        neg_op(&self)
    }
}
