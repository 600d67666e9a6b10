// src/var/traits.rs

use crate::ops::arithmetic::add_op;
use crate::var::Var;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::iter::Sum;
use std::rc::Rc;

/// Relative tolerance of value comparisons.
const VALUE_REL_TOL: f64 = 1e-9;

fn values_close(a: f64, b: f64) -> bool {
    approx::relative_eq!(a, b, epsilon = 0.0, max_relative = VALUE_REL_TOL)
}

impl Clone for Var {
    /// Shallow clone: the new handle points to the same node.
    fn clone(&self) -> Self {
        Var {
            data: Rc::clone(&self.data),
        }
    }
}

impl Debug for Var {
    /// Shows this node only, not its whole history.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        f.debug_struct("Var")
            .field("name", &guard.name)
            .field("value", &guard.value)
            .field("grad", &guard.grad)
            .field("requires_grad", &guard.requires_grad)
            .field("op", &guard.op_name)
            .field("operands", &guard.operands.len())
            .finish()
    }
}

impl Display for Var {
    /// `Var(6, grad_fn=mul)`, or `Var(x1=2)` for a named leaf.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Var(")?;
        if let Some(name) = &guard.name {
            write!(f, "{}=", name)?;
        }
        write!(f, "{}", guard.value)?;
        if let Some(op) = guard.op_name {
            write!(f, ", grad_fn={}", op)?;
        }
        write!(f, ")")
    }
}

/// Compares forward values within a relative tolerance.
impl PartialEq for Var {
    fn eq(&self, other: &Self) -> bool {
        self.same_node(other) || values_close(self.value(), other.value())
    }
}

impl PartialEq<f64> for Var {
    fn eq(&self, other: &f64) -> bool {
        values_close(self.value(), *other)
    }
}

impl PartialEq<Var> for f64 {
    fn eq(&self, other: &Var) -> bool {
        values_close(*self, other.value())
    }
}

/// Orders raw forward values, without the tolerance of `==`.
///
/// Two values within the tolerance compare equal with `==` and may still be
/// strictly ordered here: `Var::new(1.0) < Var::new(1.0 + 1e-10)` holds.
impl PartialOrd for Var {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value().partial_cmp(&other.value())
    }
}

impl PartialOrd<f64> for Var {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.value().partial_cmp(other)
    }
}

impl PartialOrd<Var> for f64 {
    fn partial_cmp(&self, other: &Var) -> Option<Ordering> {
        self.partial_cmp(&other.value())
    }
}

/// Sums with a chain of `add` nodes. The empty sum is the constant 0.
impl Sum for Var {
    fn sum<I: Iterator<Item = Var>>(iter: I) -> Self {
        iter.fold(Var::constant(0.0), |acc, v| add_op(&acc, &v))
    }
}

impl<'a> Sum<&'a Var> for Var {
    fn sum<I: Iterator<Item = &'a Var>>(iter: I) -> Self {
        iter.fold(Var::constant(0.0), |acc, v| add_op(&acc, v))
    }
}
