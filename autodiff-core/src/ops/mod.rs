//! # Scalar Operations Module (`ops`)
//!
//! This module serves as the central hub for the differentiable operations on [`Var`].
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (named `xxx_op`)
//!   that computes the forward value eagerly and sets up the backward pass.
//!   Operations that can fail validate their operands first and return
//!   `Result<Var, AutodiffError>`; a failed call never yields a node.
//! - **`Backward` Structs:** Each operation has a corresponding struct
//!   (e.g. `MulBackward`) implementing [`BackwardOp`]. It stores the operand
//!   values of the forward pass and the handles of the operands that require
//!   gradients.
//! - **Overloads (`ops::overloads`):** `std::ops` implementations that forward
//!   to the `_op` functions without adding behavior of their own.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, reciprocal, neg, pow.
//! - [`math_elem`]: ln, exp, sqrt, sin, cos, tanh.
//! - [`activation`]: relu.

use crate::autograd::BackwardOp;
use crate::var::Var;
use std::rc::Rc;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod overloads;

/// Returns `Some(handle)` if the operand requires gradients.
fn tracked(v: &Var) -> Option<Var> {
    if v.requires_grad() {
        Some(v.clone())
    } else {
        None
    }
}

/// Builds the output node of a unary operation.
///
/// `backward_builder` is only called when `a` requires gradients; it receives
/// the handle of `a`.
pub(crate) fn build_unary_node<B>(a: &Var, value: f64, backward_builder: B, op_name: &'static str) -> Var
where
    B: FnOnce(Var) -> Rc<dyn BackwardOp>,
{
    let grad_fn = tracked(a).map(backward_builder);
    Var::from_op(value, vec![a.clone()], grad_fn, op_name)
}

/// Builds the output node of a binary operation.
///
/// `backward_builder` is only called when at least one operand requires
/// gradients; it receives the handles of the operands that do.
pub(crate) fn build_binary_node<B>(
    a: &Var,
    b: &Var,
    value: f64,
    backward_builder: B,
    op_name: &'static str,
) -> Var
where
    B: FnOnce(Option<Var>, Option<Var>) -> Rc<dyn BackwardOp>,
{
    let a_node = tracked(a);
    let b_node = tracked(b);
    let grad_fn = if a_node.is_some() || b_node.is_some() {
        Some(backward_builder(a_node, b_node))
    } else {
        None
    };
    Var::from_op(value, vec![a.clone(), b.clone()], grad_fn, op_name)
}

/// Handles of the tracked operands, in operand order.
pub(crate) fn tracked_inputs(a_node: &Option<Var>, b_node: &Option<Var>) -> Vec<Var> {
    a_node.iter().chain(b_node.iter()).cloned().collect()
}
