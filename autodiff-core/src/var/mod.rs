// src/var/mod.rs

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod autograd;
mod math_methods;
mod traits;

/// Internal state of one scalar node of the computation graph.
pub(crate) struct VarData {
    /// Forward value, fixed at construction.
    pub(crate) value: f64,
    /// Accumulated derivative of the last backward terminal w.r.t. this node.
    pub(crate) grad: f64,
    pub(crate) requires_grad: bool,
    pub(crate) name: Option<String>,
    /// Name of the operation that produced this node (`None` for leaves).
    pub(crate) op_name: Option<&'static str>,
    /// Every operand this node was computed from, constants included.
    pub(crate) operands: Vec<Var>,
    /// Local derivative rule. Only set when some operand requires grad.
    pub(crate) grad_fn: Option<Rc<dyn BackwardOp>>,
}

impl Drop for VarData {
    /// Unlinks the history with a worklist instead of letting each node drop
    /// its operands recursively, so dropping a deep chain cannot overflow the
    /// stack.
    fn drop(&mut self) {
        // The grad_fn only holds clones of `operands`; release it first so the
        // strong counts below reflect real ownership.
        self.grad_fn = None;
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(var) = pending.pop() {
            if Rc::strong_count(&var.data) != 1 {
                continue;
            }
            // Last handle: empty the node before it drops so its own drop is shallow.
            if let Ok(mut data) = var.data.try_borrow_mut() {
                data.grad_fn = None;
                pending.append(&mut data.operands);
            }
        }
    }
}

/// A differentiable scalar.
///
/// `Var` uses `Rc<RefCell<VarData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node can be the operand of any number of other
///     nodes (fan-out), and clones are cheap handle copies.
/// 2.  **Interior Mutability:** `grad` is written during the backward pass
///     through shared handles.
///
/// Operands are only referenced by the nodes computed from them, so the graph
/// is acyclic and a node lives as long as some handle reaches it.
pub struct Var {
    pub(crate) data: Rc<RefCell<VarData>>,
}

impl Var {
    /// Creates a leaf that tracks gradients.
    pub fn new(value: f64) -> Self {
        Self::leaf(value, true, None)
    }

    /// Creates a leaf that tracks gradients and carries a label.
    pub fn named(value: f64, name: impl Into<String>) -> Self {
        Self::leaf(value, true, Some(name.into()))
    }

    /// Creates a leaf that never receives a gradient.
    ///
    /// Plain `f64` operands of the arithmetic operators are wrapped this way.
    pub fn constant(value: f64) -> Self {
        Self::leaf(value, false, None)
    }

    fn leaf(value: f64, requires_grad: bool, name: Option<String>) -> Self {
        Var {
            data: Rc::new(RefCell::new(VarData {
                value,
                grad: 0.0,
                requires_grad,
                name,
                op_name: None,
                operands: Vec::new(),
                grad_fn: None,
            })),
        }
    }

    /// Creates an interior node. It requires grad iff a `grad_fn` was built.
    pub(crate) fn from_op(
        value: f64,
        operands: Vec<Var>,
        grad_fn: Option<Rc<dyn BackwardOp>>,
        op_name: &'static str,
    ) -> Self {
        Var {
            data: Rc::new(RefCell::new(VarData {
                value,
                grad: 0.0,
                requires_grad: grad_fn.is_some(),
                name: None,
                op_name: Some(op_name),
                operands,
                grad_fn,
            })),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, VarData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, VarData> {
        self.data.borrow_mut()
    }

    /// Returns the forward value.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Returns the gradient written by the most recent backward pass, or 0.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    pub fn requires_grad(&self) -> bool {
        self.read_data().requires_grad
    }

    pub fn name(&self) -> Option<String> {
        self.read_data().name.clone()
    }

    /// Name of the producing operation, `None` for leaves.
    pub fn op_name(&self) -> Option<&'static str> {
        self.read_data().op_name
    }

    /// A leaf has no operands.
    pub fn is_leaf(&self) -> bool {
        self.read_data().operands.is_empty()
    }

    /// Returns handles to the operands, in construction order.
    pub fn operands(&self) -> Vec<Var> {
        self.read_data().operands.clone()
    }

    pub(crate) fn grad_fn(&self) -> Option<Rc<dyn BackwardOp>> {
        self.read_data().grad_fn.clone()
    }

    /// Identity of the underlying node, shared by all clones of this handle.
    pub fn node_id(&self) -> NodeId {
        NodeId::of(&self.data)
    }

    /// Returns true if both handles point to the same node.
    pub fn same_node(&self, other: &Var) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Resets the gradient of this node to 0.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Returns a new leaf with the same value and no history.
    pub fn detach(&self) -> Var {
        let guard = self.read_data();
        Self::leaf(guard.value, guard.requires_grad, guard.name.clone())
    }
}

#[cfg(test)]
#[path = "var_test.rs"]
mod tests;
