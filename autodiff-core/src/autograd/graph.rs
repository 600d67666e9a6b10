use crate::error::AutodiffError;
use crate::var::{Var, VarData};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// Identity of a graph node: the address of its shared data.
///
/// Stable for as long as some handle keeps the node alive, which the
/// [`ComputationGraph`] guarantees for the duration of a backward pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn of(data: &Rc<RefCell<VarData>>) -> Self {
        NodeId(Rc::as_ptr(data) as *const () as usize)
    }
}

/// Builds a topological sort of the computation graph.
///
/// A node is pushed only after all of its inputs, so `sorted_list` ends with
/// the root. Only edges returned by `BackwardOp::inputs` are followed, which
/// skips operands that do not require gradients.
///
/// Post-order DFS over an explicit stack: the depth of the graph is bounded
/// by memory, not by the call stack. The flag marks a node whose inputs have
/// already been scheduled.
fn build_topo(root: &Var, visited: &mut HashSet<NodeId>, sorted_list: &mut Vec<Var>) {
    let mut stack: Vec<(Var, bool)> = vec![(root.clone(), false)];
    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            log::trace!("build_topo: adding node {:?}", node.node_id());
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let inputs = node.grad_fn().map(|grad_fn| grad_fn.inputs()).unwrap_or_default();
        stack.push((node, true));
        // Reversed so inputs are visited in operand order.
        for input in inputs.into_iter().rev() {
            if !visited.contains(&input.node_id()) {
                stack.push((input, false));
            }
        }
    }
}

/// The part of the graph reachable backward from one terminal node.
pub(crate) struct ComputationGraph {
    /// Reverse topological order: the terminal comes last.
    sorted: Vec<Var>,
}

impl ComputationGraph {
    pub(crate) fn new(root: &Var) -> Self {
        let mut visited = HashSet::new();
        let mut sorted = Vec::new();
        build_topo(root, &mut visited, &mut sorted);
        ComputationGraph { sorted }
    }

    pub(crate) fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Nodes from the terminal toward the leaves.
    pub(crate) fn nodes(&self) -> impl Iterator<Item = &Var> {
        self.sorted.iter().rev()
    }

    /// Propagates `seed` from the terminal and returns \( \frac{dT}{dN} \) for
    /// every discovered node `N`.
    ///
    /// Contributions are summed per node, so a node used by several
    /// dependents receives the total. Nothing in the graph is mutated: on
    /// error no gradient has been written.
    pub(crate) fn backward(&self, seed: f64) -> Result<HashMap<NodeId, f64>, AutodiffError> {
        let mut gradients: HashMap<NodeId, f64> = HashMap::with_capacity(self.sorted.len());
        let root = self
            .sorted
            .last()
            .ok_or_else(|| AutodiffError::InternalError("Empty computation graph".to_string()))?;
        gradients.insert(root.node_id(), seed);

        for node in self.nodes() {
            let grad_fn = match node.grad_fn() {
                Some(grad_fn) => grad_fn,
                None => continue,
            };
            let grad_output = gradients.get(&node.node_id()).copied().unwrap_or(0.0);
            let inputs = grad_fn.inputs();
            let contributions = grad_fn.backward(grad_output)?;
            if contributions.len() != inputs.len() {
                return Err(AutodiffError::InternalError(format!(
                    "{:?} returned {} gradients for {} inputs",
                    grad_fn,
                    contributions.len(),
                    inputs.len()
                )));
            }
            log::trace!(
                "propagating {} through {:?} to {} inputs",
                grad_output,
                node.node_id(),
                inputs.len()
            );
            for (input, contribution) in inputs.iter().zip(contributions) {
                *gradients.entry(input.node_id()).or_insert(0.0) += contribution;
            }
        }

        Ok(gradients)
    }
}
