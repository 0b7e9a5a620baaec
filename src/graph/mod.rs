//! Quantity Graph
//!
//! A directed graph over remaining quantities. Every edge subtracts one pack from the
//! quantity at its source, so the graph is acyclic and every node reachable from the
//! root is a quantity left over after some multiset of packs.
//!
//! Nodes with a quantity of zero or below are candidates: each one is a way of covering
//! the order, overshooting by the absolute value of its quantity.

use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use self::{edge::PackEdge, node::QuantityNode};
use crate::packs::{PackSize, Quantity};

pub mod builder;
pub mod edge;
pub mod node;

mod path;

pub use builder::QuantityGraphBuilder;

/// Quantity graph produced by [`QuantityGraphBuilder`].
#[derive(Debug)]
pub struct QuantityGraph {
    graph: DiGraph<QuantityNode, PackEdge>,
    root: NodeIndex,

    /// Quantity -> node; a quantity is its node's identity
    nodes: FxHashMap<Quantity, NodeIndex>,

    /// Distinct pack sizes on the edges between each ordered node pair
    weights: FxHashMap<(NodeIndex, NodeIndex), SmallVec<[PackSize; 2]>>,

    candidates: SmallVec<[NodeIndex; 8]>,

    /// Edges that end exactly on quantity zero
    zero_edges: usize,
}

impl QuantityGraph {
    /// Create a graph holding only the root quantity.
    pub(crate) fn new(root: Quantity) -> Self {
        let mut graph = DiGraph::new();
        let root_idx = graph.add_node(QuantityNode { quantity: root });

        let mut nodes = FxHashMap::default();
        nodes.insert(root, root_idx);

        Self {
            graph,
            root: root_idx,
            nodes,
            weights: FxHashMap::default(),
            candidates: SmallVec::new(),
            zero_edges: 0,
        }
    }

    /// Root node (the quantity being solved for).
    pub fn root(&self) -> NodeIndex {
        self.root
    }

    /// Remaining quantity at `node`.
    pub fn quantity(&self, node: NodeIndex) -> Option<Quantity> {
        self.graph.node_weight(node).map(|weight| weight.quantity)
    }

    /// Node for `quantity`, if it has been reached.
    pub fn node(&self, quantity: Quantity) -> Option<NodeIndex> {
        self.nodes.get(&quantity).copied()
    }

    /// Number of distinct quantities in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of edges ending at quantity zero.
    pub fn zero_edge_count(&self) -> usize {
        self.zero_edges
    }

    /// Nodes with a quantity of zero or below, in the order they were reached.
    pub fn candidates(&self) -> &[NodeIndex] {
        &self.candidates
    }

    /// Pack sizes on the edges from `from` to `to`.
    pub fn edge_sizes(&self, from: NodeIndex, to: NodeIndex) -> &[PackSize] {
        self.weights.get(&(from, to)).map_or(&[], SmallVec::as_slice)
    }

    /// The candidate with the smallest overshoot: the highest quantity at or below zero.
    ///
    /// Quantities identify nodes, so there is at most one node per quantity and the
    /// choice is unique. Returns `None` if nothing was reached, which only happens when
    /// the root itself needs no packs.
    pub fn best_candidate(&self) -> Option<NodeIndex> {
        self.candidates
            .iter()
            .filter_map(|&node| Some((self.quantity(node)?, node)))
            .max_by_key(|&(quantity, _)| quantity)
            .map(|(_, node)| node)
    }

    /// Subtract one pack of `size` from `from`.
    ///
    /// Returns the target node when a new edge was added, or `None` when an edge with
    /// the same size already joins the pair (or the subtraction is not representable).
    pub(crate) fn add_edge(&mut self, from: NodeIndex, size: PackSize) -> Option<NodeIndex> {
        let remaining = self.quantity(from)?.checked_sub(size.get())?;
        let to = self.get_or_insert(remaining);

        let sizes = self.weights.entry((from, to)).or_default();

        if sizes.contains(&size) {
            return None;
        }

        sizes.push(size);
        self.graph.add_edge(from, to, PackEdge { size });

        if remaining == 0 {
            self.zero_edges += 1;
        }

        Some(to)
    }

    fn get_or_insert(&mut self, quantity: Quantity) -> NodeIndex {
        if let Some(&node) = self.nodes.get(&quantity) {
            return node;
        }

        let weight = QuantityNode { quantity };
        let node = self.graph.add_node(weight);

        self.nodes.insert(quantity, node);

        if weight.is_candidate() {
            self.candidates.push(node);
        }

        node
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_graph_only_has_root() {
        let graph = QuantityGraph::new(500);

        assert_eq!(graph.node_count(), 1, "root only");
        assert_eq!(graph.quantity(graph.root()), Some(500), "root holds quantity");
        assert!(graph.candidates().is_empty(), "root is not a candidate");
        assert_eq!(graph.best_candidate(), None, "nothing to select");
    }

    #[test]
    fn quantity_identifies_node() -> TestResult {
        let mut graph = QuantityGraph::new(500);
        let root = graph.root();

        let via_250 = graph.add_edge(root, PackSize::new(250)?);
        let via_250_again = graph.node(250);

        assert_eq!(via_250, via_250_again, "same quantity, same node");
        assert_eq!(graph.node_count(), 2, "root and 250");

        Ok(())
    }

    #[test]
    fn duplicate_edges_are_not_added() -> TestResult {
        let mut graph = QuantityGraph::new(500);
        let root = graph.root();
        let size = PackSize::new(250)?;

        let first = graph.add_edge(root, size);
        let second = graph.add_edge(root, size);

        assert!(first.is_some(), "first edge is added");
        assert_eq!(second, None, "same weight between the same pair is redundant");
        assert_eq!(graph.edge_count(), 1, "one edge");

        assert_eq!(
            first.map(|target| graph.edge_sizes(root, target).to_vec()),
            Some(vec![size]),
            "weight recorded once"
        );

        Ok(())
    }

    #[test]
    fn zero_and_negative_targets_are_candidates() -> TestResult {
        let mut graph = QuantityGraph::new(500);
        let root = graph.root();

        graph.add_edge(root, PackSize::new(250)?);
        graph.add_edge(root, PackSize::new(1000)?);
        graph.add_edge(root, PackSize::new(500)?);

        let quantities: Vec<_> = graph
            .candidates()
            .iter()
            .filter_map(|&node| graph.quantity(node))
            .collect();

        assert_eq!(quantities, vec![-500, 0], "reached in order, 250 excluded");
        assert_eq!(graph.zero_edge_count(), 1, "one edge lands on zero");
        assert_eq!(
            graph.best_candidate().and_then(|node| graph.quantity(node)),
            Some(0),
            "exact cover beats overshoot"
        );

        Ok(())
    }

    #[test]
    fn best_candidate_prefers_least_overshoot() -> TestResult {
        let mut graph = QuantityGraph::new(100);
        let root = graph.root();

        graph.add_edge(root, PackSize::new(300)?);
        graph.add_edge(root, PackSize::new(120)?);
        graph.add_edge(root, PackSize::new(200)?);

        assert_eq!(
            graph.best_candidate().and_then(|node| graph.quantity(node)),
            Some(-20),
            "overshoot of 20 is the smallest"
        );

        Ok(())
    }
}
