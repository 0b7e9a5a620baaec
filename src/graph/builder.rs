//! Builder for expanding quantity graphs.

use petgraph::graph::NodeIndex;
use smallvec::SmallVec;
use tracing::debug;

use crate::{
    graph::QuantityGraph,
    packs::{PackSize, PackSizes, Quantity},
};

/// Expands a [`QuantityGraph`] from a root quantity by repeatedly subtracting packs.
///
/// The expansion runs in passes. The first pass uses every pack size, the next drops
/// the largest, and so on down to the smallest size alone. Each pass subtracts sizes
/// largest first and goes depth-first, stopping at quantities of zero or below.
///
/// # Zero-edge cutoff
///
/// Expansion stops as soon as the number of edges ending exactly on zero reaches the
/// number of pack sizes. This keeps the graph small once exact covers are plentiful,
/// at the cost of sometimes missing a cover that uses fewer packs: for sizes
/// `[5, 12, 13]` and a quantity of 48 the four-pack `12 × 4` is never reached.
#[derive(Debug, Clone)]
pub struct QuantityGraphBuilder<'a> {
    pack_sizes: &'a PackSizes,
}

impl<'a> QuantityGraphBuilder<'a> {
    /// Create a builder for the given pack sizes.
    pub fn new(pack_sizes: &'a PackSizes) -> Self {
        Self { pack_sizes }
    }

    /// Build the graph rooted at `quantity`.
    ///
    /// A root of zero or below needs no packs and produces a graph with no candidates.
    pub fn build(&self, quantity: Quantity) -> QuantityGraph {
        let mut graph = QuantityGraph::new(quantity);

        if quantity <= 0 {
            return graph;
        }

        let sizes = self.pack_sizes.as_slice();
        let cutoff = sizes.len();

        for available in (1..=sizes.len()).rev() {
            let Some(subset) = sizes.get(..available) else {
                continue;
            };

            let descending: SmallVec<[PackSize; 8]> = subset.iter().rev().copied().collect();

            expand(&mut graph, &descending, cutoff);
        }

        debug!(
            root = quantity,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            candidates = graph.candidates().len(),
            zero_edges = graph.zero_edge_count(),
            "quantity graph built"
        );

        graph
    }
}

/// Depth-first expansion from the root using `sizes` in the given order.
///
/// Each stack frame is a node and the position of the next size to try from it, which
/// replays the order of a recursive expansion without growing the call stack.
fn expand(graph: &mut QuantityGraph, sizes: &[PackSize], cutoff: usize) {
    let mut stack: Vec<(NodeIndex, usize)> = vec![(graph.root(), 0)];

    while let Some(frame) = stack.last_mut() {
        if graph.zero_edge_count() >= cutoff {
            return;
        }

        let (node, position) = *frame;

        let Some(&size) = sizes.get(position) else {
            stack.pop();
            continue;
        };

        frame.1 = position + 1;

        // Duplicate edges were expanded when first added
        let Some(target) = graph.add_edge(node, size) else {
            continue;
        };

        if graph.quantity(target).is_some_and(|remaining| remaining > 0) {
            stack.push((target, 0));
        }
    }
}

#[cfg(test)]
mod tests {
    use petgraph::visit::EdgeRef;
    use rustc_hash::FxHashSet;
    use testresult::TestResult;

    use super::*;

    fn quantities(graph: &QuantityGraph) -> Vec<Quantity> {
        let mut quantities: Vec<_> = graph
            .candidates()
            .iter()
            .filter_map(|&node| graph.quantity(node))
            .collect();

        quantities.sort_unstable();
        quantities
    }

    #[test]
    fn non_positive_root_has_no_candidates() -> TestResult {
        let sizes = PackSizes::new(&[250, 500])?;

        for quantity in [0, -250] {
            let graph = QuantityGraphBuilder::new(&sizes).build(quantity);

            assert_eq!(graph.node_count(), 1, "nothing to expand from {quantity}");
            assert!(graph.candidates().is_empty(), "no candidates for {quantity}");
        }

        Ok(())
    }

    #[test]
    fn single_pack_cover_is_a_candidate() -> TestResult {
        let sizes = PackSizes::new(&[250, 500, 1000])?;
        let graph = QuantityGraphBuilder::new(&sizes).build(1);

        assert_eq!(
            quantities(&graph),
            vec![-999, -499, -249],
            "one pack of each size covers a single item"
        );
        assert_eq!(graph.edge_count(), 3, "one edge per size from the root");

        Ok(())
    }

    #[test]
    fn every_node_is_reachable_by_subtracting_packs() -> TestResult {
        // Sums of 4s and 6s are even, so 11 never lands on zero and nothing is cut off
        let sizes = PackSizes::new(&[4, 6])?;
        let graph = QuantityGraphBuilder::new(&sizes).build(11);

        for quantity in [11, 7, 5, 3, 1, -1, -3, -5] {
            assert!(
                graph.node(quantity).is_some(),
                "{quantity} should be reachable"
            );
        }

        assert_eq!(graph.node_count(), 8, "no other quantities");
        assert_eq!(quantities(&graph), vec![-5, -3, -1], "odd overshoots only");
        assert_eq!(graph.zero_edge_count(), 0, "zero is never reached");

        Ok(())
    }

    #[test]
    fn each_pair_has_distinct_edge_weights() -> TestResult {
        let cases: [(&[i64], Quantity); 3] = [
            (&[23, 31, 53, 151, 757], 758),
            (&[250, 500, 1000, 2000, 5000], 12_001),
            (&[4, 6], 11),
        ];

        for (raw, quantity) in cases {
            let sizes = PackSizes::new(raw)?;
            let graph = QuantityGraphBuilder::new(&sizes).build(quantity);
            let mut pairs = FxHashSet::default();

            assert!(graph.edge_count() > 0, "{raw:?} from {quantity} has edges");

            for edge in graph.graph.edge_references() {
                let (from, to) = (edge.source(), edge.target());
                let size = edge.weight().size;

                assert!(
                    pairs.insert((from, to)),
                    "{from:?} -> {to:?} has more than one edge for {raw:?}"
                );
                assert_eq!(
                    graph.edge_sizes(from, to),
                    &[size],
                    "{from:?} -> {to:?} records exactly its own size for {raw:?}"
                );
                assert_eq!(
                    graph.quantity(from).zip(graph.quantity(to)).map(|(a, b)| a - b),
                    Some(size.get()),
                    "{from:?} -> {to:?} subtracts {size} for {raw:?}"
                );
            }

            assert_eq!(pairs.len(), graph.edge_count(), "one edge per pair for {raw:?}");
        }

        Ok(())
    }

    #[test]
    fn cutoff_leaves_reachable_quantities_unexplored() -> TestResult {
        let sizes = PackSizes::new(&[3, 5])?;
        let graph = QuantityGraphBuilder::new(&sizes).build(11);

        assert_eq!(graph.zero_edge_count(), 2, "both sizes reached zero");
        assert!(
            graph.node(2).is_none(),
            "11 - 3 × 3 is never visited once the cutoff is hit"
        );
        assert_eq!(quantities(&graph), vec![-4, -2, 0], "candidates before the cutoff");

        Ok(())
    }

    #[test]
    fn zero_edge_cutoff_stops_expansion() -> TestResult {
        let sizes = PackSizes::new(&[1, 2])?;
        let graph = QuantityGraphBuilder::new(&sizes).build(100);

        assert_eq!(
            graph.zero_edge_count(),
            2,
            "expansion stops once both sizes land on zero"
        );
        assert!(
            graph.node_count() < 102,
            "cutoff leaves part of the graph unexplored"
        );

        Ok(())
    }
}
