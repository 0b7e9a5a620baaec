//! Fewest-packs path extraction

use std::{cmp::Reverse, collections::VecDeque};

use petgraph::{graph::NodeIndex, visit::EdgeRef};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{graph::QuantityGraph, packs::PackSize};

impl QuantityGraph {
    /// Path from the root to `target` with the fewest edges, i.e. the fewest packs.
    ///
    /// Breadth-first from the root, taking each node's edges largest pack first; the
    /// first route to discover a node is the one kept. Returns the nodes along the path,
    /// root first, or `None` if `target` is unreachable.
    pub fn fewest_packs_path(&self, target: NodeIndex) -> Option<Vec<NodeIndex>> {
        let mut predecessors: FxHashMap<NodeIndex, NodeIndex> = FxHashMap::default();
        let mut queue = VecDeque::from([self.root]);

        predecessors.insert(self.root, self.root);

        while let Some(node) = queue.pop_front() {
            if node == target {
                break;
            }

            for next in self.successors_largest_first(node) {
                if predecessors.contains_key(&next) {
                    continue;
                }

                predecessors.insert(next, node);
                queue.push_back(next);
            }
        }

        let mut path = vec![target];
        let mut current = target;

        while current != self.root {
            current = *predecessors.get(&current)?;
            path.push(current);
        }

        path.reverse();

        Some(path)
    }

    /// Pack size taken on each step of `path`.
    ///
    /// Returns `None` if two consecutive nodes are not joined by an edge.
    pub fn path_pack_sizes(&self, path: &[NodeIndex]) -> Option<SmallVec<[PackSize; 16]>> {
        path.windows(2)
            .map(|pair| match pair {
                [from, to] => self.edge_sizes(*from, *to).first().copied(),
                _ => None,
            })
            .collect()
    }

    fn successors_largest_first(&self, node: NodeIndex) -> SmallVec<[NodeIndex; 8]> {
        let mut edges: SmallVec<[(PackSize, NodeIndex); 8]> = self
            .graph
            .edges(node)
            .map(|edge| (edge.weight().size, edge.target()))
            .collect();

        edges.sort_unstable_by_key(|&(size, _)| Reverse(size));

        edges.into_iter().map(|(_, target)| target).collect()
    }
}
