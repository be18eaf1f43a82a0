/*!
Breadth-first traversal of the **residual graph** of a network.

An edge `(u, v)` of the residual graph exists iff `residual_capacity(u, v) > 0`. The traversal
yields `(predecessor, node)` pairs in BFS order; every node is assigned the predecessor it was
first discovered from, so the implied tree consists of shortest paths by edge count.
*/

use std::collections::VecDeque;

use super::*;

/// Compact representation of `(predecessor, node)`.
///
/// The start node of a traversal has no predecessor, which is encoded by
/// setting both tuple entries to the same node value.
pub type PredecessorOfNode = (Node, Node);

/// BFS iterator over the residual graph starting at a given node.
pub struct ResidualBfs<'a, N>
where
    N: ResidualNetwork,
{
    network: &'a N,
    visited: NodeBitSet,
    queue: VecDeque<PredecessorOfNode>,
    stop_at: Option<Node>,
}

impl<'a, N> ResidualBfs<'a, N>
where
    N: ResidualNetwork,
{
    /// Creates a new traversal starting at `start`.
    /// ** Panics if `start >= n` **
    pub fn new(network: &'a N, start: Node) -> Self {
        assert!(network.contains_node(start));
        let mut visited = network.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            network,
            visited,
            queue: VecDeque::from([(start, start)]),
            stop_at: None,
        }
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Returns *true* if `u` was discovered so far
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Consumes the iterator and records the parent of each discovered node into `tree`.
    /// Entries of undiscovered nodes and of the start node remain unchanged.
    ///
    /// # Requirements
    /// - `tree.len()` must be at least `network.len()`.
    pub fn parent_array_into(&mut self, tree: &mut [Option<OptionalNode>]) {
        for (predecessor, u) in self.by_ref() {
            if predecessor != u {
                tree[u as usize] = OptionalNode::new(predecessor);
            }
        }
    }

    /// Runs the traversal to completion and returns the set of all discovered nodes
    pub fn into_visited(mut self) -> NodeBitSet {
        self.by_ref().for_each(drop);
        self.visited
    }
}

impl<N> Iterator for ResidualBfs<'_, N>
where
    N: ResidualNetwork,
{
    type Item = PredecessorOfNode;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.queue.pop_front()?;
        let u = popped.1;

        if self.stop_at == Some(u) {
            self.queue.clear();
        } else {
            for v in self.network.residual_neighbors_of(u) {
                if !self.visited.get_bit(v) {
                    self.visited.set_bit(v);
                    self.queue.push_back((u, v));
                }
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.network.len() - self.visited.cardinality() as usize + self.queue.len()),
        )
    }
}

/// Provides residual traversals directly on networks
pub trait ResidualTraversal: ResidualNetwork + Sized {
    /// Returns a BFS over the residual graph starting at `start`.
    ///
    /// # Examples
    /// ```
    /// use uflow::{prelude::*, algo::*};
    ///
    /// let network = FlowMatrix::from_edges(3, [(0, 1, 2), (1, 2, 1)]).unwrap();
    /// let order: Vec<_> = network.residual_bfs(0).map(|(_, u)| u).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn residual_bfs(&self, start: Node) -> ResidualBfs<'_, Self> {
        ResidualBfs::new(self, start)
    }

    /// Returns *true* if there is a path from `u` to `v` in the residual graph
    fn has_residual_path(&self, u: Node, v: Node) -> bool {
        self.residual_bfs(u).stop_at(v).any(|(_, w)| w == v)
    }
}

impl<N> ResidualTraversal for N where N: ResidualNetwork {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bfs_order_and_parents() {
        let network =
            FlowArray::from_edges(5, [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1), (3, 4, 1)])
                .unwrap();

        let order: Vec<_> = network.residual_bfs(0).map(|(_, u)| u).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);

        let mut parents = vec![None; 5];
        network.residual_bfs(0).parent_array_into(&mut parents);
        let parents: Vec<_> = parents.iter().map(|p| p.map(|p| p.get())).collect();
        // 3 is first discovered from 1
        assert_eq!(parents, vec![None, Some(0), Some(0), Some(1), Some(3)]);
    }

    #[test]
    fn saturated_edges_are_skipped() {
        let mut network = FlowMatrix::from_edges(3, [(0, 1, 2), (1, 2, 1)]).unwrap();
        assert!(network.has_residual_path(0, 2));

        network.push_flow(&[0, 1, 2], 1).unwrap();
        assert!(!network.has_residual_path(0, 2));

        // flow on (1, 2) opens the reverse residual edge (2, 1)
        assert!(network.has_residual_path(2, 0));
    }

    #[test]
    fn stop_at() {
        let network = FlowMatrix::from_edges(4, [(0, 1, 1), (0, 2, 1), (2, 3, 1)]).unwrap();
        let mut bfs = network.residual_bfs(0).stop_at(1);
        let order: Vec<_> = bfs.by_ref().map(|(_, u)| u).collect();

        assert_eq!(order, vec![0, 1]);
        assert!(bfs.did_visit_node(2));
        assert!(!bfs.did_visit_node(3));
    }

    #[test]
    fn into_visited() {
        let network = FlowArray::from_edges(4, [(0, 1, 1), (2, 3, 1)]).unwrap();
        let visited = network.residual_bfs(0).into_visited();
        assert!(visited.get_bit(0) && visited.get_bit(1));
        assert!(!visited.get_bit(2) && !visited.get_bit(3));
    }
}
