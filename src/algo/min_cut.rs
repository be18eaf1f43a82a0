use itertools::Itertools;

use super::*;

/// A minimum `(s, t)`-cut derived from the residual graph of a maximum flow.
///
/// The source side consists of all nodes reachable from the source in the residual graph.
/// Every defined edge leaving the source side is saturated, so the cut capacity equals the
/// value of the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCut {
    source_side: Vec<Node>,
    cut_edges: Vec<CapacitatedEdge>,
    capacity: Capacity,
}

impl MinCut {
    /// Computes the cut of all nodes reachable from `source` in the residual graph of `network`.
    /// If the flow stored in `network` is not maximum, the sink is on the source side and the
    /// result is not an `(s, t)`-cut.
    pub fn from_residual<N>(network: &N, source: Node) -> Self
    where
        N: ResidualNetwork,
    {
        let visited = network.residual_bfs(source).into_visited();

        let cut_edges = network
            .edges()
            .filter(|e| visited.get_bit(e.edge.0) && !visited.get_bit(e.edge.1))
            .sorted_unstable_by_key(|e| e.edge)
            .collect_vec();

        Self {
            source_side: visited.iter_set_bits().collect(),
            capacity: cut_edges.iter().map(|e| e.capacity).sum(),
            cut_edges,
        }
    }

    /// Returns *true* if `u` lies on the source side of the cut
    pub fn contains(&self, u: Node) -> bool {
        self.source_side.binary_search(&u).is_ok()
    }

    /// Returns all nodes of the source side in ascending order
    pub fn source_side(&self) -> &[Node] {
        &self.source_side
    }

    /// Returns all edges from the source side to the sink side sorted by `(u, v)`
    pub fn cut_edges(&self) -> &[CapacitatedEdge] {
        &self.cut_edges
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cut_of_scenario() {
        let mut network = FlowMatrix::from_edges(
            4,
            [(0, 1, 3), (0, 2, 2), (1, 2, 1), (1, 3, 2), (2, 3, 3)],
        )
        .unwrap();
        let cut = network.min_st_cut(0, 3).unwrap();

        assert_eq!(cut.capacity(), 4);
        assert!(cut.contains(0));
        assert!(!cut.contains(3));
        for e in cut.cut_edges() {
            assert_eq!(network.residual_capacity(e.edge.0, e.edge.1), 0);
        }
    }

    #[test]
    fn unreachable_sink() {
        let mut network = FlowArray::from_edges(4, [(0, 1, 4), (2, 3, 4)]).unwrap();
        let cut = network.min_st_cut(0, 3).unwrap();

        assert_eq!(cut.source_side(), &[0, 1]);
        assert!(cut.cut_edges().is_empty());
        assert_eq!(cut.capacity(), 0);
    }

    #[test]
    fn bottleneck_edge() {
        let mut network =
            FlowArray::from_edges(4, [(0, 1, 10), (1, 2, 1), (2, 3, 10), (3, 1, 5)]).unwrap();
        let cut = network.min_st_cut(0, 3).unwrap();

        assert_eq!(cut.source_side(), &[0, 1]);
        assert_eq!(cut.cut_edges(), &[CapacitatedEdge::new(1, 2, 1)]);
        assert_eq!(cut.capacity(), 1);
    }
}
