use crate::testing::test_flow_network;

use super::*;

/// Dense flow network storing capacity and flow of every ordered pair in row-major arrays.
///
/// As memory grows with `16 * n^2` bytes, at most [`FlowMatrix::MAX_NODES`] nodes are supported.
/// Use [`FlowArray`](super::FlowArray) for larger networks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowMatrix {
    n: NumNodes,
    num_edges: NumEdges,
    capacity: Vec<Capacity>,
    flow: Vec<Flow>,
}

impl FlowMatrix {
    /// Largest number of nodes accepted by [`GraphNew::new`]
    pub const MAX_NODES: NumNodes = 1 << 14;

    /// Position of `(u, v)` in the row-major arrays
    fn index(&self, u: Node, v: Node) -> usize {
        assert!(
            u < self.n && v < self.n,
            "Pair ({u},{v}) out of range for {} nodes",
            self.n
        );
        u as usize * self.n as usize + v as usize
    }

    /// Range of row `u` in the row-major arrays
    fn row(&self, u: Node) -> std::ops::Range<usize> {
        let start = self.index(u, 0);
        start..start + self.n as usize
    }
}

impl GraphNodeOrder for FlowMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl GraphEdgeOrder for FlowMatrix {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl GraphNew for FlowMatrix {
    fn new(n: NumNodes) -> Result<Self> {
        if !(1..=Self::MAX_NODES).contains(&n) {
            return Err(FlowError::InvalidSize { n });
        }

        let cells = n as usize * n as usize;
        let mut capacity = Vec::new();
        let mut flow = Vec::new();
        capacity
            .try_reserve_exact(cells)
            .and_then(|_| flow.try_reserve_exact(cells))
            .map_err(|_| FlowError::InvalidSize { n })?;
        capacity.resize(cells, 0);
        flow.resize(cells, 0);

        Ok(Self {
            n,
            num_edges: 0,
            capacity,
            flow,
        })
    }
}

impl CapacityEditing for FlowMatrix {
    fn set_edge(&mut self, u: Node, v: Node, capacity: Capacity) -> Result<()> {
        self.check_edge(u, v, capacity)?;

        let idx = self.index(u, v);
        let previous = std::mem::replace(&mut self.capacity[idx], capacity);
        match (previous > 0, capacity > 0) {
            (false, true) => self.num_edges += 1,
            (true, false) => self.num_edges -= 1,
            _ => {}
        }

        Ok(())
    }
}

impl ResidualNetwork for FlowMatrix {
    fn capacity_of(&self, u: Node, v: Node) -> Capacity {
        self.capacity[self.index(u, v)]
    }

    fn flow_of(&self, u: Node, v: Node) -> Flow {
        self.flow[self.index(u, v)]
    }

    fn residual_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        let row = self.row(u);
        self.capacity[row.clone()]
            .iter()
            .zip(&self.flow[row])
            .enumerate()
            .filter_map(|(v, (c, f))| (c - f > 0).then_some(v as Node))
    }

    fn edges(&self) -> impl Iterator<Item = CapacitatedEdge> + '_ {
        let n = self.n as usize;
        self.capacity
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0)
            .map(move |(idx, &capacity)| {
                CapacitatedEdge::new((idx / n) as Node, (idx % n) as Node, capacity)
            })
    }

    fn add_flow_unchecked(&mut self, u: Node, v: Node, amount: Flow) {
        let forward = self.index(u, v);
        let backward = self.index(v, u);
        self.flow[forward] += amount;
        self.flow[backward] -= amount;
    }

    fn reset_flow(&mut self) {
        self.flow.fill(0);
    }

    fn total_flow_out_of(&self, source: Node) -> Flow {
        self.flow[self.row(source)].iter().sum()
    }
}

test_flow_network!(
    test_flow_matrix,
    FlowMatrix,
    (GraphNew, CapacityEditing, ResidualNetwork, MaxFlow)
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_limit() {
        for n in [FlowMatrix::MAX_NODES + 1, 200_000, NumNodes::MAX] {
            assert_eq!(FlowMatrix::new(n).unwrap_err(), FlowError::InvalidSize { n });
        }
    }
}
