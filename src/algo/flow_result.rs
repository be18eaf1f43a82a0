use std::fmt::Display;

use itertools::Itertools;

use super::*;

/// Final flow on a single edge with positive capacity
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeFlow {
    pub edge: Edge,
    pub capacity: Capacity,
    pub flow: Flow,
}

impl EdgeFlow {
    /// Returns *true* if the edge carries as much flow as its capacity allows
    pub fn is_saturated(&self) -> bool {
        self.flow == self.capacity
    }
}

/// Result of a maximum-flow computation.
///
/// Only edges with positive capacity are reported. As `(u, v)` and `(v, u)` share one signed flow
/// value, the flow reported for `(u, v)` is `max(flow(u, v), 0)`: the net flow in that direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowResult {
    source: Node,
    sink: Node,
    total_flow: Flow,
    edges: Vec<EdgeFlow>,
    num_augmentations: usize,
}

impl FlowResult {
    /// Reads the current flow of `network`
    pub fn from_network<N>(network: &N, source: Node, sink: Node, num_augmentations: usize) -> Self
    where
        N: ResidualNetwork,
    {
        let edges = network
            .edges()
            .map(|CapacitatedEdge { edge, capacity }| EdgeFlow {
                edge,
                capacity,
                flow: network.flow_of(edge.0, edge.1).max(0),
            })
            .sorted_unstable()
            .collect_vec();

        Self {
            source,
            sink,
            total_flow: network.total_flow_out_of(source),
            edges,
            num_augmentations,
        }
    }

    /// Returns the value of the flow, i.e. the net flow leaving the source
    pub fn total_flow(&self) -> Flow {
        self.total_flow
    }

    pub fn source(&self) -> Node {
        self.source
    }

    pub fn sink(&self) -> Node {
        self.sink
    }

    /// Returns the number of augmenting paths used to compute the flow
    pub fn num_augmentations(&self) -> usize {
        self.num_augmentations
    }

    /// Returns all edges with positive capacity sorted by `(u, v)`
    pub fn edge_flows(&self) -> &[EdgeFlow] {
        &self.edges
    }

    /// Returns an iterator over all edges carrying positive flow
    pub fn edges_with_flow(&self) -> impl Iterator<Item = &EdgeFlow> + '_ {
        self.edges.iter().filter(|e| e.flow > 0)
    }

    /// Returns an iterator over all saturated edges
    pub fn saturated_edges(&self) -> impl Iterator<Item = &EdgeFlow> + '_ {
        self.edges.iter().filter(|e| e.is_saturated())
    }

    /// Returns the flow on `(u, v)` or `None` if `(u, v)` has no positive capacity
    pub fn flow_of(&self, u: Node, v: Node) -> Option<Flow> {
        self.edges
            .binary_search_by_key(&Edge(u, v), |e| e.edge)
            .ok()
            .map(|idx| self.edges[idx].flow)
    }
}

impl Display for FlowResult {
    /// Human readable report listing all edges with positive flow
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Maximum Flow: {}", self.total_flow)?;
        writeln!(f)?;
        writeln!(f, "Flow through each edge:")?;
        for EdgeFlow {
            edge: Edge(u, v),
            flow,
            ..
        } in self.edges_with_flow()
        {
            writeln!(f, "{u} -> {v}: {flow}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report() {
        let mut network =
            FlowMatrix::from_edges(4, [(0, 1, 2), (1, 3, 2), (0, 2, 1), (2, 3, 5)]).unwrap();
        let result = network.max_flow(0, 3).unwrap();

        assert_eq!(
            result.to_string(),
            "Maximum Flow: 3\n\nFlow through each edge:\n0 -> 1: 2\n0 -> 2: 1\n1 -> 3: 2\n2 -> 3: 1\n"
        );
    }

    #[test]
    fn lookups() {
        let mut network = FlowArray::from_edges(3, [(1, 2, 4), (0, 1, 3), (2, 0, 7)]).unwrap();
        let result = network.max_flow(0, 2).unwrap();

        assert_eq!(result.total_flow(), 3);
        assert_eq!(
            result.edge_flows().iter().map(|e| e.edge).collect_vec(),
            vec![Edge(0, 1), Edge(1, 2), Edge(2, 0)]
        );
        assert_eq!(result.flow_of(0, 1), Some(3));
        assert_eq!(result.flow_of(1, 2), Some(3));
        assert_eq!(result.flow_of(2, 0), Some(0));
        assert_eq!(result.flow_of(1, 0), None);
        assert_eq!(
            result.saturated_edges().map(|e| e.edge).collect_vec(),
            vec![Edge(0, 1)]
        );
    }
}
