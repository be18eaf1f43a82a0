use std::fmt::{Debug, Display};

use crate::{Node, NumNodes};

/// An edge is defined by two nodes/endpoints.
/// In a flow network an edge is always directed from `self.0` to `self.1`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Capacities are signed so that negative inputs can be rejected instead of wrapping around.
pub type Capacity = i64;

/// Flow shares its type with [`Capacity`]: `flow(u, v) = -flow(v, u)` is negative
/// whenever flow is sent from `v` to `u`.
pub type Flow = Capacity;

/// Largest capacity accepted on an edge of a network with `n` nodes: `Capacity::MAX / (2n)`.
///
/// Every flow value satisfies `|flow(u, v)| <= max_capacity(n)`, so residual capacities
/// (at most `capacity(u, v) + capacity(v, u)`) and sums of flows over all neighbours of a
/// node never leave the range of [`Capacity`].
pub fn max_capacity(n: NumNodes) -> Capacity {
    Capacity::MAX / (2 * n.max(1) as Capacity)
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// A directed edge together with its capacity.
/// This is the unit in which networks are described by collaborators, files, and generators.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CapacitatedEdge {
    pub edge: Edge,
    pub capacity: Capacity,
}

impl CapacitatedEdge {
    pub fn new(u: Node, v: Node, capacity: Capacity) -> Self {
        Self {
            edge: Edge(u, v),
            capacity,
        }
    }
}

impl From<(Node, Node, Capacity)> for CapacitatedEdge {
    fn from((u, v, capacity): (Node, Node, Capacity)) -> Self {
        Self::new(u, v, capacity)
    }
}

impl From<&(Node, Node, Capacity)> for CapacitatedEdge {
    fn from(&(u, v, capacity): &(Node, Node, Capacity)) -> Self {
        Self::new(u, v, capacity)
    }
}

impl From<(Edge, Capacity)> for CapacitatedEdge {
    fn from((edge, capacity): (Edge, Capacity)) -> Self {
        Self { edge, capacity }
    }
}

impl From<&CapacitatedEdge> for CapacitatedEdge {
    fn from(value: &CapacitatedEdge) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_formatting() {
        let e = Edge(3, 5);
        assert_eq!(format!("{e}"), "(3,5)");
        assert_eq!(format!("{:?}", vec![e, e.reverse()]), "[(3,5), (5,3)]");
        assert!(!e.is_loop() && Edge(2, 2).is_loop());
    }

    #[test]
    fn capacitated_edges() {
        let edges: Vec<CapacitatedEdge> = [(0, 1, 4), (2, 0, 0)].iter().map(Into::into).collect();
        assert_eq!(edges[0], CapacitatedEdge::from((Edge(0, 1), 4)));
        assert_eq!(edges[1].capacity, 0);

        // edges are ordered by their endpoints first
        assert!(CapacitatedEdge::new(0, 2, 1) < CapacitatedEdge::new(1, 0, 0));
    }

    #[test]
    fn capacity_bound() {
        assert_eq!(max_capacity(1), Capacity::MAX / 2);
        assert_eq!(max_capacity(0), max_capacity(1));
        assert_eq!(max_capacity(4), Capacity::MAX / 8);
        assert!(max_capacity(NumNodes::MAX) > 1 << 30);
    }
}
