/*!
# Network Operations

Traits shared by all flow network representations:
- [`GraphNodeOrder`] / [`GraphEdgeOrder`] for sizes,
- [`GraphNew`], [`CapacityEditing`] and [`GraphFromScratch`] for construction,
- [`ResidualNetwork`] for capacity, flow and residual queries as well as pushing flow.

Any network implementing these traits can be handed to the solvers in [`crate::algo`].
*/

use std::ops::Range;

use crate::{error::*, *};

/// Provides getters pertaining to the node-size of a network
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the network
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over all nodes `0..n`.
    /// As the range does not borrow `self`, it can be used while mutating the network.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if `u` is a node of the network
    fn contains_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns the largest capacity an edge of this network may carry, see [`max_capacity`]
    fn max_capacity(&self) -> Capacity {
        max_capacity(self.number_of_nodes())
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Networks always contain at least one node
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a network
pub trait GraphEdgeOrder {
    /// Returns the number of ordered pairs `(u, v)` with positive capacity
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the network has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Creates an edgeless network
pub trait GraphNew: Sized {
    /// Creates a network with nodes `0..n`, zero capacities and zero flow.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidSize`] if `n < 1`.
    fn new(n: NumNodes) -> Result<Self>;
}

/// Setting capacities of edges.
///
/// There is exactly one capacity slot per ordered pair `(u, v)`: setting the capacity of an
/// existing pair **overwrites** it, parallel edges never accumulate. The slots of `(u, v)`
/// and `(v, u)` are independent even though both directions share one flow value.
pub trait CapacityEditing: GraphNodeOrder {
    /// Sets the capacity of the edge `(u, v)`.
    /// Flow values are left untouched.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidEdge`] if an endpoint is out of range, `u == v`,
    /// `capacity < 0` or `capacity > self.max_capacity()`. The network is unchanged in this case.
    fn set_edge(&mut self, u: Node, v: Node, capacity: Capacity) -> Result<()>;

    /// Sets the capacities of multiple edges in order. Later duplicates overwrite earlier ones.
    ///
    /// # Errors
    /// Stops at and returns the first error of [`CapacityEditing::set_edge`].
    fn set_edges<I, E>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<CapacitatedEdge>,
    {
        for edge in edges {
            let CapacitatedEdge {
                edge: Edge(u, v),
                capacity,
            } = edge.into();
            self.set_edge(u, v, capacity)?;
        }
        Ok(())
    }

    /// Checks that `(u, v)` with the given capacity is a valid edge for this network
    fn check_edge(&self, u: Node, v: Node, capacity: Capacity) -> Result<()> {
        if u == v
            || !(0..=self.max_capacity()).contains(&capacity)
            || !self.contains_node(u)
            || !self.contains_node(v)
        {
            Err(FlowError::InvalidEdge { u, v, capacity })
        } else {
            Ok(())
        }
    }
}

/// Creates a network from a list of capacitated edges
pub trait GraphFromScratch: GraphNew + CapacityEditing {
    /// Creates a network with `n` nodes and the given edges.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidSize`] if `n < 1` and [`FlowError::InvalidEdge`] for the
    /// first invalid edge.
    fn from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<CapacitatedEdge>,
    {
        let mut network = Self::new(n)?;
        network.set_edges(edges)?;
        Ok(network)
    }
}

impl<N> GraphFromScratch for N where N: GraphNew + CapacityEditing {}

/// Capacity, flow and residual-capacity state of a network.
///
/// Implementations must maintain antisymmetry: `flow_of(u, v) == -flow_of(v, u)` for all pairs.
pub trait ResidualNetwork: GraphNodeOrder + GraphEdgeOrder {
    /// Returns the capacity of `(u, v)` or `0` if it was never set.
    /// ** Panics if `u >= n || v >= n` **
    fn capacity_of(&self, u: Node, v: Node) -> Capacity;

    /// Returns the (signed) flow on `(u, v)`.
    /// ** Panics if `u >= n || v >= n` **
    fn flow_of(&self, u: Node, v: Node) -> Flow;

    /// Returns `capacity(u, v) - flow(u, v)`. Includes the virtual reverse capacity
    /// created by flow on `(v, u)`.
    /// ** Panics if `u >= n || v >= n` **
    fn residual_capacity(&self, u: Node, v: Node) -> Capacity {
        self.capacity_of(u, v) - self.flow_of(u, v)
    }

    /// Returns an iterator over all `v` with `residual_capacity(u, v) > 0`.
    /// ** Panics if `u >= n` **
    fn residual_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns an iterator over all edges with positive capacity
    fn edges(&self) -> impl Iterator<Item = CapacitatedEdge> + '_;

    /// Adds `amount` to `flow(u, v)` and subtracts it from `flow(v, u)` without any checks.
    /// ** Panics if `u >= n || v >= n` **
    fn add_flow_unchecked(&mut self, u: Node, v: Node, amount: Flow);

    /// Sets the flow of all pairs to zero
    fn reset_flow(&mut self);

    /// Pushes `amount` units of flow along every consecutive pair of `path`.
    ///
    /// # Errors
    /// - [`FlowError::InvalidAmount`] if `amount < 0`,
    /// - [`FlowError::InvalidPair`] if a pair on the path has an out-of-range endpoint or is a loop,
    /// - [`FlowError::CapacityExceeded`] if `amount` exceeds the residual capacity of a pair
    ///   at the moment it is reached.
    ///
    /// On error, the network is left exactly as it was before the call.
    fn push_flow(&mut self, path: &[Node], amount: Flow) -> Result<()> {
        if amount < 0 {
            return Err(FlowError::InvalidAmount { amount });
        }

        for (i, pair) in path.windows(2).enumerate() {
            let (u, v) = (pair[0], pair[1]);

            let error = if u == v || !self.contains_node(u) || !self.contains_node(v) {
                Some(FlowError::InvalidPair { u, v })
            } else {
                let residual = self.residual_capacity(u, v);
                (amount > residual).then_some(FlowError::CapacityExceeded {
                    u,
                    v,
                    amount,
                    residual,
                })
            };

            if let Some(error) = error {
                // roll back the prefix that was already applied
                for done in path[..=i].windows(2).rev() {
                    self.add_flow_unchecked(done[0], done[1], -amount);
                }
                return Err(error);
            }

            self.add_flow_unchecked(u, v, amount);
        }

        Ok(())
    }

    /// Returns the net flow leaving `source`, i.e. the sum of `flow(source, v)` over all `v`.
    /// ** Panics if `source >= n` **
    fn total_flow_out_of(&self, source: Node) -> Flow {
        self.vertices_range().map(|v| self.flow_of(source, v)).sum()
    }
}
