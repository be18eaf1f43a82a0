/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing network, as well as two deterministic networks built from them:

- [`Diamond`]: source `0`, sink `3`, two disjoint paths of capacity `c` and a unit edge `(1, 2)`
  between them. Naive augmenting-path methods may alternate over the unit edge `2c` times,
  shortest augmenting paths need two augmentations.
- [`Layered`]: source `0`, `layers` layers of `width` nodes each with complete connections
  between consecutive layers, and the sink as last node.

# Example

```rust
use uflow::{prelude::*, gens::*};

let mut network = FlowMatrix::new(5).unwrap();
network.connect_path([0, 1, 2], 3).unwrap();
network.connect_complete_bipartite([2], [3, 4], 1).unwrap();

assert_eq!(network.number_of_edges(), 4);
assert_eq!(network.capacity_of(2, 4), 1);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** inside an already existing network.
///
/// Implemented for all networks that support capacity editing.
pub trait NetworkSubstructures {
    /// Connects the given nodes in order with a **simple path** of edges with capacity `capacity`.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidEdge`] for the first invalid edge. Edges before it remain set.
    fn connect_path<P>(&mut self, nodes_on_path: P, capacity: Capacity) -> Result<()>
    where
        P: IntoIterator<Item = Node>;

    /// Adds an edge of capacity `capacity` from every node in `left` to every node in `right`.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidEdge`] for the first invalid edge. Edges before it remain set.
    fn connect_complete_bipartite<L, R>(
        &mut self,
        left: L,
        right: R,
        capacity: Capacity,
    ) -> Result<()>
    where
        L: IntoIterator<Item = Node>,
        R: IntoIterator<Item = Node>,
        R::IntoIter: Clone;
}

impl<N> NetworkSubstructures for N
where
    N: CapacityEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P, capacity: Capacity) -> Result<()>
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.set_edge(u, v, capacity)?;
        }
        Ok(())
    }

    fn connect_complete_bipartite<L, R>(
        &mut self,
        left: L,
        right: R,
        capacity: Capacity,
    ) -> Result<()>
    where
        L: IntoIterator<Item = Node>,
        R: IntoIterator<Item = Node>,
        R::IntoIter: Clone,
    {
        for (u, v) in left.into_iter().cartesian_product(right) {
            self.set_edge(u, v, capacity)?;
        }
        Ok(())
    }
}

/// Builder for the four-node diamond network
#[derive(Debug, Copy, Clone)]
pub struct Diamond {
    capacity: Capacity,
}

impl Default for Diamond {
    fn default() -> Self {
        Self { capacity: 1 << 20 }
    }
}

impl Diamond {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capacity of the four outer edges
    pub fn capacity(mut self, capacity: Capacity) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builds the network with source `0` and sink `3`.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidEdge`] if the capacity is negative or exceeds [`max_capacity`].
    pub fn build<N>(&self) -> Result<N>
    where
        N: GraphFromScratch,
    {
        let mut network = N::new(4)?;
        network.connect_path([0, 1, 3], self.capacity)?;
        network.connect_path([0, 2, 3], self.capacity)?;
        network.set_edge(1, 2, 1)?;
        Ok(network)
    }
}

/// Builder for layered networks with complete connections between consecutive layers
#[derive(Debug, Copy, Clone)]
pub struct Layered {
    layers: NumNodes,
    width: NumNodes,
    capacity: Capacity,
}

impl Default for Layered {
    fn default() -> Self {
        Self {
            layers: 1,
            width: 1,
            capacity: 1,
        }
    }
}

impl Layered {
    pub fn new() -> Self {
        Self::default()
    }

    /// ** Panics if `layers == 0` **
    pub fn layers(mut self, layers: NumNodes) -> Self {
        assert!(layers > 0);
        self.layers = layers;
        self
    }

    /// ** Panics if `width == 0` **
    pub fn width(mut self, width: NumNodes) -> Self {
        assert!(width > 0);
        self.width = width;
        self
    }

    /// Capacity of every edge
    pub fn capacity(mut self, capacity: Capacity) -> Self {
        self.capacity = capacity;
        self
    }

    /// Returns the nodes of layer `i`
    fn layer(&self, i: NumNodes) -> std::ops::Range<Node> {
        let first = 1 + i * self.width;
        first..first + self.width
    }

    /// Builds the network with source `0` and sink `n - 1`.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidEdge`] if the capacity is negative or exceeds [`max_capacity`].
    pub fn build<N>(&self) -> Result<N>
    where
        N: GraphFromScratch,
    {
        let n = self.layers * self.width + 2;
        let sink = n - 1;
        let mut network = N::new(n)?;

        network.connect_complete_bipartite([0], self.layer(0), self.capacity)?;
        for i in 1..self.layers {
            network.connect_complete_bipartite(self.layer(i - 1), self.layer(i), self.capacity)?;
        }
        network.connect_complete_bipartite(self.layer(self.layers - 1), [sink], self.capacity)?;

        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_path() {
        let mut network = FlowArray::new(6).unwrap();
        network.connect_path([], 1).unwrap();
        network.connect_path([1], 1).unwrap();
        assert_eq!(network.number_of_edges(), 0);

        network.connect_path([0, 3, 1, 4], 2).unwrap();
        assert_eq!(
            network.edges().map(|e| e.edge).sorted().collect_vec(),
            vec![Edge(0, 3), Edge(1, 4), Edge(3, 1)]
        );

        assert_eq!(
            network.connect_path([4, 5, 5], 1),
            Err(FlowError::InvalidEdge {
                u: 5,
                v: 5,
                capacity: 1
            })
        );
        assert_eq!(network.capacity_of(4, 5), 1);
    }

    #[test]
    fn complete_bipartite() {
        let mut network = FlowMatrix::new(5).unwrap();
        network
            .connect_complete_bipartite([0, 1], 2..5, 3)
            .unwrap();
        assert_eq!(network.number_of_edges(), 6);
        assert!(network.edges().all(|e| e.edge.0 < 2 && e.edge.1 >= 2 && e.capacity == 3));
    }

    #[test]
    fn diamond() {
        let network: FlowArray = Diamond::new().capacity(7).build().unwrap();
        assert_eq!(network.number_of_nodes(), 4);
        assert_eq!(network.number_of_edges(), 5);
        assert_eq!(network.capacity_of(1, 2), 1);
        assert_eq!(network.capacity_of(2, 3), 7);
        assert!(Diamond::new().capacity(-1).build::<FlowArray>().is_err());
    }

    #[test]
    fn layered() {
        let network: FlowMatrix = Layered::new().layers(3).width(2).build().unwrap();
        assert_eq!(network.number_of_nodes(), 8);
        // 2 source edges, 2 * 4 between layers, 2 sink edges
        assert_eq!(network.number_of_edges(), 12);
        assert_eq!(network.capacity_of(0, 1), 1);
        assert_eq!(network.capacity_of(2, 3), 1);
        assert_eq!(network.capacity_of(1, 2), 0);
        assert_eq!(network.capacity_of(6, 7), 1);
    }
}
