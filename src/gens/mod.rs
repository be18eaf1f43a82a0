/*!
# Network Generators

This module provides builder patterns for constructing flow networks, either at random or as
deterministic substructures. They are mainly used to produce test and benchmark instances.

The typical usage workflow is:

1. Create a generator instance (e.g., `CapacitatedGnp::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).prob(p).capacities(1..=10)`).
3. Generate edges via `generate()` / `stream()`, or a network directly via `build()`.

Supported models include:
- Capacitated `G(n,p)`: every ordered pair is an edge independently with probability `p` and
  receives a uniform random capacity,
- [`Diamond`]: the classic four-node network with a unit edge in the middle,
- [`Layered`]: a source, a number of equally wide layers connected completely, and a sink.

All networks implementing [`GraphFromScratch`] can use the [`RandomNetwork`] trait for convenient
random network construction.
*/

use rand::Rng;

use crate::{error::*, prelude::*};

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the network generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// General trait for a configurable random edge generator.
pub trait NetworkGenerator {
    /// Returns the number of nodes of the generated networks
    fn number_of_nodes(&self) -> NumNodes;

    /// Creates a lazy iterator (stream) over generated capacitated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = CapacitatedEdge>
    where
        R: Rng;

    /// Generates a list of random capacitated edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<CapacitatedEdge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Generates a network from the streamed edges.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidSize`] if the generator has no nodes.
    fn build<N, R>(&self, rng: &mut R) -> Result<N>
    where
        N: GraphFromScratch,
        R: Rng,
    {
        N::from_edges(self.number_of_nodes(), self.stream(rng))
    }
}

/// Trait for building full network instances from random models.
pub trait RandomNetwork: Sized {
    /// Creates a random capacitated `G(n,p)` network with capacities drawn uniformly from `capacities`.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidSize`] if `n < 1`.
    fn gnp<R>(
        rng: &mut R,
        n: NumNodes,
        p: f64,
        capacities: std::ops::RangeInclusive<Capacity>,
    ) -> Result<Self>
    where
        R: Rng;
}

impl<N> RandomNetwork for N
where
    N: GraphFromScratch,
{
    fn gnp<R>(
        rng: &mut R,
        n: NumNodes,
        p: f64,
        capacities: std::ops::RangeInclusive<Capacity>,
    ) -> Result<Self>
    where
        R: Rng,
    {
        CapacitatedGnp::new()
            .nodes(n)
            .prob(p)
            .capacities(capacities)
            .build(rng)
    }
}
