/*!
# Problem Construction

[`NetworkBuilder`] is the interface for collaborators that create a network vertex by vertex
(e.g. an interactive editor): vertices receive consecutive ids as they are added and edges are
validated on insertion. Building yields a [`FlowProblem`], i.e. a network together with its
designated source and sink.

```
use uflow::prelude::*;

let mut builder = NetworkBuilder::new();
let s = builder.add_vertex();
let a = builder.add_vertex();
let t = builder.add_vertex();
builder.add_edge(s, a, 4).unwrap();
builder.add_edge(a, t, 3).unwrap();

let mut problem = builder.build::<FlowArray>().unwrap();
assert_eq!((problem.source(), problem.sink()), (s, t));
assert_eq!(problem.solve().unwrap().total_flow(), 3);
```
*/

use crate::{algo::*, error::*, prelude::*};

/// Selection of source and sink of a [`FlowProblem`]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Terminals {
    /// The first vertex is the source, the last vertex is the sink
    #[default]
    FirstAndLast,
    /// Explicitly chosen vertices
    Explicit { source: Node, sink: Node },
}

impl Terminals {
    /// Returns `(source, sink)` for a network with `n` nodes.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidEndpoint`] if both coincide or lie outside `0..n`.
    pub fn resolve(&self, n: NumNodes) -> Result<(Node, Node)> {
        let (s, t) = match *self {
            Terminals::FirstAndLast => (0, n.saturating_sub(1)),
            Terminals::Explicit { source, sink } => (source, sink),
        };

        if s == t || s >= n || t >= n {
            return Err(FlowError::InvalidEndpoint { s, t });
        }
        Ok((s, t))
    }
}

/// Incrementally collects vertices and capacitated edges of a network.
///
/// Setting an edge that was already set overwrites its capacity.
#[derive(Debug, Clone, Default)]
pub struct NetworkBuilder {
    n: NumNodes,
    edges: Vec<CapacitatedEdge>,
    terminals: Terminals,
}

impl NetworkBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with vertices `0..n` already added
    pub fn with_vertices(n: NumNodes) -> Self {
        Self {
            n,
            ..Default::default()
        }
    }

    /// Adds a new vertex and returns its id
    pub fn add_vertex(&mut self) -> Node {
        self.n += 1;
        self.n - 1
    }

    /// Adds `k` new vertices and returns their ids
    pub fn add_vertices(&mut self, k: NumNodes) -> std::ops::Range<Node> {
        let first = self.n;
        self.n += k;
        first..self.n
    }

    /// Sets the capacity of `(u, v)`.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidEdge`] if an endpoint was not added yet, `u == v`,
    /// `capacity < 0` or `capacity` exceeds [`max_capacity`] of the vertices added so far.
    /// The builder is unchanged in this case. As the bound shrinks with every added vertex,
    /// [`Self::build`] checks it again.
    pub fn add_edge(&mut self, u: Node, v: Node, capacity: Capacity) -> Result<()> {
        if u == v || !(0..=max_capacity(self.n)).contains(&capacity) || u >= self.n || v >= self.n {
            return Err(FlowError::InvalidEdge { u, v, capacity });
        }
        self.edges.push(CapacitatedEdge::new(u, v, capacity));
        Ok(())
    }

    /// Sets the source/sink selection used by [`Self::build`]
    pub fn set_terminals(&mut self, terminals: Terminals) {
        self.terminals = terminals;
    }

    /// Chainable version of [`Self::set_terminals`]
    pub fn terminals(mut self, terminals: Terminals) -> Self {
        self.set_terminals(terminals);
        self
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns the number of edge insertions so far including overwrites
    pub fn number_of_insertions(&self) -> usize {
        self.edges.len()
    }

    /// Builds the network and resolves source and sink.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidSize`] if no vertex was added, [`FlowError::InvalidEdge`] if
    /// a capacity exceeds [`max_capacity`] of the final vertex count, and
    /// [`FlowError::InvalidEndpoint`] if the terminal selection does not yield two distinct vertices.
    pub fn build<N>(&self) -> Result<FlowProblem<N>>
    where
        N: GraphFromScratch + ResidualNetwork,
    {
        let network = N::from_edges(self.n, self.edges.iter())?;
        FlowProblem::new(network, self.terminals)
    }
}

/// A network together with its designated source and sink
#[derive(Debug, Clone)]
pub struct FlowProblem<N> {
    network: N,
    source: Node,
    sink: Node,
}

impl<N> FlowProblem<N>
where
    N: ResidualNetwork,
{
    /// Wraps `network` and resolves `terminals` against it.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidEndpoint`] for invalid terminals.
    pub fn new(network: N, terminals: Terminals) -> Result<Self> {
        let (source, sink) = terminals.resolve(network.number_of_nodes())?;
        Ok(Self {
            network,
            source,
            sink,
        })
    }

    pub fn network(&self) -> &N {
        &self.network
    }

    /// Returns the network for editing. Any stored flow is discarded by the next [`Self::solve`].
    pub fn network_mut(&mut self) -> &mut N {
        &mut self.network
    }

    pub fn source(&self) -> Node {
        self.source
    }

    pub fn sink(&self) -> Node {
        self.sink
    }

    /// Returns a configurable solver for this problem
    pub fn solver(&mut self) -> Result<EdmondsKarp<'_, N>> {
        EdmondsKarp::new(&mut self.network, self.source, self.sink)
    }

    /// Computes a maximum flow from source to sink
    pub fn solve(&mut self) -> Result<FlowResult> {
        self.solver()?.compute_max_flow()
    }

    /// Computes a maximum flow and returns a minimum cut
    pub fn min_cut(&mut self) -> Result<MinCut> {
        let mut solver = self.solver()?;
        solver.compute_max_flow()?;
        Ok(solver.min_cut())
    }

    pub fn into_network(self) -> N {
        self.network
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last() {
        let mut builder = NetworkBuilder::new();
        let nodes = builder.add_vertices(4);
        assert_eq!(nodes, 0..4);
        for (u, v, c) in [(0, 1, 3), (0, 2, 2), (1, 2, 1), (1, 3, 2), (2, 3, 3)] {
            builder.add_edge(u, v, c).unwrap();
        }

        let mut problem = builder.build::<FlowMatrix>().unwrap();
        assert_eq!((problem.source(), problem.sink()), (0, 3));
        assert_eq!(problem.solve().unwrap().total_flow(), 4);
        assert_eq!(problem.min_cut().unwrap().capacity(), 4);
    }

    #[test]
    fn explicit_terminals() {
        let mut builder =
            NetworkBuilder::with_vertices(3).terminals(Terminals::Explicit { source: 2, sink: 0 });
        builder.add_edge(2, 1, 5).unwrap();
        builder.add_edge(1, 0, 4).unwrap();
        builder.add_edge(0, 1, 9).unwrap();

        let mut problem = builder.build::<FlowArray>().unwrap();
        assert_eq!(problem.solve().unwrap().total_flow(), 4);
    }

    #[test]
    fn overwrite() {
        let mut builder = NetworkBuilder::with_vertices(2);
        builder.add_edge(0, 1, 5).unwrap();
        builder.add_edge(0, 1, 2).unwrap();
        assert_eq!(builder.number_of_insertions(), 2);

        let problem = builder.build::<FlowArray>().unwrap();
        assert_eq!(problem.network().capacity_of(0, 1), 2);
        assert_eq!(problem.network().number_of_edges(), 1);
    }

    #[test]
    fn invalid_input() {
        let mut builder = NetworkBuilder::new();
        assert_eq!(
            builder.build::<FlowMatrix>().unwrap_err(),
            FlowError::InvalidSize { n: 0 }
        );

        let u = builder.add_vertex();
        assert_eq!(
            builder.add_edge(u, 1, 1),
            Err(FlowError::InvalidEdge {
                u,
                v: 1,
                capacity: 1
            })
        );
        assert!(builder.add_edge(u, u, 1).is_err());
        assert_eq!(builder.number_of_insertions(), 0);

        let big = builder.add_vertices(2).start;
        builder.add_edge(u, big, max_capacity(3)).unwrap();
        assert!(builder.add_edge(u, big, max_capacity(3) + 1).is_err());
        builder.add_vertex();
        assert_eq!(
            builder.build::<FlowArray>().unwrap_err(),
            FlowError::InvalidEdge {
                u,
                v: big,
                capacity: max_capacity(3)
            }
        );

        let mut builder = NetworkBuilder::new();
        builder.add_vertex();
        // a single vertex is both first and last
        assert_eq!(
            builder.build::<FlowMatrix>().unwrap_err(),
            FlowError::InvalidEndpoint { s: 0, t: 0 }
        );

        let v = builder.add_vertex();
        assert!(builder.add_edge(u, v, -1).is_err());
        assert!(
            builder
                .clone()
                .terminals(Terminals::Explicit { source: 0, sink: 2 })
                .build::<FlowArray>()
                .is_err()
        );
        assert!(builder.build::<FlowArray>().is_ok());
    }

    #[test]
    fn edit_and_resolve() {
        let mut problem =
            FlowProblem::new(FlowMatrix::from_edges(2, [(0, 1, 5)]).unwrap(), Terminals::default())
                .unwrap();
        assert_eq!(problem.solve().unwrap().total_flow(), 5);

        problem.network_mut().set_edge(0, 1, 2).unwrap();
        assert_eq!(problem.solve().unwrap().total_flow(), 2);
        assert_eq!(problem.into_network().flow_of(0, 1), 2);
    }
}
