/*!
`uflow` is a maximum-flow library for capacitated directed networks that are
- **u**nlabelled and **u**nsigned : Nodes are numbered `0` to `n - 1`
- integral : Capacities and flows are `i64`

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the network.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)` and [`CapacitatedEdge`] if a capacity is attached.

Every ordered pair `(u, v)` has its own capacity slot, but `(u, v)` and `(v, u)` share one signed
flow value: `flow(u, v) = -flow(v, u)` always holds. The **residual capacity** of `(u, v)` is
`capacity(u, v) - flow(u, v)`, which includes the virtual reverse capacity created by flow on `(v, u)`.
Setting the capacity of a pair twice overwrites the first value, parallel edges are not supported.

### Available Representations

See the [`repr`] module for the storage backends:

- [`FlowMatrix`](crate::repr::FlowMatrix): dense `n x n` arrays
- [`FlowArray`](crate::repr::FlowArray): adjacency lists over an arena of paired arcs

# Design

All algorithms/generators are provided as configurable structs that one can alter to their needs using either the *Builder* / *Setter* pattern before calling the configured algorithm on a provided network.
Alternatively, the most commonly used functionality is implemented via traits on the network itself, making it usable without configuring the algorithm beforehand.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic network operations, all network representations and the problem builder,
- [`algo`] includes the Edmonds–Karp solver, residual traversals and minimum cuts (`network.max_flow(s, t)`),
- [`gens`] includes random network generators and deterministic substructures,
- [`io`] includes handlers for reading and writing DIMACS and writing DOT files,
- [`error`] includes the error type shared by all fallible operations.

In most use-cases, `use uflow::{prelude::*, algo::*};` suffices for your needs.

```
use uflow::{prelude::*, algo::*};

let mut network = FlowMatrix::from_edges(
    4,
    [(0, 1, 3), (0, 2, 2), (1, 2, 1), (1, 3, 2), (2, 3, 3)],
).unwrap();

let result = network.max_flow(0, 3).unwrap();
assert_eq!(result.total_flow(), 4);
assert_eq!(result.flow_of(1, 3), Some(2));
println!("{result}");
```

The computation logs via the [`log`](https://crates.io/crates/log) facade; installing a logger is up to the caller.
*/

pub mod algo;
pub mod builder;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `uflow::prelude` includes definitions for nodes and edges, all basic network operation traits, all implemented representations and the problem builder.
pub mod prelude {
    pub use super::{
        builder::{FlowProblem, NetworkBuilder, Terminals},
        edge::*,
        error::FlowError,
        node::*,
        ops::*,
        repr::*,
    };
}
