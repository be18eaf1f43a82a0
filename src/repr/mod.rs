/*!
# Network Representations

Two interchangeable storage backends for capacitated directed networks:

- [`FlowMatrix`]: dense `n x n` capacity and flow arrays. `O(1)` queries, `O(n)` neighborhood
  scans and `O(n^2)` memory. Best for small or dense networks.
- [`FlowArray`]: per-node arc lists over an arena of paired arcs. Memory and neighborhood
  scans are linear in the number of defined edges. Best for large sparse networks.

Both implement [`GraphNew`], [`CapacityEditing`] and [`ResidualNetwork`] with identical
semantics, so every algorithm accepts either.
*/

use crate::{error::*, ops::*, *};

mod array;
mod matrix;

pub use array::*;
pub use matrix::*;
