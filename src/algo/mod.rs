/*!
# Flow Algorithms

This module provides the **maximum-flow** machinery built on top of the network representations
in this crate. Everything is re-exported at the top level of this module, so you can simply do:
```rust
use uflow::algo::*;
```
and gain access to residual traversals, the Edmonds–Karp solver and minimum cuts.
The solver is provided as an **iterator** over its augmentations, but the most common
functionality is also implemented via traits on the network itself (`network.max_flow(s, t)`).
*/

mod edmonds_karp;
mod flow_result;
mod min_cut;
mod traversal;

use crate::{error::*, prelude::*};

pub use edmonds_karp::*;
pub use flow_result::*;
pub use min_cut::*;
pub use traversal::*;
