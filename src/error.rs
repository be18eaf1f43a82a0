//! Errors raised while building networks or computing flows.
//!
//! All errors are local input errors: they are detected synchronously at the call that caused
//! them, before any state is modified.

use thiserror::Error;

use crate::prelude::*;

/// Shorthand for results of this crate
pub type Result<T> = std::result::Result<T, FlowError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlowError {
    /// A network must contain at least one vertex, dense representations also limit the maximum
    #[error("invalid network size {n}")]
    InvalidSize { n: NumNodes },

    /// Out-of-range endpoint, self-loop, negative capacity or a capacity above
    /// [`max_capacity`](crate::max_capacity) of the network; `capacity` is the rejected value
    #[error("invalid edge ({u},{v}) with capacity {capacity}")]
    InvalidEdge { u: Node, v: Node, capacity: Capacity },

    /// A path passed to `push_flow` contains a loop or an out-of-range endpoint
    #[error("invalid pair ({u},{v}) on path")]
    InvalidPair { u: Node, v: Node },

    /// Source and sink must be distinct vertices of the network
    #[error("invalid endpoints: source {s} and sink {t}")]
    InvalidEndpoint { s: Node, t: Node },

    /// `push_flow` was asked to push more than the residual capacity of an edge on the path
    #[error("pushing {amount} along ({u},{v}) exceeds its residual capacity {residual}")]
    CapacityExceeded {
        u: Node,
        v: Node,
        amount: Flow,
        residual: Capacity,
    },

    /// Flow can only be pushed in non-negative amounts
    #[error("cannot push negative amount {amount}")]
    InvalidAmount { amount: Flow },

    /// The optional augmentation limit of the solver was hit while augmenting paths remained
    #[error("augmenting paths remain after the limit of {limit} augmentations")]
    AugmentationLimitReached { limit: usize },
}

impl From<FlowError> for std::io::Error {
    fn from(value: FlowError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            FlowError::InvalidEdge {
                u: 1,
                v: 1,
                capacity: 3
            }
            .to_string(),
            "invalid edge (1,1) with capacity 3"
        );

        assert_eq!(
            FlowError::InvalidPair { u: 2, v: 2 }.to_string(),
            "invalid pair (2,2) on path"
        );

        let io: std::io::Error = FlowError::InvalidSize { n: 0 }.into();
        assert_eq!(io.kind(), std::io::ErrorKind::InvalidData);
    }
}
