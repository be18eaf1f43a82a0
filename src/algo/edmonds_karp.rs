/*!
# Edmonds–Karp

Maximum `(s, t)`-flow by repeatedly augmenting along **shortest** augmenting paths.

Each iteration runs a BFS over the residual graph from the source (see [`ResidualBfs`]),
walks the discovered path back from the sink, and pushes the bottleneck (the minimum residual
capacity on the path) along it. As shortest-path lengths in the residual graph never decrease,
there are at most `O(V * E)` augmentations, each costing one `O(E)` BFS: `O(V * E^2)` overall,
independent of the capacities.
*/

use log::{debug, trace};
use smallvec::{SmallVec, smallvec};

use super::*;

/// Vertices of an augmenting path from source to sink
pub type AugmentingPath = SmallVec<[Node; 8]>;

/// A single augmentation step: `amount` units of flow were pushed along `path`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Augmentation {
    pub path: AugmentingPath,
    pub amount: Flow,
}

/// Edmonds–Karp solver operating in place on an exclusively borrowed network.
///
/// Creating the solver resets all flow to zero. Afterwards the solver can either be driven to
/// completion by [`EdmondsKarp::compute_max_flow`] or stepped through as an iterator over the
/// performed augmentations.
///
/// # Examples
/// ```
/// use uflow::{prelude::*, algo::*};
///
/// let mut network = FlowMatrix::from_edges(
///     4,
///     [(0, 1, 3), (0, 2, 2), (1, 2, 1), (1, 3, 2), (2, 3, 3)],
/// ).unwrap();
///
/// let mut ek = EdmondsKarp::new(&mut network, 0, 3).unwrap();
/// let result = ek.compute_max_flow().unwrap();
/// assert_eq!(result.total_flow(), 4);
/// assert_eq!(ek.min_cut().capacity(), 4);
/// ```
pub struct EdmondsKarp<'a, N>
where
    N: ResidualNetwork,
{
    network: &'a mut N,
    source: Node,
    sink: Node,
    predecessor: Vec<Option<OptionalNode>>,
    total_flow: Flow,
    num_augmentations: usize,
    max_augmentations: Option<usize>,
    stop_at_sink: bool,
    exhausted: bool,
}

impl<'a, N> EdmondsKarp<'a, N>
where
    N: ResidualNetwork,
{
    /// Creates a new solver for a maximum `(source, sink)`-flow and resets all flow of `network`.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidEndpoint`] if `source == sink` or either is out of range.
    pub fn new(network: &'a mut N, source: Node, sink: Node) -> Result<Self> {
        if source == sink || !network.contains_node(source) || !network.contains_node(sink) {
            return Err(FlowError::InvalidEndpoint {
                s: source,
                t: sink,
            });
        }

        network.reset_flow();
        let n = network.len();

        Ok(Self {
            network,
            source,
            sink,
            predecessor: vec![None; n],
            total_flow: 0,
            num_augmentations: 0,
            max_augmentations: None,
            stop_at_sink: true,
            exhausted: false,
        })
    }

    /// Limits the number of augmentations. If augmenting paths remain after `limit`
    /// augmentations, the solver fails with [`FlowError::AugmentationLimitReached`].
    /// The limit is checked once per iteration. `None` (the default) disables the limit.
    pub fn set_max_augmentations(&mut self, limit: Option<usize>) {
        self.max_augmentations = limit;
    }

    /// Chainable version of [`Self::set_max_augmentations`].
    pub fn max_augmentations(mut self, limit: Option<usize>) -> Self {
        self.set_max_augmentations(limit);
        self
    }

    /// If *true* (the default), each BFS stops as soon as the sink is reached.
    /// Disabling this does not change the result, only the amount of work per iteration.
    pub fn set_stop_at_sink(&mut self, stop_at_sink: bool) {
        self.stop_at_sink = stop_at_sink;
    }

    /// Chainable version of [`Self::set_stop_at_sink`].
    pub fn stop_at_sink(mut self, stop_at_sink: bool) -> Self {
        self.set_stop_at_sink(stop_at_sink);
        self
    }

    pub fn source(&self) -> Node {
        self.source
    }

    pub fn sink(&self) -> Node {
        self.sink
    }

    /// Returns the flow pushed so far
    pub fn total_flow(&self) -> Flow {
        self.total_flow
    }

    /// Returns the number of augmentations performed so far
    pub fn num_augmentations(&self) -> usize {
        self.num_augmentations
    }

    /// Returns the underlying network with its current flow
    pub fn network(&self) -> &N {
        self.network
    }

    /// Performs BFS to find a shortest augmenting path from source to sink.
    /// Updates the predecessor array and returns whether the sink was reached.
    fn bfs(&mut self) -> bool {
        self.predecessor.fill(None);

        let mut bfs = self.network.residual_bfs(self.source);
        if self.stop_at_sink {
            bfs.set_stop_at(self.sink);
        }
        bfs.parent_array_into(&mut self.predecessor);

        self.predecessor[self.sink as usize].is_some()
    }

    /// Walks the predecessor array back from the sink
    fn trace_path(&self) -> AugmentingPath {
        let mut path: AugmentingPath = smallvec![self.sink];
        let mut v = self.sink;
        // the source is the only node on the path without predecessor
        while let Some(u) = self.predecessor[v as usize] {
            v = u.get();
            path.push(v);
        }
        path.reverse();

        debug_assert_eq!(path.first(), Some(&self.source));
        path
    }

    /// Finds the next shortest augmenting path and pushes its bottleneck along it.
    /// Returns `None` once the flow is maximum.
    ///
    /// # Errors
    /// Returns [`FlowError::AugmentationLimitReached`] if augmenting paths remain but the limit
    /// set by [`Self::set_max_augmentations`] was reached. The network is not modified in this case.
    pub fn augment(&mut self) -> Result<Option<Augmentation>> {
        if !self.bfs() {
            return Ok(None);
        }

        if let Some(limit) = self
            .max_augmentations
            .filter(|&limit| self.num_augmentations >= limit)
        {
            debug!("Edmonds-Karp stopped after reaching the limit of {limit} augmentations");
            return Err(FlowError::AugmentationLimitReached { limit });
        }

        let path = self.trace_path();
        let amount = path
            .windows(2)
            .map(|pair| self.network.residual_capacity(pair[0], pair[1]))
            .min()
            .unwrap_or(0);

        self.network.push_flow(&path, amount)?;
        self.total_flow += amount;
        self.num_augmentations += 1;

        trace!(
            "Augmentation {}: pushed {amount} along {path:?}",
            self.num_augmentations
        );

        Ok(Some(Augmentation { path, amount }))
    }

    /// Augments until no augmenting path remains and returns the resulting maximum flow.
    /// Calling this method again afterwards performs no further augmentations and returns the
    /// same result.
    ///
    /// # Errors
    /// Returns [`FlowError::AugmentationLimitReached`] if a limit was set and is exceeded.
    pub fn compute_max_flow(&mut self) -> Result<FlowResult> {
        debug!(
            "Edmonds-Karp from {} to {} on {} nodes and {} edges",
            self.source,
            self.sink,
            self.network.number_of_nodes(),
            self.network.number_of_edges()
        );

        while self.augment()?.is_some() {}

        debug!(
            "Edmonds-Karp found a maximum flow of {} after {} augmentations",
            self.total_flow, self.num_augmentations
        );

        Ok(self.flow_result())
    }

    /// Returns the flow currently stored in the network
    pub fn flow_result(&self) -> FlowResult {
        let result =
            FlowResult::from_network(&*self.network, self.source, self.sink, self.num_augmentations);
        debug_assert_eq!(result.total_flow(), self.total_flow);
        result
    }

    /// Returns the minimum cut implied by the current residual graph.
    /// Only meaningful once [`Self::compute_max_flow`] finished.
    pub fn min_cut(&self) -> MinCut {
        MinCut::from_residual(&*self.network, self.source)
    }
}

/// Iterates over the augmentations performed by the Edmonds–Karp algorithm.
/// The iterator terminates when no further augmenting paths exist. If the
/// augmentation limit is reached, the error is yielded once and the iterator ends.
impl<N> Iterator for EdmondsKarp<'_, N>
where
    N: ResidualNetwork,
{
    type Item = Result<Augmentation>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let item = self.augment().transpose();
        self.exhausted = !matches!(item, Some(Ok(_)));
        item
    }
}

/// Maximum flows and minimum cuts as methods on networks
pub trait NetworkFlow: ResidualNetwork + Sized {
    /// Returns an Edmonds–Karp solver for a maximum `(s, t)`-flow on this network.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidEndpoint`] for invalid `s` or `t`.
    fn edmonds_karp(&mut self, s: Node, t: Node) -> Result<EdmondsKarp<'_, Self>> {
        EdmondsKarp::new(self, s, t)
    }

    /// Computes a maximum `(s, t)`-flow, leaving it stored in the network.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidEndpoint`] for invalid `s` or `t`.
    ///
    /// # Examples
    /// ```
    /// use uflow::{prelude::*, algo::*};
    ///
    /// let mut network = FlowArray::from_edges(2, [(0, 1, 5)]).unwrap();
    /// assert_eq!(network.max_flow(0, 1).unwrap().total_flow(), 5);
    ///
    /// network.set_edge(0, 1, 2).unwrap();
    /// assert_eq!(network.max_flow(0, 1).unwrap().total_flow(), 2);
    /// ```
    fn max_flow(&mut self, s: Node, t: Node) -> Result<FlowResult> {
        self.edmonds_karp(s, t)?.compute_max_flow()
    }

    /// Computes a maximum `(s, t)`-flow and returns a minimum `(s, t)`-cut.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidEndpoint`] for invalid `s` or `t`.
    fn min_st_cut(&mut self, s: Node, t: Node) -> Result<MinCut> {
        let mut ek = self.edmonds_karp(s, t)?;
        ek.compute_max_flow()?;
        Ok(ek.min_cut())
    }
}

impl<N> NetworkFlow for N where N: ResidualNetwork {}
