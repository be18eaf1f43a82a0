use fxhash::FxHashMap;

use crate::testing::test_flow_network;

use super::*;

/// Index of an [`Arc`] in the arena of a [`FlowArray`]
type ArcId = NumEdges;

/// One direction of an ordered pair.
///
/// Arcs are allocated in pairs: the arc of `(u, v)` and that of `(v, u)` have ids `2k` and `2k + 1`,
/// so the twin of arc `a` is `a ^ 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Arc {
    head: Node,
    capacity: Capacity,
    flow: Flow,
}

/// Sparse flow network storing per-node arc lists over an arena of paired arcs.
///
/// Setting the capacity of `(u, v)` allocates both `(u, v)` and its twin `(v, u)` (with capacity
/// `0` unless set separately), so that flow pushed along `(u, v)` can later be cancelled.
#[derive(Debug, Clone, Default)]
pub struct FlowArray {
    out_arcs: Vec<Vec<ArcId>>,
    arcs: Vec<Arc>,
    arc_ids: FxHashMap<Edge, ArcId>,
    num_edges: NumEdges,
}

impl FlowArray {
    fn assert_in_range(&self, u: Node, v: Node) {
        assert!(
            self.contains_node(u) && self.contains_node(v),
            "Pair ({u},{v}) out of range for {} nodes",
            self.number_of_nodes()
        );
    }

    /// Returns the arc of `(u, v)` if either direction was ever touched
    fn arc(&self, u: Node, v: Node) -> Option<&Arc> {
        self.assert_in_range(u, v);
        self.arc_ids
            .get(&Edge(u, v))
            .map(|&id| &self.arcs[id as usize])
    }

    /// Returns the id of the arc of `(u, v)`, allocating it and its twin if necessary
    fn arc_id_or_insert(&mut self, u: Node, v: Node) -> ArcId {
        self.assert_in_range(u, v);
        if let Some(&id) = self.arc_ids.get(&Edge(u, v)) {
            return id;
        }

        let id = self.arcs.len() as ArcId;
        self.arcs.push(Arc {
            head: v,
            capacity: 0,
            flow: 0,
        });
        self.arcs.push(Arc {
            head: u,
            capacity: 0,
            flow: 0,
        });

        self.out_arcs[u as usize].push(id);
        self.out_arcs[v as usize].push(id ^ 1);
        self.arc_ids.insert(Edge(u, v), id);
        self.arc_ids.insert(Edge(v, u), id ^ 1);

        id
    }

    /// Returns the number of allocated arcs, i.e. twice the number of touched unordered pairs
    pub fn number_of_arcs(&self) -> NumEdges {
        self.arcs.len() as NumEdges
    }
}

impl GraphNodeOrder for FlowArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.out_arcs.len() as NumNodes
    }
}

impl GraphEdgeOrder for FlowArray {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl GraphNew for FlowArray {
    fn new(n: NumNodes) -> Result<Self> {
        if n < 1 {
            return Err(FlowError::InvalidSize { n });
        }

        Ok(Self {
            out_arcs: vec![Vec::new(); n as usize],
            ..Default::default()
        })
    }
}

impl CapacityEditing for FlowArray {
    fn set_edge(&mut self, u: Node, v: Node, capacity: Capacity) -> Result<()> {
        self.check_edge(u, v, capacity)?;

        let id = self.arc_id_or_insert(u, v);
        let previous = std::mem::replace(&mut self.arcs[id as usize].capacity, capacity);
        match (previous > 0, capacity > 0) {
            (false, true) => self.num_edges += 1,
            (true, false) => self.num_edges -= 1,
            _ => {}
        }

        Ok(())
    }
}

impl ResidualNetwork for FlowArray {
    fn capacity_of(&self, u: Node, v: Node) -> Capacity {
        self.arc(u, v).map_or(0, |arc| arc.capacity)
    }

    fn flow_of(&self, u: Node, v: Node) -> Flow {
        self.arc(u, v).map_or(0, |arc| arc.flow)
    }

    fn residual_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_arcs[u as usize]
            .iter()
            .map(|&id| &self.arcs[id as usize])
            .filter(|arc| arc.capacity - arc.flow > 0)
            .map(|arc| arc.head)
    }

    fn edges(&self) -> impl Iterator<Item = CapacitatedEdge> + '_ {
        self.out_arcs.iter().enumerate().flat_map(move |(u, ids)| {
            ids.iter()
                .map(move |&id| &self.arcs[id as usize])
                .filter(|arc| arc.capacity > 0)
                .map(move |arc| CapacitatedEdge::new(u as Node, arc.head, arc.capacity))
        })
    }

    fn add_flow_unchecked(&mut self, u: Node, v: Node, amount: Flow) {
        let id = self.arc_id_or_insert(u, v) as usize;
        self.arcs[id].flow += amount;
        self.arcs[id ^ 1].flow -= amount;
    }

    fn reset_flow(&mut self) {
        self.arcs.iter_mut().for_each(|arc| arc.flow = 0);
    }

    fn total_flow_out_of(&self, source: Node) -> Flow {
        self.out_arcs[source as usize]
            .iter()
            .map(|&id| self.arcs[id as usize].flow)
            .sum()
    }
}

test_flow_network!(
    test_flow_array,
    FlowArray,
    (GraphNew, CapacityEditing, ResidualNetwork, MaxFlow)
);
