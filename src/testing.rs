/// Instantiates a test suite for a network representation. Every representation should implement
/// `GraphNodeOrder` and `GraphEdgeOrder`; further suites are selected by the listed traits.
macro_rules! test_flow_network {
    ($env:ident, $network:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{algo::*, error::*, ops::*, repr::*, testing::*, *};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of `m` random edges without loops for nodes `0..n`.
            /// Pairs may repeat and capacities may be zero.
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<CapacitatedEdge> {
                assert!(n > 1);
                (0..m).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = (u + rng.random_range(1..n)) % n;
                    CapacitatedEdge::new(u, v, rng.random_range(0..=10))
                }).collect_vec()
            }

            /// Returns the flow of every ordered pair
            fn all_flows(network: &$network) -> Vec<Flow> {
                let n = network.number_of_nodes();
                (0..n).cartesian_product(0..n).map(|(u, v)| network.flow_of(u, v)).collect_vec()
            }

            fn assert_antisymmetric(network: &$network) {
                for u in network.vertices_range() {
                    for v in network.vertices_range() {
                        assert_eq!(network.flow_of(u, v), -network.flow_of(v, u));
                        assert!(network.residual_capacity(u, v) >= 0);
                    }
                }
            }

            $(
                test_flow_network!($network: $trait);
            )*
        }
    };
    ($network:ident: GraphNew) => {
        #[test]
        fn network_new() {
            for n in 1..50 {
                let network = <$network>::new(n).unwrap();

                assert_eq!(network.number_of_edges(), 0);
                assert_eq!(network.number_of_nodes(), n);
                assert!(network.is_singleton());
                assert_eq!(network.vertices_range().len(), n as usize);
                assert_eq!(network.edges().count(), 0);
                assert!(all_flows(&network).iter().all(|&f| f == 0));
            }

            assert_eq!(<$network>::new(0).unwrap_err(), FlowError::InvalidSize { n: 0 });
        }
    };
    ($network:ident: CapacityEditing) => {
        #[test]
        fn capacity_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [2 as NumNodes, 10, 20] {
                for m in [n, n * 3, n * 10] {
                    let edges = random_edges(rng, n, m);

                    let mut network = <$network>::new(n).unwrap();
                    let mut reference = vec![vec![0 as Capacity; n as usize]; n as usize];
                    for e in &edges {
                        network.set_edge(e.edge.0, e.edge.1, e.capacity).unwrap();
                        reference[e.edge.0 as usize][e.edge.1 as usize] = e.capacity;
                    }

                    let expected = (0..n)
                        .cartesian_product(0..n)
                        .filter(|&(u, v)| reference[u as usize][v as usize] > 0)
                        .map(|(u, v)| CapacitatedEdge::new(u, v, reference[u as usize][v as usize]))
                        .collect_vec();

                    assert_eq!(network.number_of_edges() as usize, expected.len());
                    assert_eq!(network.edges().sorted().collect_vec(), expected);
                    for u in 0..n {
                        for v in 0..n {
                            assert_eq!(network.capacity_of(u, v), reference[u as usize][v as usize]);
                            assert_eq!(network.flow_of(u, v), 0);
                        }
                    }

                    // later duplicates overwrite earlier ones
                    let from_edges = <$network>::from_edges(n, edges.iter()).unwrap();
                    assert_eq!(from_edges.edges().sorted().collect_vec(), expected);

                    for (u, v, c) in [(0, 0, 1), (0, n, 1), (n, 0, 1), (0, 1, -1)] {
                        assert_eq!(
                            network.set_edge(u, v, c),
                            Err(FlowError::InvalidEdge { u, v, capacity: c })
                        );
                    }
                    assert_eq!(network.edges().sorted().collect_vec(), expected);
                }
            }
        }
    };
    ($network:ident: ResidualNetwork) => {
        #[test]
        fn residual_network() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [3 as NumNodes, 8, 15] {
                for _ in 0..20 {
                    let mut network = <$network>::from_edges(n, random_edges(rng, n, n * 4)).unwrap();

                    for _ in 0..10 {
                        for u in network.vertices_range() {
                            let expected = network
                                .vertices_range()
                                .filter(|&v| network.residual_capacity(u, v) > 0)
                                .collect_vec();
                            assert_eq!(network.residual_neighbors_of(u).sorted().collect_vec(), expected);
                        }

                        let len = rng.random_range(2..=n.min(4) as usize);
                        let path = rand::seq::index::sample(rng, n as usize, len)
                            .into_iter()
                            .map(|u| u as Node)
                            .collect_vec();
                        let bottleneck = path
                            .iter()
                            .tuple_windows()
                            .map(|(&u, &v)| network.residual_capacity(u, v))
                            .min()
                            .unwrap();

                        let before = all_flows(&network);
                        assert_eq!(
                            network.push_flow(&path, bottleneck + 1),
                            Err(path
                                .iter()
                                .tuple_windows()
                                .find(|&(&u, &v)| network.residual_capacity(u, v) == bottleneck)
                                .map(|(&u, &v)| FlowError::CapacityExceeded {
                                    u,
                                    v,
                                    amount: bottleneck + 1,
                                    residual: bottleneck
                                })
                                .unwrap())
                        );
                        assert_eq!(all_flows(&network), before);

                        assert_eq!(
                            network.push_flow(&path, -1),
                            Err(FlowError::InvalidAmount { amount: -1 })
                        );

                        network.push_flow(&path, bottleneck).unwrap();
                        assert_antisymmetric(&network);
                        for (&u, &v) in path.iter().tuple_windows() {
                            assert_eq!(network.flow_of(u, v), before[(u * n + v) as usize] + bottleneck);
                        }
                    }

                    assert_eq!(network.push_flow(&[0, n], 0), Err(FlowError::InvalidPair { u: 0, v: n }));

                    network.reset_flow();
                    assert!(all_flows(&network).iter().all(|&f| f == 0));
                    assert_eq!(network.total_flow_out_of(0), 0);
                }
            }
        }

        #[test]
        fn push_flow_rollback_on_revisiting_paths() {
            let mut network = <$network>::from_edges(4, [(0, 1, 2), (1, 2, 2), (2, 0, 2), (2, 3, 1)]).unwrap();
            network.push_flow(&[0, 1, 2], 1).unwrap();
            let before = all_flows(&network);

            // the last pair fails after the cycle already used up (0, 1)
            assert_eq!(
                network.push_flow(&[0, 1, 2, 0, 1], 1),
                Err(FlowError::CapacityExceeded { u: 0, v: 1, amount: 1, residual: 0 })
            );
            assert_eq!(all_flows(&network), before);

            // a loop at the end undoes the whole path
            assert_eq!(
                network.push_flow(&[0, 1, 0, 1, 2, 3, 3], 1),
                Err(FlowError::InvalidPair { u: 3, v: 3 })
            );
            assert_eq!(all_flows(&network), before);

            network.push_flow(&[0, 1, 0, 1], 1).unwrap();
            assert_eq!(network.flow_of(0, 1), 2);
            assert_eq!(network.flow_of(1, 2), 1);
            assert_antisymmetric(&network);
        }
    };
    ($network:ident: MaxFlow) => {
        #[test]
        fn max_flow() {
            let rng = &mut Pcg64Mcg::seed_from_u64(7);

            for n in [2 as NumNodes, 4, 6, 9] {
                for _ in 0..30 {
                    let mut network = <$network>::from_edges(n, random_edges(rng, n, n * 3)).unwrap();
                    let expected = brute_force_min_cut(&network, 0, n - 1);
                    let m = network.number_of_edges() as usize;

                    let mut ek = network.edmonds_karp(0, n - 1).unwrap();
                    let mut total = 0;
                    for augmentation in ek.by_ref() {
                        let augmentation = augmentation.unwrap();
                        assert!(augmentation.amount > 0);
                        assert_eq!(augmentation.path.first(), Some(&0));
                        assert_eq!(augmentation.path.last(), Some(&(n - 1)));
                        assert_antisymmetric(ek.network());
                        total += augmentation.amount;
                    }
                    assert!(ek.num_augmentations() <= (n as usize) * m.max(1));
                    assert_eq!(ek.total_flow(), total);

                    let result = ek.compute_max_flow().unwrap();
                    let cut = ek.min_cut();
                    assert_eq!(result.total_flow(), expected);
                    assert_eq!(cut.capacity(), expected);
                    assert!(cut.contains(0) && !cut.contains(n - 1));

                    for e in result.edge_flows() {
                        assert!(0 <= e.flow && e.flow <= e.capacity);
                    }

                    for v in 1..n - 1 {
                        let outgoing: Flow = result.edge_flows().iter().filter(|e| e.edge.0 == v).map(|e| e.flow).sum();
                        let incoming: Flow = result.edge_flows().iter().filter(|e| e.edge.1 == v).map(|e| e.flow).sum();
                        assert_eq!(incoming, outgoing);
                        assert_eq!(network.total_flow_out_of(v), 0);
                    }

                    assert_eq!(network.total_flow_out_of(0), expected);
                    assert_eq!(network.total_flow_out_of(n - 1), -expected);
                }
            }
        }
    };
}

pub(crate) use test_flow_network;

#[cfg(test)]
use crate::{ops::*, *};

/// Minimum capacity over all `(s, t)`-cuts by enumerating every source side.
/// Only feasible for small networks.
#[cfg(test)]
pub(crate) fn brute_force_min_cut<N>(network: &N, s: Node, t: Node) -> Capacity
where
    N: ResidualNetwork,
{
    let n = network.number_of_nodes();
    assert!(n <= 16);

    (0u32..1 << n)
        .filter(|side| side & (1 << s) != 0 && side & (1 << t) == 0)
        .map(|side| {
            network
                .edges()
                .filter(|e| side & (1 << e.edge.0) != 0 && side & (1 << e.edge.1) == 0)
                .map(|e| e.capacity)
                .sum::<Capacity>()
        })
        .min()
        .unwrap_or(0)
}
