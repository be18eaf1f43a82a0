use std::ops::RangeInclusive;

use super::*;
use crate::utils::*;

/// Capacitated `G(n,p)` networks contain every ordered pair `(u, v)` with `u != v` as an edge with
/// probability `p` independent from each other. Every edge receives a capacity drawn uniformly at
/// random from a range.
///
/// As `(u, v)` and `(v, u)` are drawn independently, anti-parallel edges occur naturally.
#[derive(Debug, Clone)]
pub struct CapacitatedGnp {
    n: NumNodes,
    p: Option<f64>,
    capacities: RangeInclusive<Capacity>,
}

impl Default for CapacitatedGnp {
    fn default() -> Self {
        Self {
            n: 0,
            p: None,
            capacities: 1..=1,
        }
    }
}

impl CapacitatedGnp {
    /// Creates a new empty generator with unit capacities
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p`
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probability());
        self.p = Some(prob);
        self
    }

    /// Updates the range capacities are drawn from.
    /// ** Panics if the range is empty or contains negative values **
    pub fn capacities(mut self, capacities: RangeInclusive<Capacity>) -> Self {
        assert!(!capacities.is_empty() && *capacities.start() >= 0);
        self.capacities = capacities;
        self
    }
}

impl NumNodesGen for CapacitatedGnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl NetworkGenerator for CapacitatedGnp {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = CapacitatedEdge>
    where
        R: Rng,
    {
        let Some(p) = self.p else {
            panic!("Probability of CapacitatedGnp was not set!");
        };

        let n = self.n;
        let capacities = self.capacities.clone();

        (0..n)
            .flat_map(move |u| (0..n).map(move |v| Edge(u, v)))
            .filter(|e| !e.is_loop())
            .filter_map(move |edge| {
                if rng.random_bool(p) {
                    Some(CapacitatedEdge {
                        edge,
                        capacity: rng.random_range(capacities.clone()),
                    })
                } else {
                    None
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        let generator = CapacitatedGnp::new().nodes(10).prob(0.0);
        assert_eq!(generator.stream(rng).count(), 0);

        let network: FlowArray = CapacitatedGnp::new()
            .nodes(10)
            .prob(1.0)
            .capacities(4..=4)
            .build(rng)
            .unwrap();
        assert_eq!(network.number_of_edges(), 90);
        assert!(network.edges().all(|e| e.capacity == 4 && !e.edge.is_loop()));
    }

    #[test]
    fn density_and_capacities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);
        let n = 100;
        let edges = CapacitatedGnp::new()
            .nodes(n)
            .prob(0.1)
            .capacities(3..=9)
            .generate(rng);

        let pairs = (n * (n - 1)) as f64;
        assert!((edges.len() as f64 - 0.1 * pairs).abs() < 0.02 * pairs);
        assert!(edges.iter().all(|e| (3..=9).contains(&e.capacity)));
        assert!(edges.iter().map(|e| e.edge).all_unique());

        let seen = edges.iter().map(|e| e.capacity).unique().count();
        assert_eq!(seen, 7);
    }

    #[test]
    fn random_network() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let network = FlowMatrix::gnp(rng, 20, 0.5, 1..=100).unwrap();
        assert_eq!(network.number_of_nodes(), 20);
        assert!(network.number_of_edges() > 0);

        assert!(FlowMatrix::gnp(rng, 0, 0.5, 1..=100).is_err());
    }

    #[test]
    #[should_panic]
    fn invalid_probability() {
        let _ = CapacitatedGnp::new().prob(1.5);
    }
}
