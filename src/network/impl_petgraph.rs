use petgraph::graph::{NodeIndex, UnGraph};

use super::{Element, Network};

/// Undirected petgraph graph whose node `e - 1` carries the element `e` as weight.
pub type PetNetwork = UnGraph<Element, ()>;

impl Network {
    /// Convert into a [PetNetwork], e.g., to run petgraph's algorithms on it.
    pub fn to_petgraph(&self) -> PetNetwork {
        let mut graph =
            PetNetwork::with_capacity(self.len(), self.number_of_connections());
        for element in 1..=self.number_of_elements() {
            graph.add_node(element);
        }
        for (a, b) in self.connections() {
            graph.add_edge(index(a), index(b), ());
        }
        graph
    }
}

#[inline]
fn index(element: Element) -> NodeIndex {
    NodeIndex::new((element - 1) as usize)
}

impl From<&Network> for PetNetwork {
    fn from(network: &Network) -> Self {
        network.to_petgraph()
    }
}

#[cfg(test)]
mod tests {
    use itertools::iproduct;
    use petgraph::algo;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::test_utils::*;

    #[test]
    fn conversion() {
        let network = network!(4; (2, 1), (3, 4), (3, 3),);
        let graph = PetNetwork::from(&network);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.node_weight(index(3)), Some(&3));
        assert!(graph.contains_edge(index(1), index(2)));
        assert!(graph.contains_edge(index(4), index(3)));
        assert!(graph.contains_edge(index(3), index(3)));
        assert!(!graph.contains_edge(index(1), index(3)));
    }

    #[test]
    fn agrees_with_petgraph() {
        let rng = &mut Pcg64::seed_from_u64(7);
        let sizes = [(1, 0), (2, 1), (12, 6), (25, 20), (40, 35), (40, 120)];
        for (n, connections) in sizes {
            let network = random_network(n, connections, rng);
            let graph = network.to_petgraph();
            assert_eq!(
                network.number_of_components(),
                algo::connected_components(&graph)
            );
            for (a, b) in iproduct!(1..=n, 1..=n) {
                assert_eq!(
                    network.query(a, b),
                    Ok(algo::has_path_connecting(&graph, index(a), index(b), None)),
                    "{a} -> {b} in {network:?}"
                );
            }
        }
    }
}
