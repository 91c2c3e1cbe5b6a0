use rand::Rng;

use super::{Graph, GraphMode, VertexId};

/// Shape of the graphs produced by [`random_graph`].
#[derive(Clone, Debug)]
pub struct RandomGraphConfig {
    pub mode: GraphMode,
    pub vertices: usize,
    /// Probability that any ordered pair of distinct vertices gets an edge.
    pub edge_probability: f64,
    /// Weights are integers drawn from `0..=max_weight`.
    pub max_weight: u32,
    /// Probability of adding an extra edge parallel to one just generated.
    pub parallel_probability: f64,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            mode: GraphMode::Undirected,
            vertices: 6,
            edge_probability: 0.4,
            max_weight: 9,
            parallel_probability: 0.1,
        }
    }
}

/// Generates a graph with vertices named `v0`, `v1`, ... and non-negative weights.
pub fn random_graph(config: &RandomGraphConfig, rng: &mut impl Rng) -> Graph {
    let mut graph = Graph::new(config.mode);

    let ids: Vec<VertexId> = (0..config.vertices)
        .map(|i| graph.add_vertex(&format!("v{i}")).any())
        .collect();

    for &source in &ids {
        for &target in &ids {
            if source == target {
                continue;
            }
            // Undirected graphs only consider each unordered pair once
            if !config.mode.is_directed() && target < source {
                continue;
            }
            if !rng.gen_bool(config.edge_probability) {
                continue;
            }

            graph.add_edge(source, target, random_weight(config, rng));
            if rng.gen_bool(config.parallel_probability) {
                graph.add_edge(source, target, random_weight(config, rng));
            }
        }
    }

    graph
}

fn random_weight(config: &RandomGraphConfig, rng: &mut impl Rng) -> f64 {
    f64::from(rng.gen_range(0..=config.max_weight))
}
