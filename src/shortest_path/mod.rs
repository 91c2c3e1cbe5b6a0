//! Single-source shortest paths with Dijkstra's algorithm.
//!
//! Weights must be finite and non-negative. The priority queue holds one
//! entry per vertex keyed by `(distance, sequence)`, where `sequence` is the
//! number of the insertion or decrease that last touched the entry. Equal
//! distances therefore pop in the order they were last improved, which fixes
//! the reported path when several shortest paths exist.
//!
//! A path whose length is not representable as a finite `f64` still counts
//! as found; its vertices are reached at distance `+∞`.

use ordered_float::OrderedFloat;
use priority_queue::DoublePriorityQueue;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{GraphError, Result};
use crate::graph::{AdjacencyIndex, EdgeIndex, Graph, VertexId};

pub mod distance;

pub use self::distance::{Distance, format_distance};

/// The step that last improved a vertex's distance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Predecessor {
    pub vertex: VertexId,
    pub edge: EdgeIndex,
}

/// Best known distances from one source, with predecessor pointers.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceTable {
    pub source: VertexId,
    pub distances: Vec<Distance>,
    pub predecessors: Vec<Option<Predecessor>>,
}

impl DistanceTable {
    fn new(source: VertexId, vertices: usize) -> Self {
        let mut distances = vec![distance::INFINITY; vertices];
        distances[source] = distance::ZERO;

        Self {
            source,
            distances,
            predecessors: vec![None; vertices],
        }
    }

    /// Best known distance to `vertex`, or `None` for an id outside the graph.
    pub fn distance(&self, vertex: VertexId) -> Option<Distance> {
        self.distances.get(vertex).copied()
    }

    /// Whether some path from the source to `vertex` has been found, even
    /// one whose length overflowed to `+∞`.
    pub fn is_reached(&self, vertex: VertexId) -> bool {
        vertex == self.source || matches!(self.predecessors.get(vertex), Some(Some(_)))
    }

    /// Follows predecessors from `target` back to the source. Returns the
    /// edges in travel order, or `None` if the chain never reaches the source.
    pub fn edge_chain(&self, target: VertexId) -> Option<Vec<EdgeIndex>> {
        let mut edges = Vec::new();
        let mut current = target;

        while current != self.source {
            let step = (*self.predecessors.get(current)?)?;
            edges.push(step.edge);
            current = step.vertex;
            // A well-formed chain is never longer than the vertex count
            if edges.len() > self.distances.len() {
                return None;
            }
        }

        edges.reverse();
        Some(edges)
    }
}

/// A reconstructed shortest path.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShortestPath {
    pub path: Vec<String>,
    /// Edge indices traversed, one per hop.
    pub edges: Vec<EdgeIndex>,
    pub total_distance: f64,
}

/// Result of a shortest-path query. An unreachable target is an ordinary outcome.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PathOutcome {
    Found(ShortestPath),
    NoPathFound,
}

impl PathOutcome {
    pub fn path(&self) -> &[String] {
        match self {
            PathOutcome::Found(found) => &found.path,
            PathOutcome::NoPathFound => &[],
        }
    }

    pub fn edges(&self) -> &[EdgeIndex] {
        match self {
            PathOutcome::Found(found) => &found.edges,
            PathOutcome::NoPathFound => &[],
        }
    }

    /// Total weight of the path, `+∞` when there is none or when the sum
    /// overflows.
    pub fn total_distance(&self) -> f64 {
        match self {
            PathOutcome::Found(found) => found.total_distance,
            PathOutcome::NoPathFound => f64::INFINITY,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }
}

/// Runs queries over one graph whose weights were validated up front.
///
/// The engine borrows the graph, so it cannot outlive a change to it.
pub struct ShortestPathEngine<'g> {
    graph: &'g Graph,
    adjacency: AdjacencyIndex,
}

impl<'g> ShortestPathEngine<'g> {
    /// Fails with [`GraphError::InvalidWeight`] if any weight is `NaN`,
    /// infinite or negative.
    pub fn new(graph: &'g Graph) -> Result<Self> {
        validate_weights(graph)?;

        Ok(Self {
            graph,
            adjacency: AdjacencyIndex::build(graph),
        })
    }

    /// Distances from `source` to every vertex.
    pub fn distances_from(&self, source: &str) -> Result<DistanceTable> {
        let source = self.graph.require_vertex(source)?;
        Ok(self.run(source, None))
    }

    pub fn query(&self, source: &str, target: &str) -> Result<PathOutcome> {
        let source_id = self.graph.require_vertex(source)?;
        let target_id = self.graph.require_vertex(target)?;

        if source_id == target_id {
            return Ok(PathOutcome::Found(ShortestPath {
                path: vec![source.to_string()],
                edges: Vec::new(),
                total_distance: 0.0,
            }));
        }

        let table = self.run(source_id, Some(target_id));
        let outcome = match table.edge_chain(target_id) {
            Some(edges) => PathOutcome::Found(self.reconstruct(source_id, edges)),
            None => PathOutcome::NoPathFound,
        };

        debug!(
            source,
            target,
            found = outcome.is_found(),
            distance = outcome.total_distance(),
            "shortest path query"
        );
        Ok(outcome)
    }

    fn run(&self, source: VertexId, target: Option<VertexId>) -> DistanceTable {
        let vertices = self.graph.vertex_count();
        let mut table = DistanceTable::new(source, vertices);
        let mut queue = DoublePriorityQueue::with_capacity(vertices);
        let mut sequence: u64 = 0;

        for vertex in 0..vertices {
            queue.push(vertex, (distance::INFINITY, sequence));
            sequence += 1;
        }
        queue.push(source, (distance::ZERO, sequence));
        sequence += 1;

        while let Some((current, (OrderedFloat(distance), _))) = queue.pop_min() {
            // Not reached yet; an overflowing relaxation may still queue it again
            if !table.is_reached(current) {
                continue;
            }
            if Some(current) == target {
                break;
            }

            for neighbor in self.adjacency.neighbors(current) {
                let candidate = OrderedFloat(distance + neighbor.weight);
                // An overflowed sum still reaches a vertex nothing else has
                if candidate < table.distances[neighbor.vertex] || !table.is_reached(neighbor.vertex) {
                    if candidate.0.is_infinite() {
                        debug!(from = current, to = neighbor.vertex, "path length overflowed");
                    }
                    trace!(
                        from = current,
                        to = neighbor.vertex,
                        distance = candidate.0,
                        "relaxed"
                    );
                    table.distances[neighbor.vertex] = candidate;
                    table.predecessors[neighbor.vertex] = Some(Predecessor {
                        vertex: current,
                        edge: neighbor.edge,
                    });
                    queue.push(neighbor.vertex, (candidate, sequence));
                    sequence += 1;
                }
            }
        }

        table
    }

    /// Rebuilds the vertex sequence from the edge chain and sums the
    /// weights straight from the graph.
    fn reconstruct(&self, source: VertexId, edges: Vec<EdgeIndex>) -> ShortestPath {
        let mut path = vec![self.graph.vertex_name(source).to_string()];
        let mut current = source;
        let mut total_distance = 0.0;

        for &index in &edges {
            let edge = &self.graph.edges()[index];
            // Undirected edges may be walked target-to-source
            current = edge.other(current).unwrap_or(edge.target);
            total_distance += edge.weight;
            path.push(self.graph.vertex_name(current).to_string());
        }

        ShortestPath {
            path,
            edges,
            total_distance,
        }
    }
}

/// Shortest path from `source` to `target`.
pub fn shortest_path(graph: &Graph, source: &str, target: &str) -> Result<PathOutcome> {
    ShortestPathEngine::new(graph)?.query(source, target)
}

fn validate_weights(graph: &Graph) -> Result<()> {
    match graph
        .edges()
        .iter()
        .find(|edge| !edge.weight.is_finite() || edge.weight < 0.0)
    {
        Some(edge) => Err(GraphError::InvalidWeight {
            edge: edge.index,
            weight: edge.weight,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::graph::random::{RandomGraphConfig, random_graph};
    use crate::graph::{GraphBuilder, GraphMode};

    fn build(vertices: &str, edges: &str, mode: GraphMode) -> Graph {
        GraphBuilder::from_text(vertices, edges, mode).unwrap()
    }

    #[test]
    fn prefers_cheaper_detour() {
        let graph = build("A,B,C,D", "A-B-1,B-C-2,A-C-4,C-D-1", GraphMode::Undirected);
        let outcome = shortest_path(&graph, "A", "D").unwrap();

        assert_eq!(outcome.path(), &["A", "B", "C", "D"]);
        assert_eq!(outcome.total_distance(), 4.0);
        assert_eq!(outcome.edges(), &[0, 1, 3]);
    }

    #[test]
    fn directed_edge_is_one_way() {
        let graph = build("A,B", "A-B-3", GraphMode::Directed);

        assert_eq!(shortest_path(&graph, "B", "A").unwrap(), PathOutcome::NoPathFound);
        let outcome = shortest_path(&graph, "A", "B").unwrap();
        assert_eq!(outcome.total_distance(), 3.0);
    }

    #[test]
    fn undirected_walks_edges_backwards() {
        let graph = build("A,B,C", "A-B-3,B-C-1", GraphMode::Undirected);
        let outcome = shortest_path(&graph, "C", "A").unwrap();

        assert_eq!(outcome.path(), &["C", "B", "A"]);
        assert_eq!(outcome.total_distance(), 4.0);
    }

    #[test]
    fn no_path_reports_infinity() {
        let graph = build("A,B,C", "A-B-1", GraphMode::Undirected);
        let outcome = shortest_path(&graph, "A", "C").unwrap();

        assert!(!outcome.is_found());
        assert!(outcome.path().is_empty());
        assert_eq!(outcome.total_distance(), f64::INFINITY);
    }

    #[test]
    fn source_equals_target() {
        let graph = build("A,B", "A-B-1", GraphMode::Directed);
        let outcome = shortest_path(&graph, "B", "B").unwrap();

        assert_eq!(outcome.path(), &["B"]);
        assert_eq!(outcome.total_distance(), 0.0);
        assert!(outcome.edges().is_empty());
    }

    #[test]
    fn picks_cheapest_parallel_edge() {
        let graph = build("A,B", "A-B-5,A-B-2,B-A-1", GraphMode::Directed);
        let outcome = shortest_path(&graph, "A", "B").unwrap();

        assert_eq!(outcome.edges(), &[1]);
        assert_eq!(outcome.total_distance(), 2.0);
    }

    #[test]
    fn zero_weights_are_allowed() {
        let graph = build("A,B,C", "A-B-0,B-C-0", GraphMode::Directed);
        assert_eq!(shortest_path(&graph, "A", "C").unwrap().total_distance(), 0.0);
    }

    #[test]
    fn ties_follow_improvement_order() {
        // A->B->D and A->C->D both cost 2. B is improved before C, so it is
        // finalised first and its relaxation of D is the one that sticks.
        let graph = build("A,B,C,D", "A-B-1,A-C-1,B-D-1,C-D-1", GraphMode::Directed);
        let outcome = shortest_path(&graph, "A", "D").unwrap();

        assert_eq!(outcome.path(), &["A", "B", "D"]);
    }

    #[test]
    fn unknown_query_vertices() {
        let graph = build("A,B", "A-B-1", GraphMode::Directed);

        assert_eq!(
            shortest_path(&graph, "A", "Z"),
            Err(GraphError::UnknownVertex {
                vertex: "Z".to_string()
            })
        );
        assert!(matches!(
            shortest_path(&graph, "Y", "A"),
            Err(GraphError::UnknownVertex { .. })
        ));
    }

    #[test]
    fn invalid_weights_are_rejected() {
        let graph = build("A,B,C", "A-B-1,B-C-x", GraphMode::Directed);
        assert!(matches!(
            shortest_path(&graph, "A", "B"),
            Err(GraphError::InvalidWeight { edge: 1, .. })
        ));

        let graph = build("A,B", "A-B-inf", GraphMode::Directed);
        assert!(matches!(
            ShortestPathEngine::new(&graph),
            Err(GraphError::InvalidWeight { edge: 0, .. })
        ));
    }

    #[test]
    fn distances_from_source() {
        let graph = build("A,B,C,D", "A-B-1,B-C-2,A-C-4", GraphMode::Directed);
        let engine = ShortestPathEngine::new(&graph).unwrap();
        let table = engine.distances_from("A").unwrap();

        assert_eq!(table.distance(0), Some(OrderedFloat(0.0)));
        assert_eq!(table.distance(2), Some(OrderedFloat(3.0)));
        assert_eq!(table.distance(3), Some(OrderedFloat(f64::INFINITY)));
        assert_eq!(table.distance(9), None);
        assert!(table.is_reached(2));
        assert!(!table.is_reached(3));
        assert_eq!(table.edge_chain(2), Some(vec![0, 1]));
        assert_eq!(table.edge_chain(3), None);
        assert_eq!(table.edge_chain(9), None);
    }

    #[test]
    fn overflowing_path_is_still_found() {
        let graph = build("A,B,C", "A-B-1e308,B-C-1e308", GraphMode::Directed);
        let outcome = shortest_path(&graph, "A", "C").unwrap();

        assert!(outcome.is_found());
        assert_eq!(outcome.path(), &["A", "B", "C"]);
        assert_eq!(outcome.total_distance(), f64::INFINITY);
    }

    #[test]
    fn vertices_beyond_an_overflow_are_reachable() {
        let graph = build(
            "A,B,C,D,E",
            "A-B-1e308,B-C-1e308,C-D-1,E-A-1",
            GraphMode::Directed,
        );
        let engine = ShortestPathEngine::new(&graph).unwrap();

        assert_eq!(engine.query("A", "D").unwrap().path(), &["A", "B", "C", "D"]);
        assert_eq!(engine.query("A", "E").unwrap(), PathOutcome::NoPathFound);

        let table = engine.distances_from("A").unwrap();
        assert!(table.is_reached(3));
        assert!(!table.is_reached(4));
    }

    #[test]
    fn finite_route_beats_overflowing_one() {
        // B overflows via X first; the finite route through Y must win
        let graph = build(
            "A,X,Y,B",
            "A-X-1e308,X-B-1e308,A-Y-1.5e308,Y-B-1e307",
            GraphMode::Directed,
        );
        let outcome = shortest_path(&graph, "A", "B").unwrap();

        assert_eq!(outcome.path(), &["A", "Y", "B"]);
        assert!(outcome.total_distance().is_finite());
    }

    /// Cheapest simple path by exhaustive search.
    fn brute_force(graph: &Graph, source: VertexId, target: VertexId) -> Option<f64> {
        fn walk(
            adjacency: &AdjacencyIndex,
            current: VertexId,
            target: VertexId,
            visited: &mut Vec<bool>,
            cost: f64,
            best: &mut Option<f64>,
        ) {
            if current == target {
                if best.is_none_or(|b| cost < b) {
                    *best = Some(cost);
                }
                return;
            }
            for neighbor in adjacency.neighbors(current) {
                if !visited[neighbor.vertex] {
                    visited[neighbor.vertex] = true;
                    walk(adjacency, neighbor.vertex, target, visited, cost + neighbor.weight, best);
                    visited[neighbor.vertex] = false;
                }
            }
        }

        let adjacency = AdjacencyIndex::build(graph);
        let mut visited = vec![false; graph.vertex_count()];
        visited[source] = true;
        let mut best = None;
        walk(&adjacency, source, target, &mut visited, 0.0, &mut best);
        best
    }

    #[test]
    fn optimal_against_brute_force() {
        let mut rng = StdRng::seed_from_u64(42);

        for mode in [GraphMode::Directed, GraphMode::Undirected] {
            let config = RandomGraphConfig {
                mode,
                vertices: 6,
                edge_probability: 0.35,
                ..Default::default()
            };

            for _ in 0..40 {
                let graph = random_graph(&config, &mut rng);
                let engine = ShortestPathEngine::new(&graph).unwrap();

                for source in 0..graph.vertex_count() {
                    for target in 0..graph.vertex_count() {
                        let outcome = engine
                            .query(graph.vertex_name(source), graph.vertex_name(target))
                            .unwrap();

                        match brute_force(&graph, source, target) {
                            Some(best) => {
                                assert_eq!(outcome.total_distance(), best);
                                let summed: f64 = outcome
                                    .edges()
                                    .iter()
                                    .map(|&e| graph.edges()[e].weight)
                                    .sum();
                                assert_eq!(summed, outcome.total_distance());
                                assert_eq!(outcome.path().first().map(String::as_str), Some(graph.vertex_name(source)));
                                assert_eq!(outcome.path().last().map(String::as_str), Some(graph.vertex_name(target)));
                            }
                            None => assert_eq!(outcome, PathOutcome::NoPathFound),
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn serializes_outcome() {
        let graph = build("A,B", "A-B-2", GraphMode::Directed);
        let json = serde_json::to_value(shortest_path(&graph, "A", "B").unwrap()).unwrap();

        assert_eq!(json["outcome"], "found");
        assert_eq!(json["total_distance"], 2.0);
        assert_eq!(json["path"][1], "B");
    }
}
