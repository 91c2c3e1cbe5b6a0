//! Weighted adjacency derived from a [`Graph`].

use itertools::Itertools;

use super::{EdgeIndex, Graph, VertexId};

/// One outgoing step: the reached vertex, the weight paid and the edge used.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor {
    pub vertex: VertexId,
    pub weight: f64,
    pub edge: EdgeIndex,
}

/// Outgoing neighbour lists per vertex, in edge input order.
///
/// Holds no reference to the graph it was built from; rebuild it whenever
/// the graph changes.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyIndex {
    adjacency: Vec<Vec<Neighbor>>,
}

impl AdjacencyIndex {
    /// Traversal adjacency: directed graphs follow edge direction, undirected
    /// graphs get both orientations of every edge.
    pub fn build(graph: &Graph) -> Self {
        Self::with_symmetry(graph, !graph.mode().is_directed())
    }

    /// Conflict adjacency used by colouring: always symmetric, whatever the mode.
    pub fn undirected(graph: &Graph) -> Self {
        Self::with_symmetry(graph, true)
    }

    fn with_symmetry(graph: &Graph, symmetric: bool) -> Self {
        let mut adjacency = vec![Vec::new(); graph.vertex_count()];

        for edge in graph.edges() {
            adjacency[edge.source].push(Neighbor {
                vertex: edge.target,
                weight: edge.weight,
                edge: edge.index,
            });
            if symmetric {
                adjacency[edge.target].push(Neighbor {
                    vertex: edge.source,
                    weight: edge.weight,
                    edge: edge.index,
                });
            }
        }

        Self { adjacency }
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns a slice of out-neighbours for a given vertex.
    pub fn neighbors(&self, vertex: VertexId) -> &[Neighbor] {
        self.adjacency.get(vertex).map_or(&[], |v| v.as_slice())
    }

    /// Length of the neighbour list, counting multi-edges and both loop ends.
    pub fn list_len(&self, vertex: VertexId) -> usize {
        self.neighbors(vertex).len()
    }

    /// Neighbour vertices without repetition, in first-seen order.
    pub fn distinct_neighbors(&self, vertex: VertexId) -> Vec<VertexId> {
        self.neighbors(vertex)
            .iter()
            .map(|n| n.vertex)
            .unique()
            .collect()
    }
}
