//! Per-vertex degree counts and neighbour sets.

use serde::Serialize;

use crate::graph::{AdjacencyIndex, Graph, GraphMode};

/// Degree data for one vertex.
///
/// `in_degree`/`out_degree` follow the stored edge direction. Undirected
/// graphs report only their sum, [`DegreeEntry::degree`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DegreeEntry {
    pub vertex: String,
    pub in_degree: usize,
    pub out_degree: usize,
    /// Vertices joined to this one in either direction, without repeats, in
    /// the order the edges list them.
    pub neighbors: Vec<String>,
}

impl DegreeEntry {
    pub fn degree(&self) -> usize {
        self.in_degree + self.out_degree
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DegreeReport {
    pub mode: GraphMode,
    /// One entry per vertex, in vertex input order.
    pub entries: Vec<DegreeEntry>,
}

impl DegreeReport {
    pub fn get(&self, vertex: &str) -> Option<&DegreeEntry> {
        self.entries.iter().find(|entry| entry.vertex == vertex)
    }

    pub fn max_degree(&self) -> usize {
        self.entries.iter().map(DegreeEntry::degree).max().unwrap_or(0)
    }
}

pub fn analyze(graph: &Graph) -> DegreeReport {
    let mut in_degree = vec![0; graph.vertex_count()];
    let mut out_degree = vec![0; graph.vertex_count()];

    for edge in graph.edges() {
        out_degree[edge.source] += 1;
        in_degree[edge.target] += 1;
    }

    let adjacency = AdjacencyIndex::undirected(graph);
    let entries = (0..graph.vertex_count())
        .map(|vertex| DegreeEntry {
            vertex: graph.vertex_name(vertex).to_string(),
            in_degree: in_degree[vertex],
            out_degree: out_degree[vertex],
            neighbors: adjacency
                .distinct_neighbors(vertex)
                .into_iter()
                .map(|neighbor| graph.vertex_name(neighbor).to_string())
                .collect(),
        })
        .collect();

    DegreeReport {
        mode: graph.mode(),
        entries,
    }
}
