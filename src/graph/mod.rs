//! A module for representing user-specified weighted graphs.
//!
//! A [`Graph`] owns its vertex names and its edge list. Everything computed
//! from it (adjacency, distances, colourings, degrees) is a separate value
//! and is rebuilt rather than patched when the input changes.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::seen::Seen;

pub mod adjacency;
pub mod builder;
pub mod random;

pub use self::adjacency::AdjacencyIndex;
pub use self::builder::GraphBuilder;

pub type VertexId = usize;
pub type EdgeIndex = usize;

/// Horizontal offset step applied to each member of a group of parallel edges.
pub const CURVATURE_STEP: f64 = 0.5;

/// Whether edges are traversed only from source to target or both ways.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphMode {
    Directed,
    Undirected,
}

impl GraphMode {
    pub fn is_directed(self) -> bool {
        self == GraphMode::Directed
    }
}

impl FromStr for GraphMode {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "directed" => Ok(GraphMode::Directed),
            "undirected" => Ok(GraphMode::Undirected),
            other => Err(GraphError::UnknownMode {
                mode: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for GraphMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphMode::Directed => write!(f, "directed"),
            GraphMode::Undirected => write!(f, "undirected"),
        }
    }
}

/// A stored edge. `weight` is `NaN` when the weight field did not parse.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
    pub weight: f64,
    pub index: EdgeIndex,
}

impl Edge {
    /// Returns the endpoint opposite to `vertex`, if `vertex` is an endpoint at all.
    pub fn other(&self, vertex: VertexId) -> Option<VertexId> {
        if self.source == vertex {
            Some(self.target)
        } else if self.target == vertex {
            Some(self.source)
        } else {
            None
        }
    }

    pub fn touches(&self, vertex: VertexId) -> bool {
        self.source == vertex || self.target == vertex
    }

    /// Two edges conflict for colouring when they share an endpoint in any role.
    pub fn shares_endpoint(&self, other: &Edge) -> bool {
        self.touches(other.source) || self.touches(other.target)
    }
}

/// A graph over named vertices. In undirected mode an edge is still stored
/// once; symmetric traversal is a property of [`AdjacencyIndex`].
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    mode: GraphMode,
    vertices: Vec<String>,
    edges: Vec<Edge>,
    ids: HashMap<String, VertexId>,
}

impl Graph {
    /// Creates a new empty graph.
    pub fn new(mode: GraphMode) -> Self {
        Self {
            mode,
            vertices: Vec::new(),
            edges: Vec::new(),
            ids: HashMap::new(),
        }
    }

    /// Adds a named vertex. A duplicate name collapses onto the existing vertex.
    pub(crate) fn add_vertex(&mut self, name: &str) -> Seen<VertexId> {
        if let Some(&id) = self.ids.get(name) {
            return Seen::Old(id);
        }

        let id = self.vertices.len();
        self.vertices.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        Seen::New(id)
    }

    /// Appends an edge between two existing vertices and returns its index.
    ///
    /// # Panics
    ///
    /// Panics if `source` or `target` are out of bounds.
    pub(crate) fn add_edge(&mut self, source: VertexId, target: VertexId, weight: f64) -> EdgeIndex {
        assert!(source < self.vertices.len() && target < self.vertices.len());
        let index = self.edges.len();
        self.edges.push(Edge {
            source,
            target,
            weight,
            index,
        });
        index
    }

    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, index: EdgeIndex) -> Option<&Edge> {
        self.edges.get(index)
    }

    /// Name of the vertex with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds. Ids handed out by this graph are
    /// always valid.
    pub fn vertex_name(&self, id: VertexId) -> &str {
        &self.vertices[id]
    }

    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.ids.get(name).copied()
    }

    /// Resolves a vertex name, failing with [`GraphError::UnknownVertex`].
    pub fn require_vertex(&self, name: &str) -> Result<VertexId, GraphError> {
        self.vertex_id(name).ok_or_else(|| GraphError::UnknownVertex {
            vertex: name.to_string(),
        })
    }

    /// Edges that lead from `from` to `to`. Undirected graphs also accept
    /// edges stored in the opposite orientation.
    pub fn edges_between(&self, from: VertexId, to: VertexId) -> impl Iterator<Item = &Edge> {
        let undirected = !self.mode.is_directed();
        self.edges.iter().filter(move |edge| {
            (edge.source == from && edge.target == to)
                || (undirected && edge.source == to && edge.target == from)
        })
    }

    /// Curvature offset used to draw an edge apart from its parallel twins.
    ///
    /// An edge with at least one parallel or anti-parallel twin bends by
    /// `CURVATURE_STEP * index`; a lone edge is straight.
    pub fn curvature(&self, index: EdgeIndex) -> f64 {
        let Some(current) = self.edges.get(index) else {
            return 0.0;
        };

        let parallel = self
            .edges
            .iter()
            .filter(|edge| {
                (edge.source == current.source && edge.target == current.target)
                    || (edge.source == current.target && edge.target == current.source)
            })
            .count();

        if parallel > 1 {
            CURVATURE_STEP * index as f64
        } else {
            0.0
        }
    }

    /// Returns a string in DOT format representing the graph.
    pub fn dot(&self) -> String {
        let (keyword, arrow) = match self.mode {
            GraphMode::Directed => ("digraph", "->"),
            GraphMode::Undirected => ("graph", "--"),
        };

        let mut dot = format!("{keyword} G {{\n");
        for name in &self.vertices {
            dot.push_str(&format!("    \"{name}\";\n"));
        }
        for edge in &self.edges {
            let source = self.vertex_name(edge.source);
            let target = self.vertex_name(edge.target);
            if edge.weight.is_nan() {
                dot.push_str(&format!("    \"{source}\" {arrow} \"{target}\";\n"));
            } else {
                dot.push_str(&format!(
                    "    \"{source}\" {arrow} \"{target}\" [label=\"{}\"];\n",
                    edge.weight
                ));
            }
        }
        dot.push('}');
        dot
    }
}
