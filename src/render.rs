//! The payload handed to the drawing layer.
//!
//! Layout, SVG output and interaction live outside this crate. They receive
//! one [`RenderPayload`] per request, usually as JSON.

use serde::Serialize;

use crate::coloring::{Color, EdgeColoring, VertexColoring};
use crate::degree::{self, DegreeReport};
use crate::error::Result;
use crate::graph::{EdgeIndex, Graph, GraphMode};
use crate::shortest_path::PathOutcome;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderVertex {
    pub id: String,
    pub color: Option<Color>,
    pub on_path: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderEdge {
    pub index: EdgeIndex,
    pub source: String,
    pub target: String,
    /// `None` for an unlabeled edge.
    pub weight: Option<f64>,
    pub curvature: f64,
    pub color: Option<Color>,
    pub on_path: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderPayload {
    pub mode: GraphMode,
    pub vertices: Vec<RenderVertex>,
    pub edges: Vec<RenderEdge>,
    pub path: Option<PathOutcome>,
    pub colors_used: Option<usize>,
    pub degrees: DegreeReport,
}

impl RenderPayload {
    /// A plain drawing of the graph: no path, no colours.
    pub fn new(graph: &Graph) -> Self {
        let vertices = graph
            .vertices()
            .iter()
            .map(|name| RenderVertex {
                id: name.clone(),
                color: None,
                on_path: false,
            })
            .collect();

        let edges = graph
            .edges()
            .iter()
            .map(|edge| RenderEdge {
                index: edge.index,
                source: graph.vertex_name(edge.source).to_string(),
                target: graph.vertex_name(edge.target).to_string(),
                weight: (!edge.weight.is_nan()).then_some(edge.weight),
                curvature: graph.curvature(edge.index),
                color: None,
                on_path: false,
            })
            .collect();

        Self {
            mode: graph.mode(),
            vertices,
            edges,
            path: None,
            colors_used: None,
            degrees: degree::analyze(graph),
        }
    }

    /// Marks the vertices and edges of a found path.
    pub fn with_path(mut self, outcome: PathOutcome) -> Self {
        for vertex in &mut self.vertices {
            vertex.on_path = outcome.path().contains(&vertex.id);
        }
        for edge in &mut self.edges {
            edge.on_path = outcome.edges().contains(&edge.index);
        }
        self.path = Some(outcome);
        self
    }

    pub fn with_vertex_coloring(mut self, coloring: &VertexColoring) -> Self {
        for vertex in &mut self.vertices {
            vertex.color = coloring.color_of(&vertex.id).cloned();
        }
        self.colors_used = Some(coloring.colors_used);
        self
    }

    pub fn with_edge_coloring(mut self, coloring: &EdgeColoring) -> Self {
        for edge in &mut self.edges {
            edge.color = coloring.color_of(edge.index).cloned();
        }
        self.colors_used = Some(coloring.colors_used);
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
