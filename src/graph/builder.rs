//! Parsing of the textual vertex and edge lists into a validated [`Graph`].
//!
//! Vertex lists are comma-separated names, each optionally wrapped in double
//! quotes. Edge lists are comma-separated `source-target-weight` tokens.

use tracing::debug;

use crate::error::{GraphError, Result};

use super::{Graph, GraphMode};

/// Separates items within a list.
pub const LIST_DELIMITER: char = ',';
/// Separates the fields of an edge token.
pub const EDGE_DELIMITER: char = '-';

/// Collects raw vertex and edge specifications and validates them in one go.
///
/// Nothing is built until [`GraphBuilder::build`]; any error aborts the
/// whole graph.
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    mode: GraphMode,
    vertex_specs: Vec<String>,
    edge_specs: Vec<String>,
}

impl GraphBuilder {
    pub fn new(mode: GraphMode) -> Self {
        Self {
            mode,
            vertex_specs: Vec::new(),
            edge_specs: Vec::new(),
        }
    }

    pub fn vertex(mut self, spec: &str) -> Self {
        self.vertex_specs.push(spec.to_string());
        self
    }

    pub fn vertices<I, S>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.vertex_specs
            .extend(specs.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    pub fn edge(mut self, spec: &str) -> Self {
        self.edge_specs.push(spec.to_string());
        self
    }

    pub fn edges<I, S>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.edge_specs
            .extend(specs.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Parses both comma-separated lists and builds the graph.
    pub fn from_text(vertices: &str, edges: &str, mode: GraphMode) -> Result<Graph> {
        Self::new(mode)
            .vertices(split_list(vertices))
            .edges(split_list(edges))
            .build()
    }

    pub fn build(self) -> Result<Graph> {
        let vertex_names: Vec<&str> = self
            .vertex_specs
            .iter()
            .map(|spec| clean_token(spec))
            .filter(|name| !name.is_empty())
            .collect();
        if vertex_names.is_empty() {
            return Err(GraphError::EmptyInput { what: "vertex" });
        }

        let edge_tokens: Vec<&str> = self
            .edge_specs
            .iter()
            .map(|spec| clean_token(spec))
            .filter(|token| !token.is_empty())
            .collect();
        if edge_tokens.is_empty() {
            return Err(GraphError::EmptyInput { what: "edge" });
        }

        let mut graph = Graph::new(self.mode);
        for name in vertex_names {
            if graph.add_vertex(name).is_old() {
                debug!(vertex = name, "duplicate vertex collapsed");
            }
        }

        for token in edge_tokens {
            let (source, target, weight) = parse_edge(token)?;
            let source = graph.require_vertex(source)?;
            let target = graph.require_vertex(target)?;
            graph.add_edge(source, target, weight);
        }

        debug!(
            mode = %graph.mode(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph built"
        );
        Ok(graph)
    }
}

/// Splits a comma-separated list without cleaning the items.
pub fn split_list(text: &str) -> Vec<&str> {
    text.split(LIST_DELIMITER).collect()
}

/// Trims surrounding whitespace, then removes one leading and one trailing
/// double quote if present.
pub fn clean_token(token: &str) -> &str {
    let token = token.trim();
    let token = token.strip_prefix('"').unwrap_or(token);
    token.strip_suffix('"').unwrap_or(token)
}

/// Parses a weight field. Anything that is not a whole float literal becomes
/// `NaN`, including a number with trailing text such as `3x`; shortest-path
/// queries then reject the edge.
pub fn parse_weight(field: &str) -> f64 {
    field.parse::<f64>().unwrap_or(f64::NAN)
}

/// Splits `source-target-weight` into its three cleaned fields.
pub fn parse_edge(token: &str) -> Result<(&str, &str, f64)> {
    let fields: Vec<&str> = token.split(EDGE_DELIMITER).map(clean_token).collect();

    let [source, target, weight] = fields.as_slice() else {
        return Err(GraphError::MalformedEdge {
            token: token.to_string(),
            fields: fields.len(),
        });
    };

    Ok((*source, *target, parse_weight(weight)))
}
