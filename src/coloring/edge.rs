//! Greedy edge colouring in input order.

use std::collections::{BTreeMap, HashSet};

use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, warn};

use crate::graph::{AdjacencyIndex, EdgeIndex, Graph};

use super::{Color, ColoringConfig, ColoringOutcome, first_free};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeColoring {
    pub colors: BTreeMap<EdgeIndex, Color>,
    /// Distinct colours used, an upper bound on the chromatic index.
    pub colors_used: usize,
    /// Largest number of edge ends at one vertex (a self-loop counts twice).
    pub max_degree: usize,
}

impl EdgeColoring {
    pub fn color_of(&self, edge: EdgeIndex) -> Option<&Color> {
        self.colors.get(&edge)
    }

    /// Whether the colouring stays within Vizing's bound of `Δ + 1` colours.
    pub fn within_vizing_bound(&self) -> bool {
        self.colors_used <= self.max_degree + 1
    }
}

/// Colours edges so that no two edges sharing an endpoint share a colour.
///
/// Edges are visited in input order; each one avoids the colours of the
/// already-coloured edges incident to either of its endpoints.
pub fn color_edges(graph: &Graph, config: &ColoringConfig) -> ColoringOutcome<EdgeColoring, EdgeIndex> {
    let incidence = AdjacencyIndex::undirected(graph);
    let mut palette = config.palette.clone();
    let mut assigned: Vec<Option<usize>> = vec![None; graph.edge_count()];

    for edge in graph.edges() {
        let forbidden: HashSet<usize> = [edge.source, edge.target]
            .iter()
            .flat_map(|&vertex| incidence.neighbors(vertex))
            .filter_map(|incident| assigned[incident.edge])
            .collect();

        match first_free(&mut palette, &forbidden, config.growth) {
            Some(color) => assigned[edge.index] = Some(color),
            None => {
                warn!(
                    edge = edge.index,
                    palette_size = palette.len(),
                    "palette exhausted while colouring edges"
                );
                return ColoringOutcome::PaletteExhausted {
                    element: edge.index,
                    palette_size: palette.len(),
                };
            }
        }
    }

    let colors: BTreeMap<EdgeIndex, Color> = assigned
        .iter()
        .enumerate()
        .filter_map(|(index, color)| Some((index, palette.get((*color)?)?.clone())))
        .collect();
    let colors_used = assigned.iter().flatten().unique().count();
    let max_degree = (0..graph.vertex_count())
        .map(|vertex| incidence.list_len(vertex))
        .max()
        .unwrap_or(0);

    debug!(edges = graph.edge_count(), colors_used, max_degree, "edges coloured");
    ColoringOutcome::Colored(EdgeColoring {
        colors,
        colors_used,
        max_degree,
    })
}
