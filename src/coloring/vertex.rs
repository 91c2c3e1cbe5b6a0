//! Welsh–Powell style vertex colouring.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};

use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, warn};

use crate::graph::{AdjacencyIndex, Graph, VertexId};

use super::{Color, ColoringConfig, ColoringOutcome, first_free};

/// Colour per vertex name, plus the order in which vertices were coloured.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VertexColoring {
    pub colors: BTreeMap<String, Color>,
    pub order: Vec<String>,
    /// Distinct colours used, an upper bound on the chromatic number.
    pub colors_used: usize,
}

impl VertexColoring {
    pub fn color_of(&self, vertex: &str) -> Option<&Color> {
        self.colors.get(vertex)
    }
}

/// Vertices by descending neighbour-list length; equal lengths keep input order.
pub fn coloring_order(adjacency: &AdjacencyIndex) -> Vec<VertexId> {
    (0..adjacency.num_vertices())
        .sorted_by_key(|&vertex| Reverse(adjacency.list_len(vertex)))
        .collect()
}

/// Colours vertices so that no two vertices joined by an edge share a colour.
///
/// Direction is ignored: every edge adds each endpoint to the other's
/// neighbour list, once per edge.
pub fn color_vertices(graph: &Graph, config: &ColoringConfig) -> ColoringOutcome<VertexColoring, String> {
    let adjacency = AdjacencyIndex::undirected(graph);
    let order = coloring_order(&adjacency);
    let mut palette = config.palette.clone();
    let mut assigned: Vec<Option<usize>> = vec![None; graph.vertex_count()];

    for &vertex in &order {
        let forbidden: HashSet<usize> = adjacency
            .neighbors(vertex)
            .iter()
            .filter_map(|neighbor| assigned[neighbor.vertex])
            .collect();

        match first_free(&mut palette, &forbidden, config.growth) {
            Some(color) => assigned[vertex] = Some(color),
            None => {
                warn!(
                    vertex = graph.vertex_name(vertex),
                    palette_size = palette.len(),
                    "palette exhausted while colouring vertices"
                );
                return ColoringOutcome::PaletteExhausted {
                    element: graph.vertex_name(vertex).to_string(),
                    palette_size: palette.len(),
                };
            }
        }
    }

    let colors: BTreeMap<String, Color> = assigned
        .iter()
        .enumerate()
        .filter_map(|(vertex, color)| {
            let color = palette.get((*color)?)?.clone();
            Some((graph.vertex_name(vertex).to_string(), color))
        })
        .collect();
    let colors_used = assigned.iter().flatten().unique().count();

    debug!(vertices = graph.vertex_count(), colors_used, "vertices coloured");
    ColoringOutcome::Colored(VertexColoring {
        colors,
        order: order
            .iter()
            .map(|&vertex| graph.vertex_name(vertex).to_string())
            .collect(),
        colors_used,
    })
}
