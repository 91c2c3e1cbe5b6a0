use colored::Colorize;
use tabled::Tabled;

use crate::coloring::{Color, EdgeColoring, VertexColoring};
use crate::degree::DegreeReport;
use crate::graph::{Graph, GraphMode};
use crate::shortest_path::{PathOutcome, format_distance};

use super::{CsvFormatter, Formattable, PrettyFormatter};

fn format_neighbors(neighbors: &[String]) -> String {
    neighbors.join(", ")
}

#[derive(Clone, Debug, Tabled)]
pub struct DirectedDegreeRow {
    #[tabled(rename = "Vertex")]
    pub vertex: String,
    #[tabled(rename = "In-Degree")]
    pub in_degree: usize,
    #[tabled(rename = "Out-Degree")]
    pub out_degree: usize,
    #[tabled(rename = "Connected Vertices", display_with = "format_neighbors")]
    pub neighbors: Vec<String>,
}

impl Formattable for DirectedDegreeRow {
    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.vertex.clone(),
            self.in_degree.to_string(),
            self.out_degree.to_string(),
            format_neighbors(&self.neighbors),
        ]
    }

    fn csv_headers() -> Vec<&'static str> {
        vec!["Vertex", "In-Degree", "Out-Degree", "Connected Vertices"]
    }
}

#[derive(Clone, Debug, Tabled)]
pub struct UndirectedDegreeRow {
    #[tabled(rename = "Vertex")]
    pub vertex: String,
    #[tabled(rename = "Degree")]
    pub degree: usize,
    #[tabled(rename = "Connected Vertices", display_with = "format_neighbors")]
    pub neighbors: Vec<String>,
}

impl Formattable for UndirectedDegreeRow {
    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.vertex.clone(),
            self.degree.to_string(),
            format_neighbors(&self.neighbors),
        ]
    }

    fn csv_headers() -> Vec<&'static str> {
        vec!["Vertex", "Degree", "Connected Vertices"]
    }
}

/// Degree table with the columns that suit the graph mode.
pub fn degree_table(report: &DegreeReport, csv: bool) -> String {
    match report.mode {
        GraphMode::Directed => {
            let rows: Vec<_> = report
                .entries
                .iter()
                .map(|entry| DirectedDegreeRow {
                    vertex: entry.vertex.clone(),
                    in_degree: entry.in_degree,
                    out_degree: entry.out_degree,
                    neighbors: entry.neighbors.clone(),
                })
                .collect();
            render(&rows, csv)
        }
        GraphMode::Undirected => {
            let rows: Vec<_> = report
                .entries
                .iter()
                .map(|entry| UndirectedDegreeRow {
                    vertex: entry.vertex.clone(),
                    degree: entry.degree(),
                    neighbors: entry.neighbors.clone(),
                })
                .collect();
            render(&rows, csv)
        }
    }
}

fn render<T: Formattable>(rows: &[T], csv: bool) -> String {
    if csv {
        CsvFormatter::format(rows)
    } else {
        PrettyFormatter::format(rows)
    }
}

#[derive(Clone, Debug, PartialEq, Tabled)]
pub struct ColorRow {
    #[tabled(rename = "Element")]
    pub element: String,
    #[tabled(rename = "Color")]
    pub color: Color,
}

impl Formattable for ColorRow {
    fn to_csv_row(&self) -> Vec<String> {
        vec![self.element.clone(), self.color.to_string()]
    }

    fn csv_headers() -> Vec<&'static str> {
        vec!["Element", "Color"]
    }
}

/// One row per vertex, in the order vertices were coloured.
pub fn vertex_color_rows(coloring: &VertexColoring) -> Vec<ColorRow> {
    coloring
        .order
        .iter()
        .filter_map(|vertex| {
            Some(ColorRow {
                element: vertex.clone(),
                color: coloring.color_of(vertex)?.clone(),
            })
        })
        .collect()
}

/// One row per edge, labelled `source-target` as in the input.
pub fn edge_color_rows(graph: &Graph, coloring: &EdgeColoring) -> Vec<ColorRow> {
    graph
        .edges()
        .iter()
        .filter_map(|edge| {
            Some(ColorRow {
                element: format!(
                    "{}-{}",
                    graph.vertex_name(edge.source),
                    graph.vertex_name(edge.target)
                ),
                color: coloring.color_of(edge.index)?.clone(),
            })
        })
        .collect()
}

/// Human readable shortest path line.
pub fn path_summary(outcome: &PathOutcome) -> String {
    match outcome {
        PathOutcome::Found(found) => format!(
            "Shortest path: {}\nDistance: {}",
            found.path.join(" → ").green().bold(),
            format_distance(found.total_distance)
        ),
        PathOutcome::NoPathFound => "No path found".red().bold().to_string(),
    }
}
