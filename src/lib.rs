//! Graph analysis core: parse a textual edge list, then run shortest paths,
//! greedy vertex and edge colouring, and degree analysis over it.
//!
//! Every operation is synchronous and works on a [`Graph`] value passed in
//! by the caller; results are fresh values that hold no reference back into
//! the graph.

pub mod coloring;
pub mod degree;
pub mod error;
pub mod graph;
pub mod render;
pub mod report;
pub mod seen;
pub mod shortest_path;

pub use coloring::{
    Color, ColoringConfig, ColoringOutcome, EdgeColoring, Palette, PaletteGrowth, VertexColoring,
    color_edges, color_vertices,
};
pub use degree::{DegreeEntry, DegreeReport, analyze};
pub use error::{GraphError, Result};
pub use graph::{Edge, EdgeIndex, Graph, GraphBuilder, GraphMode, VertexId};
pub use render::RenderPayload;
pub use shortest_path::{PathOutcome, ShortestPath, ShortestPathEngine, shortest_path};
