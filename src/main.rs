use anyhow::Context;
use graphlens::report::{self, PrettyFormatter};
use graphlens::{
    ColoringConfig, ColoringOutcome, GraphBuilder, GraphMode, RenderPayload, ShortestPathEngine,
    analyze, color_edges, color_vertices,
};
use tracing_subscriber::EnvFilter;

const VERTICES: &str = "A, B, C, D, E";
const EDGES: &str = "A-B-1, B-C-2, A-C-4, C-D-1, D-E-3, B-E-7, \"A\"-\"B\"-5";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let graph = GraphBuilder::from_text(VERTICES, EDGES, GraphMode::Undirected)
        .context("building the sample graph")?;
    let config = ColoringConfig::default();

    println!("{}\n", graph.dot());

    let engine = ShortestPathEngine::new(&graph)?;
    let outcome = engine.query("A", "E")?;
    println!("{}\n", report::path_summary(&outcome));

    println!("Degrees:\n{}\n", report::degree_table(&analyze(&graph), false));

    let mut payload = RenderPayload::new(&graph).with_path(outcome);

    match color_vertices(&graph, &config) {
        ColoringOutcome::Colored(coloring) => {
            println!("Number of colors used: {}", coloring.colors_used);
            println!("{}\n", PrettyFormatter::format(&report::vertex_color_rows(&coloring)));
            payload = payload.with_vertex_coloring(&coloring);
        }
        ColoringOutcome::PaletteExhausted { element, palette_size } => {
            println!("Palette of {palette_size} colours exhausted at vertex {element}\n");
        }
    }

    match color_edges(&graph, &config) {
        ColoringOutcome::Colored(coloring) => {
            println!(
                "Number of edge colors used: {} (max degree {}, within Δ+1: {})",
                coloring.colors_used,
                coloring.max_degree,
                coloring.within_vizing_bound()
            );
            println!("{}\n", PrettyFormatter::format(&report::edge_color_rows(&graph, &coloring)));
            payload = payload.with_edge_coloring(&coloring);
        }
        ColoringOutcome::PaletteExhausted { element, palette_size } => {
            println!("Palette of {palette_size} colours exhausted at edge {element}\n");
        }
    }

    println!("Render payload:\n{}", payload.to_json()?);
    Ok(())
}
