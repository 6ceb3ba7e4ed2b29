//! Command-line frontend: reports for each edge-list file whether the graph is bipartite.
//!
//! Log output goes to stderr and is controlled through `RUST_LOG` (default `warn`).

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use bipartite::algorithms::BipartiteAlgorithms;
use bipartite::editgraph::EditGraph;
use bipartite::graph::Graph;
use bipartite::io::LoadFromFile;

#[derive(Parser, Debug)]
#[command(name = "bipartite", version, about = "Tests edge-list graphs for bipartiteness")]
struct Args {
    /// Check every connected component instead of only the one containing the start vertex
    #[arg(long, conflicts_with = "seed")]
    all_components: bool,

    /// Start the traversal at this vertex
    #[arg(long, value_name = "VERTEX")]
    seed: Option<String>,

    /// Edge lists, one edge per line (`.txt` or `.txt.gz`)
    #[arg(required = true, value_name = "FILE")]
    files: Vec<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    for file in &args.files {
        let graph:EditGraph<String> = EditGraph::from_file(file)
            .with_context(|| format!("Could not load graph from `{file}`"))?;
        info!(%file, vertices = graph.num_vertices(), edges = graph.num_edges(), "loaded graph");

        let verdict = check(&graph, &args)
            .with_context(|| format!("Could not test graph from `{file}`"))?;

        if verdict {
            println!("{file}: bipartite");
        } else {
            println!("{file}: not bipartite");
        }
    }

    Ok(())
}

fn check(graph:&EditGraph<String>, args:&Args) -> bipartite::Result<bool> {
    if args.all_components {
        return Ok(graph.is_bipartite_all())
    }
    match &args.seed {
        Some(seed) => graph.is_bipartite_from(seed),
        None => graph.is_bipartite()
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
