use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "digraph", version, about = "Weighted directed graphs and their strong components")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Print progress diagnostics to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Weight for every loaded edge (overrides `graph.default_weight`)
    #[arg(long, global = true, value_name = "W")]
    pub weight: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the edge list, one `src --> dst weight = w` line per edge
    Edges {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Print the edges of the inverted graph instead
        #[arg(long)]
        inverted: bool,
    },
    /// Print vertex and edge counts and the busiest vertices
    Stats {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Print the strongly connected components
    Components {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
}

/// Settings shared by every subcommand, after merging flags with config.
#[derive(Debug, Clone, Copy)]
pub struct GlobalArgs {
    pub verbose: bool,
    pub weight: Option<f64>,
}

impl Cli {
    #[must_use]
    pub fn globals(&self) -> GlobalArgs {
        GlobalArgs {
            verbose: self.verbose,
            weight: self.weight,
        }
    }
}
