// src/cli/handlers.rs
use crate::cli::args::GlobalArgs;
use crate::config::Config;
use crate::exit::DigraphExit;
use crate::graph::{DirectedGraph, StrongComponents};
use crate::loader;
use crate::reporting::{self, ComponentsReport, GraphStats};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Effective configuration for one command run.
pub struct Session {
    config: Config,
}

impl Session {
    /// Loads `digraph.toml` and applies command-line overrides.
    ///
    /// # Errors
    /// Returns error if the merged configuration is invalid.
    pub fn open(globals: GlobalArgs) -> Result<Self> {
        Self::with_config(Config::load(), globals)
    }

    /// # Errors
    /// Returns error if the merged configuration is invalid.
    pub fn with_config(mut config: Config, globals: GlobalArgs) -> Result<Self> {
        config.verbose |= globals.verbose;
        if let Some(weight) = globals.weight {
            config.graph.default_weight = weight;
        }
        config.validate()?;

        if !config.output.color {
            colored::control::set_override(false);
        }
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn log(&self, message: &str) {
        if self.config.verbose {
            eprintln!("{} {message}", "[digraph]".dimmed());
        }
    }

    /// Reads the edge list at `file`. Load failures are reported here and
    /// come back as `None`.
    fn load(&self, file: &Path) -> Option<DirectedGraph<i64>> {
        self.log(&format!("reading {}", file.display()));
        match loader::read_directed_graph(file, self.config.graph.default_weight) {
            Ok(graph) => {
                self.log(&format!(
                    "loaded {} vertices, {} edges",
                    graph.vertex_count(),
                    graph.edge_count()
                ));
                Some(graph)
            }
            Err(e) => {
                eprintln!("{} {e}", "Error:".red());
                None
            }
        }
    }
}

/// Handles the edges command.
pub fn handle_edges(session: &Session, file: &Path, inverted: bool) -> Result<DigraphExit> {
    let Some(graph) = session.load(file) else {
        return Ok(DigraphExit::InvalidInput);
    };

    if inverted {
        session.log("inverting edges");
        reporting::print_edges(&graph.invert());
    } else {
        reporting::print_edges(&graph);
    }
    Ok(DigraphExit::Success)
}

/// Handles the stats command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_stats(session: &Session, file: &Path, json: bool) -> Result<DigraphExit> {
    let Some(graph) = session.load(file) else {
        return Ok(DigraphExit::InvalidInput);
    };

    let stats = GraphStats::collect(&graph);
    if json || session.config.wants_json() {
        reporting::print_json(&stats)?;
    } else {
        reporting::print_stats(&stats);
    }
    Ok(DigraphExit::Success)
}

/// Handles the components command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_components(session: &Session, file: &Path, json: bool) -> Result<DigraphExit> {
    let Some(graph) = session.load(file) else {
        return Ok(DigraphExit::InvalidInput);
    };

    let components = StrongComponents::new(&graph);
    session.log(&format!(
        "found {} strong components",
        components.number_of_components()
    ));

    if json || session.config.wants_json() {
        reporting::print_json(&ComponentsReport::collect(&components))?;
    } else {
        reporting::print_components(&components);
    }
    Ok(DigraphExit::Success)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn globals(weight: Option<f64>) -> GlobalArgs {
        GlobalArgs { verbose: false, weight }
    }

    #[test]
    fn test_weight_flag_overrides_config() {
        let session = Session::with_config(Config::new(), globals(Some(3.0))).expect("valid");
        assert!((session.config().graph.default_weight - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_weight_flag_rejected() {
        assert!(Session::with_config(Config::new(), globals(Some(-2.0))).is_err());
    }

    #[test]
    fn test_verbose_flag_merges() {
        let session = Session::with_config(
            Config::new(),
            GlobalArgs { verbose: true, weight: None },
        )
        .expect("valid");
        assert!(session.config().verbose);
    }
}
