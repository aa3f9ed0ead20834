// src/config/io.rs
use colored::Colorize;
use std::fs;
use std::path::Path;

use super::types::{Config, DigraphToml};

pub const CONFIG_FILE: &str = "digraph.toml";

/// Loads `digraph.toml` from `dir` into `config`. A missing file keeps defaults.
pub fn load_toml_config(config: &mut Config, dir: &Path) {
    let path = dir.join(CONFIG_FILE);
    let Ok(content) = fs::read_to_string(&path) else {
        return;
    };
    parse_toml(config, &content);
}

/// Applies TOML content. Malformed content is reported and ignored.
pub fn parse_toml(config: &mut Config, content: &str) {
    match toml::from_str::<DigraphToml>(content) {
        Ok(parsed) => {
            config.graph = parsed.graph;
            config.output = parsed.output;
            config.verbose |= parsed.verbose;
        }
        Err(e) => {
            eprintln!(
                "{} ignoring malformed {CONFIG_FILE}: {}",
                "warning:".yellow(),
                e.to_string().trim_end()
            );
        }
    }
}
