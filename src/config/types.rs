use serde::{Deserialize, Serialize};

use crate::graph::DEFAULT_WEIGHT;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Weight given to every edge read from an edge-list file.
    #[serde(default = "default_weight")]
    pub default_weight: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { default_weight: default_weight() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: OutputFormat::Text, color: true }
    }
}

const fn default_weight() -> f64 { DEFAULT_WEIGHT }
const fn default_true() -> bool { true }

/// On-disk shape of `digraph.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DigraphToml {
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub verbose: bool,
    pub graph: GraphConfig,
    pub output: OutputConfig,
}
