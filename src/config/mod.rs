// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, DigraphToml, GraphConfig, OutputConfig, OutputFormat};
use anyhow::{bail, Result};
use std::path::Path;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new config and loads `digraph.toml` from the working directory.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new("."))
    }

    #[must_use]
    pub fn load_from(dir: &Path) -> Self {
        let mut config = Self::new();
        io::load_toml_config(&mut config, dir);
        config
    }

    pub fn parse_toml(&mut self, content: &str) {
        io::parse_toml(self, content);
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns error if the default weight is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        let weight = self.graph.default_weight;
        if !weight.is_finite() || weight < 0.0 {
            bail!("graph.default_weight must be a non-negative number, got {weight}");
        }
        Ok(())
    }

    #[must_use]
    pub fn wants_json(&self) -> bool {
        self.output.format == OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Config::new();
        assert!((c.graph.default_weight - 1.0).abs() < f64::EPSILON);
        assert_eq!(c.output.format, OutputFormat::Text);
        assert!(c.output.color);
        assert!(!c.verbose);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_parse_sections() {
        let mut c = Config::new();
        c.parse_toml("verbose = true\n[graph]\ndefault_weight = 2.5\n[output]\nformat = \"json\"\ncolor = false\n");
        assert!((c.graph.default_weight - 2.5).abs() < f64::EPSILON);
        assert!(c.wants_json());
        assert!(!c.output.color);
        assert!(c.verbose);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let mut c = Config::new();
        c.parse_toml("[output]\nformat = \"json\"\n");
        assert!((c.graph.default_weight - 1.0).abs() < f64::EPSILON);
        assert!(c.output.color);
    }

    #[test]
    fn test_malformed_keeps_defaults() {
        let mut c = Config::new();
        c.parse_toml("[graph]\ndefault_weight = \"heavy\"\n");
        assert!((c.graph.default_weight - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut c = Config::new();
        c.graph.default_weight = -1.0;
        assert!(c.validate().is_err());
    }
}
