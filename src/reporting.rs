//! Console and JSON output for graphs and their components.
//!
//! Text output reuses the `Display` renderings of [`DirectedGraph`] and
//! [`StrongComponents`]. JSON output goes through the serializable summaries
//! defined here.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::fmt::{Display, Write};

use crate::graph::{DirectedGraph, StrongComponents, Vertex};

/// Vertex and edge totals plus the busiest vertices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats<V> {
    pub vertices: usize,
    pub edges: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_out_degree: Option<DegreeEntry<V>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_in_degree: Option<DegreeEntry<V>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeEntry<V> {
    pub vertex: V,
    pub degree: usize,
}

impl<V: Vertex> GraphStats<V> {
    #[must_use]
    pub fn collect(graph: &DirectedGraph<V>) -> Self {
        Self {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            max_out_degree: busiest(graph, |_, out| out),
            max_in_degree: busiest(graph, |incoming, _| incoming),
        }
    }
}

/// Vertex with the highest degree. Ties go to the smallest vertex.
fn busiest<V: Vertex>(
    graph: &DirectedGraph<V>,
    pick: impl Fn(usize, usize) -> usize,
) -> Option<DegreeEntry<V>> {
    graph
        .degrees()
        .map(|(v, incoming, out)| DegreeEntry { vertex: v.clone(), degree: pick(incoming, out) })
        .fold(None, |best, e| match best {
            Some(b) if b.degree >= e.degree => Some(b),
            _ => Some(e),
        })
}

/// Serializable view of a component partition.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentsReport<V> {
    pub count: usize,
    pub components: Vec<ComponentEntry<V>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentEntry<V> {
    pub id: usize,
    pub vertices: Vec<V>,
}

impl<V: Vertex> ComponentsReport<V> {
    #[must_use]
    pub fn collect(components: &StrongComponents<V>) -> Self {
        Self {
            count: components.number_of_components(),
            components: components
                .components()
                .map(|(id, members)| ComponentEntry {
                    id,
                    vertices: members.iter().cloned().collect(),
                })
                .collect(),
        }
    }
}

/// Renders stats as plain lines.
#[must_use]
pub fn format_stats<V: Display>(stats: &GraphStats<V>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "vertices: {}", stats.vertices);
    let _ = writeln!(out, "edges: {}", stats.edges);
    if let Some(e) = &stats.max_out_degree {
        let _ = writeln!(out, "max out-degree: {} ({})", e.degree, e.vertex);
    }
    if let Some(e) = &stats.max_in_degree {
        let _ = writeln!(out, "max in-degree: {} ({})", e.degree, e.vertex);
    }
    out
}

pub fn print_edges<V: Vertex + Display>(graph: &DirectedGraph<V>) {
    print!("{graph}");
}

pub fn print_stats<V: Display>(stats: &GraphStats<V>) {
    println!("{}", "GRAPH STATS".cyan().bold());
    print!("{}", format_stats(stats));
}

pub fn print_components<V: Vertex + Display>(components: &StrongComponents<V>) {
    println!(
        "{} {}",
        "STRONG COMPONENTS".cyan().bold(),
        format_count(components.number_of_components())
    );
    print!("{components}");
}

fn format_count(n: usize) -> String {
    if n == 1 {
        n.to_string().green().to_string()
    } else {
        n.to_string().yellow().to_string()
    }
}

/// Prints any serializable summary as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}
