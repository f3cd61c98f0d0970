//! Subcommands: analyze, path, validate.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use causemap_analysis::AnalysisEngine;
use causemap_core::config::{CausemapConfig, CliOverrides, Clustering};
use causemap_core::errors::CausemapError;
use causemap_core::types::Graph;

#[derive(Debug, Parser)]
#[command(name = "causemap", version, about = "Structural analysis of causal maps")]
pub struct Cli {
    /// Directory searched for `causemap.toml`.
    #[arg(long, global = true, default_value = ".")]
    pub config_root: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the full analysis and print the result as JSON
    Analyze {
        /// Graph JSON file: {"nodes": [...], "edges": [...]}
        file: PathBuf,
        /// Clustering mode: none | tags
        #[arg(long)]
        clustering: Option<Clustering>,
        #[arg(long)]
        driver_limit: Option<usize>,
        #[arg(long)]
        outcome_limit: Option<usize>,
        #[arg(long)]
        loop_limit: Option<usize>,
        /// Reject edge strengths outside 1..=5
        #[arg(long)]
        strict: bool,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Print the fewest-hops path between two concepts
    Path {
        file: PathBuf,
        from: String,
        to: String,
    },
    /// Parse and validate a graph without analysing it
    Validate {
        file: PathBuf,
        #[arg(long)]
        strict: bool,
    },
}

/// What a successful command wants shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text for stdout.
    Printed(String),
    /// `path` found no route; reported on stderr with a non-zero exit.
    NoPath { from: String, to: String },
}

pub fn run(cli: &Cli) -> Result<Outcome, CausemapError> {
    match &cli.command {
        Command::Analyze {
            file,
            clustering,
            driver_limit,
            outcome_limit,
            loop_limit,
            strict,
            pretty,
        } => {
            let overrides = CliOverrides {
                clustering: *clustering,
                driver_limit: *driver_limit,
                outcome_limit: *outcome_limit,
                loop_limit: *loop_limit,
                strict_strength: strict.then_some(true),
            };
            let config = CausemapConfig::load(&cli.config_root, Some(&overrides))?;
            let graph = load_graph(file, &config)?;
            let result = AnalysisEngine::from_config(&config.analysis).analyze(&graph);
            let text = if *pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            Ok(Outcome::Printed(text))
        }
        Command::Path { file, from, to } => {
            let config = CausemapConfig::load(&cli.config_root, None)?;
            let graph = load_graph(file, &config)?;
            let engine = AnalysisEngine::from_config(&config.analysis);
            match engine.shortest_path(&graph, from, to) {
                Some(path) => Ok(Outcome::Printed(serde_json::to_string(&path)?)),
                None => Ok(Outcome::NoPath {
                    from: from.clone(),
                    to: to.clone(),
                }),
            }
        }
        Command::Validate { file, strict } => {
            let overrides = CliOverrides {
                strict_strength: strict.then_some(true),
                ..Default::default()
            };
            let config = CausemapConfig::load(&cli.config_root, Some(&overrides))?;
            let graph = load_graph(file, &config)?;
            Ok(Outcome::Printed(format!(
                "ok: {} nodes, {} edges",
                graph.node_count(),
                graph.edge_count()
            )))
        }
    }
}

fn load_graph(path: &Path, config: &CausemapConfig) -> Result<Graph, CausemapError> {
    let json = std::fs::read_to_string(path).map_err(|source| CausemapError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let graph = Graph::from_json(&json, &config.validation)?;
    tracing::debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}
