//! Pipeline entry point: dictionary to ranked ladders

use crate::dictionary::{Dictionary, DictionaryError};
use crate::graph::WordGraph;
use crate::ladder::{rank, ChainEnumerator, LadderReport, OutputFormat, TieBreak};
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur in dropladder operations
#[derive(Debug, Error)]
pub enum LadderError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for dropladder operations
pub type LadderResult<T> = Result<T, LadderError>;

/// Shortest chain, in words, that any ladder can have
pub const MIN_LADDER_LENGTH: usize = 2;

/// Options for ranking and reporting ladders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderConfig {
    /// Secondary key among chains of equal length
    pub tie_break: TieBreak,
    /// Chains with fewer words are left out of the report
    pub min_length: usize,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::default(),
            min_length: MIN_LADDER_LENGTH,
        }
    }
}

impl LadderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }
}

/// Build the graph, enumerate and rank its ladders
///
/// The graph is fully built before enumeration starts.
pub fn find_ladders(dictionary: &Dictionary, config: &LadderConfig) -> LadderReport {
    let graph = WordGraph::build(dictionary);
    let chains = ChainEnumerator::new(&graph).enumerate();

    let total = chains.len();
    let kept: Vec<_> = chains
        .into_iter()
        .filter(|chain| chain.len() >= config.min_length)
        .collect();
    if kept.len() < total {
        debug!(dropped = total - kept.len(), min_length = config.min_length, "filtered short chains");
    }

    let ranked = rank(&graph, kept, config.tie_break);
    LadderReport::new(&graph, &ranked)
}

/// Load a dictionary file and report its ladders
pub fn find_ladders_in_file(
    path: impl AsRef<Path>,
    config: &LadderConfig,
) -> LadderResult<LadderReport> {
    let dictionary = Dictionary::load(path)?;
    Ok(find_ladders(&dictionary, config))
}

/// Write a report to `out` in the given format and flush it
pub fn write_report(
    report: &LadderReport,
    format: OutputFormat,
    mut out: impl Write,
) -> LadderResult<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", report)?,
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
    }
    out.flush()?;
    Ok(())
}
