//! Rendering of ranked ladders

use super::chain::{WordChain, ARROW};
use crate::graph::WordGraph;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// How a report is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `N chains` followed by one `a->b->c` line per chain
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Ranked ladders, resolved to their words
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LadderReport {
    pub count: usize,
    pub chains: Vec<Vec<String>>,
}

impl LadderReport {
    pub fn new(graph: &WordGraph, chains: &[WordChain]) -> Self {
        let chains: Vec<Vec<String>> = chains
            .iter()
            .map(|chain| chain.words(graph).into_iter().map(str::to_owned).collect())
            .collect();
        Self {
            count: chains.len(),
            chains,
        }
    }

    /// Length in words of the longest ladder
    pub fn longest(&self) -> usize {
        self.chains.first().map_or(0, Vec::len)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for LadderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} chains", self.count)?;
        for chain in &self.chains {
            writeln!(f, "{}", chain.join(ARROW))?;
        }
        Ok(())
    }
}
