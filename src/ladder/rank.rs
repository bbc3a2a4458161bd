//! Ordering of completed chains

use super::chain::WordChain;
use crate::graph::WordGraph;
use clap::ValueEnum;
use std::cmp::Reverse;

/// Secondary key among chains of equal length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TieBreak {
    /// Keep discovery order (stable sort)
    #[default]
    Discovery,
    /// Lexicographic order of the chain's word sequence
    Lexical,
}

/// Sort chains longest first
pub fn rank(graph: &WordGraph, mut chains: Vec<WordChain>, tie_break: TieBreak) -> Vec<WordChain> {
    match tie_break {
        TieBreak::Discovery => chains.sort_by_key(|chain| Reverse(chain.len())),
        TieBreak::Lexical => chains.sort_by(|a, b| {
            b.len()
                .cmp(&a.len())
                .then_with(|| words_of(graph, a).cmp(words_of(graph, b)))
        }),
    }
    chains
}

fn words_of<'g>(graph: &'g WordGraph, chain: &'g WordChain) -> impl Iterator<Item = &'g str> {
    chain.ids().iter().map(move |&id| graph.word(id))
}
