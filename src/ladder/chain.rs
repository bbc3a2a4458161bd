//! Word chains

use crate::graph::{WordGraph, WordId};

/// Separator between words of a rendered chain
pub const ARROW: &str = "->";

/// A root-to-leaf sequence of words, each a drop-candidate of the previous
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordChain {
    ids: Vec<WordId>,
}

impl WordChain {
    pub fn new(ids: Vec<WordId>) -> Self {
        Self { ids }
    }

    pub fn ids(&self) -> &[WordId] {
        &self.ids
    }

    /// Number of words in the chain
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn first(&self) -> Option<WordId> {
        self.ids.first().copied()
    }

    pub fn last(&self) -> Option<WordId> {
        self.ids.last().copied()
    }

    /// Whether the chain ends on a leaf of `graph`
    pub fn is_complete(&self, graph: &WordGraph) -> bool {
        self.last().is_some_and(|id| graph.is_leaf(id))
    }

    pub fn words<'g>(&self, graph: &'g WordGraph) -> Vec<&'g str> {
        self.ids.iter().map(|&id| graph.word(id)).collect()
    }

    /// `word1->word2->...->wordK`
    pub fn render(&self, graph: &WordGraph) -> String {
        self.words(graph).join(ARROW)
    }
}
