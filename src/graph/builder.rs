//! Graph construction from a normalized dictionary

use super::node::{WordId, WordNode};
use crate::dictionary::Dictionary;
use std::time::Instant;
use tracing::{debug, info};

/// Every string formed by deleting exactly one character from `word`
///
/// Yields one candidate per character, in ascending deletion-index order.
/// Candidates may repeat when adjacent characters are equal.
pub fn drop_candidates(word: &str) -> Vec<String> {
    word.char_indices()
        .map(|(at, ch)| {
            let mut candidate = String::with_capacity(word.len() - ch.len_utf8());
            candidate.push_str(&word[..at]);
            candidate.push_str(&word[at + ch.len_utf8()..]);
            candidate
        })
        .collect()
}

/// Directed acyclic graph of single-character deletions
///
/// Owns every node. Edges are populated once inside [`WordGraph::build`]
/// and the graph is read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    nodes: Vec<WordNode>,
    edge_count: usize,
}

impl WordGraph {
    /// Link every word to each of its drop-candidates present in `dictionary`
    pub fn build(dictionary: &Dictionary) -> Self {
        let started = Instant::now();
        let mut nodes: Vec<WordNode> = dictionary.iter().map(WordNode::new).collect();
        let mut edge_count = 0;

        for (from, word) in dictionary.iter().enumerate() {
            for candidate in drop_candidates(word) {
                if candidate.is_empty() {
                    continue;
                }
                let Some(to) = dictionary.position(&candidate) else {
                    continue;
                };
                let (from, to) = (WordId::new(from), WordId::new(to));

                // Repeated letters give the same candidate twice; keep one edge.
                if nodes[from.index()].out_edges.contains(&to) {
                    continue;
                }
                nodes[from.index()].out_edges.push(to);
                nodes[to.index()].in_edges.push(from);
                edge_count += 1;
            }
        }

        let graph = Self { nodes, edge_count };
        info!(
            words = graph.node_count(),
            edges = graph.edge_count(),
            "built word graph"
        );
        debug!(elapsed_ms = started.elapsed().as_millis() as u64, "graph build timing");
        graph
    }

    pub fn node(&self, id: WordId) -> Option<&WordNode> {
        self.nodes.get(id.index())
    }

    /// Text of a word
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    pub fn word(&self, id: WordId) -> &str {
        self.nodes[id.index()].word()
    }

    /// Find a word's id
    pub fn lookup(&self, word: &str) -> Option<WordId> {
        self.nodes
            .binary_search_by(|node| node.word().cmp(word))
            .ok()
            .map(WordId::new)
    }

    pub fn outgoing(&self, id: WordId) -> &[WordId] {
        self.node(id).map(WordNode::outgoing).unwrap_or(&[])
    }

    pub fn incoming(&self, id: WordId) -> &[WordId] {
        self.node(id).map(WordNode::incoming).unwrap_or(&[])
    }

    pub fn is_root(&self, id: WordId) -> bool {
        self.node(id).is_some_and(WordNode::is_root)
    }

    pub fn is_leaf(&self, id: WordId) -> bool {
        self.node(id).is_some_and(WordNode::is_leaf)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All nodes with their ids, in dictionary order
    pub fn nodes(&self) -> impl Iterator<Item = (WordId, &WordNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (WordId::new(i), node))
    }

    /// Every node with no incoming edges, isolated words included
    pub fn roots(&self) -> Vec<WordId> {
        self.select(WordNode::is_root)
    }

    /// Roots with at least one outgoing edge
    pub fn non_trivial_roots(&self) -> Vec<WordId> {
        self.select(WordNode::is_non_trivial_root)
    }

    pub fn leaves(&self) -> Vec<WordId> {
        self.select(WordNode::is_leaf)
    }

    fn select(&self, keep: impl Fn(&WordNode) -> bool) -> Vec<WordId> {
        self.nodes()
            .filter(|(_, node)| keep(node))
            .map(|(id, _)| id)
            .collect()
    }
}
