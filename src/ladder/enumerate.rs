//! Depth-first enumeration of maximal chains

use super::chain::WordChain;
use crate::graph::{WordGraph, WordId};
use tracing::{debug, info};

/// One step of a chain under construction
///
/// Chains share their prefixes: each link points at the link it extends.
#[derive(Debug, Clone, Copy)]
struct Link {
    word: WordId,
    parent: Option<usize>,
    len: usize,
}

/// Finds every path from a non-trivial root to a leaf
///
/// Uses an explicit stack rather than recursion, so ladder length never
/// bounds call depth. No visited set: a word may sit in many chains.
#[derive(Debug)]
pub struct ChainEnumerator<'g> {
    graph: &'g WordGraph,
    links: Vec<Link>,
}

impl<'g> ChainEnumerator<'g> {
    pub fn new(graph: &'g WordGraph) -> Self {
        Self {
            graph,
            links: Vec::new(),
        }
    }

    /// All complete chains, in discovery order
    ///
    /// Discovery order is last-in-first-out over edge insertion order. It is
    /// deterministic but only meaningful once ranked.
    pub fn enumerate(mut self) -> Vec<WordChain> {
        let graph = self.graph;
        let roots = graph.non_trivial_roots();
        info!(roots = roots.len(), "enumerating ladders");

        let mut stack: Vec<usize> = roots
            .into_iter()
            .map(|root| self.push_link(root, None))
            .collect();
        let mut completed = Vec::new();

        while let Some(at) = stack.pop() {
            let link = self.links[at];
            let next = graph.outgoing(link.word);

            if next.is_empty() {
                completed.push(self.materialize(at));
                continue;
            }
            for &word in next {
                stack.push(self.push_link(word, Some(at)));
            }
        }

        debug!(links = self.links.len(), "chain links allocated");
        info!(chains = completed.len(), "enumerated ladders");
        completed
    }

    fn push_link(&mut self, word: WordId, parent: Option<usize>) -> usize {
        let len = parent.map_or(1, |p| self.links[p].len + 1);
        self.links.push(Link { word, parent, len });
        self.links.len() - 1
    }

    fn materialize(&self, tail: usize) -> WordChain {
        let mut ids = Vec::with_capacity(self.links[tail].len);
        let mut cursor = Some(tail);
        while let Some(at) = cursor {
            let link = self.links[at];
            ids.push(link.word);
            cursor = link.parent;
        }
        ids.reverse();
        WordChain::new(ids)
    }
}
