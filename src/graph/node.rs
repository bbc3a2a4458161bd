//! Node representation in the word graph

/// Stable index of a word in the graph's node arena
///
/// Equal to the word's position in dictionary order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordId(usize);

impl WordId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// One dictionary word and its drop relations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordNode {
    word: String,
    /// Words this word drops into, in ascending deletion-index order
    pub(super) out_edges: Vec<WordId>,
    /// Words that drop into this word, in dictionary order
    pub(super) in_edges: Vec<WordId>,
}

impl WordNode {
    pub(super) fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            out_edges: Vec::new(),
            in_edges: Vec::new(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn outgoing(&self) -> &[WordId] {
        &self.out_edges
    }

    pub fn incoming(&self) -> &[WordId] {
        &self.in_edges
    }

    /// No longer word drops into this one
    pub fn is_root(&self) -> bool {
        self.in_edges.is_empty()
    }

    /// No drop-candidate of this word is in the dictionary
    pub fn is_leaf(&self) -> bool {
        self.out_edges.is_empty()
    }

    /// A root that starts at least one real ladder
    pub fn is_non_trivial_root(&self) -> bool {
        self.is_root() && !self.is_leaf()
    }
}
