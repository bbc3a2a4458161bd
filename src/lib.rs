//! dropladder: letter-drop word ladders
//!
//! Finds every maximal chain of dictionary words where each word is
//! produced from the one before it by deleting exactly one character.
//!
//! # Core Concepts
//!
//! - **Dictionary**: a sorted set of distinct lowercase words
//! - **WordGraph**: an arena of words linked by single-character deletions;
//!   acyclic because every edge shortens the word
//! - **Chains**: root-to-leaf paths through the graph, enumerated with an
//!   explicit stack and ranked longest first
//!
//! # Example
//!
//! ```
//! use dropladder::{find_ladders, Dictionary, LadderConfig};
//!
//! let dictionary = Dictionary::from_lines(["cat", "at", "a"]);
//! let report = find_ladders(&dictionary, &LadderConfig::new());
//! assert_eq!(report.to_string(), "1 chains\ncat->at->a\n");
//! ```

pub mod dictionary;
mod engine;
mod graph;
pub mod ladder;

pub use dictionary::{Dictionary, DictionaryError, DEFAULT_DICTIONARY_PATH};
pub use engine::{
    find_ladders, find_ladders_in_file, write_report, LadderConfig, LadderError, LadderResult,
    MIN_LADDER_LENGTH,
};
pub use graph::{drop_candidates, WordGraph, WordId, WordNode};
pub use ladder::{ChainEnumerator, LadderReport, OutputFormat, TieBreak, WordChain};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
