//! Word graph: words linked by single-character deletions

mod builder;
mod node;


pub use builder::{drop_candidates, WordGraph};
pub use node::{WordId, WordNode};
