//! Ladder discovery over a built word graph
//!
//! Enumerates every maximal root-to-leaf chain, ranks the results and
//! renders them.

mod chain;
mod enumerate;
mod rank;
mod report;

pub use chain::{WordChain, ARROW};
pub use enumerate::ChainEnumerator;
pub use rank::{rank, TieBreak};
pub use report::{LadderReport, OutputFormat};
