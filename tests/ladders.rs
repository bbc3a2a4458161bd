//! End-to-end ladder discovery through the library API

mod common;

use common::word_file;
use dropladder::{
    find_ladders, find_ladders_in_file, Dictionary, LadderConfig, TieBreak, WordGraph,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;

const WORDS: &[&str] = &[
    "starting", "stating", "statin", "satin", "stain", "sain", "sati", "sat", "tin", "sin", "in",
    "at", "a", "i", "ti", "tain", "stop", "top", "to", "op", "o", "planet", "plane", "plan",
    "pan", "an", "lane", "lan", "zebra", "ok",
];

fn chain_set(lines: &[&str]) -> HashSet<Vec<String>> {
    let report = find_ladders(&Dictionary::from_lines(lines.iter().copied()), &LadderConfig::new());
    assert_eq!(report.count, report.chains.len());
    report.chains.into_iter().collect()
}

#[test]
fn test_chains_invariant_to_line_order() {
    let expected = chain_set(WORDS);
    assert!(!expected.is_empty());

    let mut rng = StdRng::seed_from_u64(0x1adde2);
    for _ in 0..10 {
        let mut shuffled = WORDS.to_vec();
        shuffled.shuffle(&mut rng);
        assert_eq!(chain_set(&shuffled), expected);
    }
}

#[test]
fn test_case_and_blank_lines_collapse() {
    let file = word_file(&["Cat", "cat", "", "AT", "   ", "a"]);
    let report = find_ladders_in_file(file.path(), &LadderConfig::new()).unwrap();
    assert_eq!(report.to_string(), "1 chains\ncat->at->a\n");
}

#[test]
fn test_chains_are_sorted_longest_first() {
    let report = find_ladders(&Dictionary::from_lines(WORDS.iter().copied()), &LadderConfig::new());
    let lengths: Vec<usize> = report.chains.iter().map(Vec::len).collect();
    let mut sorted = lengths.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(lengths, sorted);
    assert_eq!(report.chains[0][0], "starting");
}

#[test]
fn test_every_chain_is_a_valid_ladder() {
    let dictionary = Dictionary::from_lines(WORDS.iter().copied());
    let graph = WordGraph::build(&dictionary);
    let report = find_ladders(&dictionary, &LadderConfig::new());

    for chain in &report.chains {
        let first = graph.lookup(&chain[0]).unwrap();
        assert!(graph.incoming(first).is_empty(), "{:?} starts below a root", chain);

        let last = graph.lookup(chain.last().unwrap()).unwrap();
        assert!(graph.is_leaf(last), "{:?} stops early", chain);

        for pair in chain.windows(2) {
            assert_eq!(pair[0].chars().count(), pair[1].chars().count() + 1);
            assert!(dropladder::drop_candidates(&pair[0]).contains(&pair[1]));
        }
    }
    // zebra and ok are isolated
    assert!(report.chains.iter().all(|c| c[0] != "zebra" && c[0] != "ok"));
}

#[test]
fn test_lexical_tie_break_is_reproducible() {
    let config = LadderConfig::new().with_tie_break(TieBreak::Lexical);
    let reference = find_ladders(&Dictionary::from_lines(WORDS.iter().copied()), &config);

    let mut reversed = WORDS.to_vec();
    reversed.reverse();
    let again = find_ladders(&Dictionary::from_lines(reversed), &config);
    assert_eq!(again, reference);

    for pair in reference.chains.windows(2) {
        if pair[0].len() == pair[1].len() {
            assert!(pair[0] < pair[1]);
        }
    }
}

#[test]
fn test_repeated_letters_yield_distinct_chains() {
    // "aab" reaches "ab" by dropping either 'a'; that is one ladder step.
    let report = find_ladders(&Dictionary::from_lines(["aab", "ab", "a", "b"]), &LadderConfig::new());

    assert_eq!(report.count, 2);
    assert_eq!(report.to_string(), "2 chains\naab->ab->a\naab->ab->b\n");
    let unique: HashSet<_> = report.chains.iter().collect();
    assert_eq!(unique.len(), report.chains.len());
}
