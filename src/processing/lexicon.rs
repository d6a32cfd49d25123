//! Fixed phrase sets backed by Aho-Corasick automata

use crate::error::{InterviewScorerError, Result};
use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::HashSet;

/// An immutable set of phrases matched as substrings of lowercased text.
///
/// Built once and only read afterwards, so a single instance can be shared
/// between any number of concurrent analyses.
pub struct PhraseSet {
    matcher: AhoCorasick,
}

impl PhraseSet {
    pub fn new(name: &'static str, phrases: &[&'static str]) -> Result<Self> {
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(phrases)
            .map_err(|e| InterviewScorerError::Processing(format!("Failed to build '{}' matcher: {}", name, e)))?;

        log::debug!("Built '{}' matcher with {} phrases", name, phrases.len());
        Ok(Self { matcher })
    }

    /// Total substring occurrences summed over every phrase.
    ///
    /// Each phrase keeps its own non-overlapping tally, so a region of text
    /// can be counted once per phrase that matches it.
    pub fn occurrences(&self, text: &str) -> usize {
        let mut next_allowed_start = vec![0usize; self.matcher.patterns_len()];
        let mut count = 0;

        for mat in self.matcher.find_overlapping_iter(text) {
            let id = mat.pattern().as_usize();
            if mat.start() >= next_allowed_start[id] {
                next_allowed_start[id] = mat.end();
                count += 1;
            }
        }

        count
    }

    /// Number of distinct phrases present at least once.
    pub fn distinct_matches(&self, text: &str) -> usize {
        self.matcher
            .find_overlapping_iter(text)
            .map(|mat| mat.pattern())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn contains_any(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}
