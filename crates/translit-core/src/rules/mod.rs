//! Ordered rewrite-rule tables.
//!
//! `EncodeRule` tables turn a script into the phonetic pivot, `DecodeRule`
//! tables render the pivot into a script. Lookup is by position: the first
//! rule whose pattern covers the whole remaining buffer wins.

mod loader;

pub use loader::{parse_decode_rules, parse_encode_rules, ParsedRules, RuleError, ELISION};

use std::num::NonZeroUsize;

use crate::lang::Gender;
use crate::pattern::Pattern;

/// Script → phonetic rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeRule {
    pub pattern: Pattern,
    pub gender: Gender,
    pub consume: NonZeroUsize,
    pub replacement: String,
}

/// Phonetic → script rule. `replacement: None` elides the matched segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeRule {
    pub pattern: Pattern,
    pub consume: NonZeroUsize,
    pub replacement: Option<String>,
}

pub trait Rule {
    fn pattern(&self) -> &Pattern;
    fn consume(&self) -> NonZeroUsize;
}

impl Rule for EncodeRule {
    fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn consume(&self) -> NonZeroUsize {
        self.consume
    }
}

impl Rule for DecodeRule {
    fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn consume(&self) -> NonZeroUsize {
        self.consume
    }
}

#[derive(Debug, Clone)]
pub struct RuleTable<R> {
    rules: Vec<R>,
}

impl<R> Default for RuleTable<R> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<R: Rule> RuleTable<R> {
    pub fn new(rules: Vec<R>) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.rules.iter()
    }

    /// First rule, in table order, whose pattern fully matches `buffer`.
    pub fn find(&self, buffer: &[char]) -> Option<&R> {
        self.find_where(buffer, |_| true)
    }

    /// Like [`find`](Self::find), skipping rules rejected by `accept`.
    pub fn find_where(&self, buffer: &[char], accept: impl Fn(&R) -> bool) -> Option<&R> {
        self.rules
            .iter()
            .find(|rule| accept(rule) && rule.pattern().matches(buffer))
    }
}

impl RuleTable<EncodeRule> {
    /// First rule that matches `buffer` and may fire for `gender`.
    ///
    /// Gender-specific and gender-agnostic rules are not ranked against each
    /// other; whichever comes first in the table wins.
    pub fn find_for(&self, buffer: &[char], gender: Gender) -> Option<&EncodeRule> {
        self.find_where(buffer, |rule| rule.gender.admits(gender))
    }
}

impl<R> FromIterator<R> for RuleTable<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
