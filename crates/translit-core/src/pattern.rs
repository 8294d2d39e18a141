//! Anchored pattern evaluator for rule tables.
//!
//! A pattern is a run of literal characters with optional `%` wildcards, each
//! matching any run of characters including the empty one. A pattern always
//! has to cover the whole input. No other character is special: `.` is a
//! literal dot.

use std::fmt;

pub const WILDCARD: char = '%';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    /// Literal runs between wildcards. Always `wildcards + 1` entries.
    segments: Vec<Vec<char>>,
}

impl Pattern {
    pub fn parse(source: &str) -> Self {
        let segments = source
            .split(WILDCARD)
            .map(|seg| seg.chars().collect())
            .collect();
        Self {
            source: source.to_string(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn has_wildcard(&self) -> bool {
        self.segments.len() > 1
    }

    /// Full-match `input` against the pattern.
    pub fn matches(&self, input: &[char]) -> bool {
        let Some((first, rest)) = self.segments.split_first() else {
            return input.is_empty();
        };
        let Some((last, middle)) = rest.split_last() else {
            return input == first.as_slice();
        };

        let Some(mut tail) = input.strip_prefix(first.as_slice()) else {
            return false;
        };
        // Leftmost placement of each inner run leaves the most room for the
        // runs after it.
        for seg in middle {
            match find(tail, seg) {
                Some(pos) => tail = &tail[pos + seg.len()..],
                None => return false,
            }
        }
        tail.ends_with(last)
    }

    pub fn matches_str(&self, input: &str) -> bool {
        let chars: Vec<char> = input.chars().collect();
        self.matches(&chars)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn find(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
