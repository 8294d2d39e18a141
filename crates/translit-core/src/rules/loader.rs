use std::num::NonZeroUsize;

use tracing::warn;

use super::{DecodeRule, EncodeRule, Rule, RuleTable};
use crate::lang::Gender;
use crate::pattern::{Pattern, WILDCARD};

/// Replacement value in phonetic tables meaning "emit nothing".
pub const ELISION: &str = "(null)";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("line {line}: expected {expected} fields, found {found}")]
    MissingFields {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: empty pattern")]
    EmptyPattern { line: usize },
    #[error("line {line}: consume length must be a positive integer, got {value:?}")]
    InvalidLength { line: usize, value: String },
    #[error("line {line}: unknown gender code {value:?}")]
    InvalidGender { line: usize, value: String },
}

impl RuleError {
    pub fn line(&self) -> usize {
        match self {
            RuleError::MissingFields { line, .. }
            | RuleError::EmptyPattern { line }
            | RuleError::InvalidLength { line, .. }
            | RuleError::InvalidGender { line, .. } => *line,
        }
    }
}

/// A parsed table together with the records that were dropped.
#[derive(Debug)]
pub struct ParsedRules<R> {
    pub table: RuleTable<R>,
    pub rejected: Vec<RuleError>,
}

/// Parse `gender,unused,pattern,consume,replacement` records.
///
/// An empty gender field means unspecified. `%` in the replacement is
/// stripped.
pub fn parse_encode_rules(text: &str) -> ParsedRules<EncodeRule> {
    parse_records(text, 5, |line, fields| {
        let gender = parse_gender(line, fields[0])?;
        let pattern = parse_pattern(line, fields[2])?;
        let consume = parse_consume(line, fields[3])?;
        Ok(EncodeRule {
            pattern,
            gender,
            consume,
            replacement: fields[4].replace(WILDCARD, ""),
        })
    })
}

/// Parse `pattern,replacement,consume` records.
///
/// A replacement of [`ELISION`] becomes `None`.
pub fn parse_decode_rules(text: &str) -> ParsedRules<DecodeRule> {
    parse_records(text, 3, |line, fields| {
        let pattern = parse_pattern(line, fields[0])?;
        let replacement = match fields[1] {
            ELISION => None,
            other => Some(other.replace(WILDCARD, "")),
        };
        let consume = parse_consume(line, fields[2])?;
        Ok(DecodeRule {
            pattern,
            consume,
            replacement,
        })
    })
}

/// Shared line iteration: blank lines are skipped, short records and records
/// failing `parse_line` are logged and collected instead of admitted.
fn parse_records<R: Rule>(
    text: &str,
    expected: usize,
    parse_line: impl Fn(usize, &[&str]) -> Result<R, RuleError>,
) -> ParsedRules<R> {
    let mut rules = Vec::new();
    let mut rejected = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = raw.split(',').collect();
        let parsed = if fields.len() < expected {
            Err(RuleError::MissingFields {
                line,
                expected,
                found: fields.len(),
            })
        } else {
            parse_line(line, &fields)
        };
        match parsed {
            Ok(rule) => rules.push(rule),
            Err(e) => {
                warn!("rejected rule record: {e}");
                rejected.push(e);
            }
        }
    }

    ParsedRules {
        table: RuleTable::new(rules),
        rejected,
    }
}

fn parse_pattern(line: usize, value: &str) -> Result<Pattern, RuleError> {
    if value.is_empty() {
        return Err(RuleError::EmptyPattern { line });
    }
    Ok(Pattern::parse(value))
}

fn parse_consume(line: usize, value: &str) -> Result<NonZeroUsize, RuleError> {
    value
        .trim()
        .parse::<NonZeroUsize>()
        .map_err(|_| RuleError::InvalidLength {
            line,
            value: value.to_string(),
        })
}

fn parse_gender(line: usize, value: &str) -> Result<Gender, RuleError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(Gender::Unspecified);
    }
    value
        .parse::<u8>()
        .ok()
        .and_then(Gender::from_code)
        .ok_or_else(|| RuleError::InvalidGender {
            line,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_records() {
        let parsed = parse_encode_rules("0,,#%,1,#\n2,,a#,1,aa\n0,x,-%,1,-#%\n");
        assert!(parsed.rejected.is_empty());
        let rules: Vec<&EncodeRule> = parsed.table.iter().collect();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].pattern.as_str(), "#%");
        assert_eq!(rules[1].gender, Gender::Female);
        assert_eq!(rules[1].replacement, "aa");
        assert_eq!(rules[2].replacement, "-#");
    }

    #[test]
    fn empty_gender_defaults_to_unspecified() {
        let parsed = parse_encode_rules(",,k%,1,k");
        assert!(parsed.rejected.is_empty());
        assert_eq!(parsed.table.iter().next().unwrap().gender, Gender::Unspecified);
    }

    #[test]
    fn malformed_gender_is_rejected() {
        let parsed = parse_encode_rules("7,,k%,1,k\nm,,k%,1,k\n0,,k%,1,k");
        assert_eq!(parsed.table.len(), 1);
        assert_eq!(parsed.rejected.len(), 2);
        assert!(matches!(
            parsed.rejected[0],
            RuleError::InvalidGender { line: 1, .. }
        ));
        assert_eq!(parsed.rejected[1].line(), 2);
    }

    #[test]
    fn non_positive_or_non_numeric_length_is_rejected() {
        let parsed = parse_decode_rules("ka%,ක,0\nka%,ක,-1\nka%,ක,two\nka%,ක,\nka%,ක, 2 ");
        assert_eq!(parsed.table.len(), 1);
        assert_eq!(parsed.table.iter().next().unwrap().consume.get(), 2);
        assert_eq!(parsed.rejected.len(), 4);
        assert!(parsed
            .rejected
            .iter()
            .all(|e| matches!(e, RuleError::InvalidLength { .. })));
    }

    #[test]
    fn short_records_are_rejected() {
        let parsed = parse_encode_rules("0,,k%,1\n");
        assert_eq!(
            parsed.rejected,
            vec![RuleError::MissingFields {
                line: 1,
                expected: 5,
                found: 4
            }]
        );
    }

    #[test]
    fn empty_pattern_is_rejected() {
        let parsed = parse_decode_rules(",x,1");
        assert_eq!(parsed.rejected, vec![RuleError::EmptyPattern { line: 1 }]);
    }

    #[test]
    fn elision_sentinel_becomes_none() {
        let parsed = parse_decode_rules("#%,(null),1\n.a%,%,2\nka%,ක%,2");
        let rules: Vec<&DecodeRule> = parsed.table.iter().collect();
        assert_eq!(rules[0].replacement, None);
        assert_eq!(rules[1].replacement.as_deref(), Some(""));
        assert_eq!(rules[2].replacement.as_deref(), Some("ක"));
    }

    #[test]
    fn dots_in_patterns_stay_literal() {
        let parsed = parse_decode_rules("n.a%,න්,3");
        let rule = parsed.table.iter().next().unwrap();
        let chars: Vec<char> = "nxa#".chars().collect();
        assert!(!rule.pattern.matches(&chars));
        let chars: Vec<char> = "n.a#".chars().collect();
        assert!(rule.pattern.matches(&chars));
    }

    #[test]
    fn blank_lines_and_crlf() {
        let parsed = parse_decode_rules("\r\nka%,ක,2\r\n\n  \nki%,කි,2\r\n");
        assert!(parsed.rejected.is_empty());
        let rules: Vec<&DecodeRule> = parsed.table.iter().collect();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1].consume.get(), 2);
    }
}
