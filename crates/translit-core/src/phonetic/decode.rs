use tracing::{debug, debug_span, trace};

use super::{Step, BOUNDARY};
use crate::rules::{DecodeRule, RuleTable};

/// Render a phonetic string into the script described by `rules`.
///
/// Boundary markers never survive into the output.
pub fn decode(phonetic: &str, rules: &RuleTable<DecodeRule>) -> String {
    decode_with(phonetic, rules, |_| {})
}

/// [`decode`], reporting every loop iteration to `observe`.
pub fn decode_with<F>(phonetic: &str, rules: &RuleTable<DecodeRule>, mut observe: F) -> String
where
    F: FnMut(Step<'_>),
{
    let _span = debug_span!("decode", phonetic).entered();

    let input: Vec<char> = phonetic.chars().collect();
    let mut out = String::with_capacity(phonetic.len());
    let mut cursor = 0;

    while cursor < input.len() {
        let remaining = &input[cursor..];
        match rules.find(remaining) {
            Some(rule) => {
                if let Some(text) = &rule.replacement {
                    out.push_str(text);
                }
                let consumed = rule.consume.get().min(remaining.len());
                trace!(
                    pattern = rule.pattern.as_str(),
                    replacement = ?rule.replacement,
                    "rule matched"
                );
                observe(Step {
                    remaining,
                    pattern: Some(rule.pattern.as_str()),
                    emitted: rule.replacement.as_deref(),
                    glued: false,
                    consumed,
                });
                cursor += consumed;
            }
            None => {
                let ch = remaining[0];
                out.push(ch);
                let mut buf = [0u8; 4];
                observe(Step {
                    remaining,
                    pattern: None,
                    emitted: Some(&*ch.encode_utf8(&mut buf)),
                    glued: false,
                    consumed: 1,
                });
                cursor += 1;
            }
        }
    }

    out.retain(|c| c != BOUNDARY);
    debug!(output = %out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::parse_decode_rules;

    fn run(rules: &str, phonetic: &str) -> String {
        let parsed = parse_decode_rules(rules);
        assert!(parsed.rejected.is_empty());
        decode(phonetic, &parsed.table)
    }

    #[test]
    fn first_listed_rule_wins() {
        let rules = "kaa%,කා,3\nka%,ක,2";
        assert_eq!(run(rules, "kaa"), "කා");
        let rules = "ka%,ක,2\nkaa%,කා,3";
        assert_eq!(run(rules, "kaa"), "කa");
    }

    #[test]
    fn elision_emits_nothing_but_consumes() {
        let rules = ".a%,(null),2\nk%,k,1\na%,a,1";
        assert_eq!(run(rules, "k.aka"), "kka");
    }

    #[test]
    fn empty_replacement_is_not_elision_but_behaves_alike() {
        let parsed = parse_decode_rules(".a%,%,2");
        let rule = parsed.table.iter().next().unwrap();
        assert_eq!(rule.replacement.as_deref(), Some(""));
        assert_eq!(decode(".a", &parsed.table), "");
    }

    #[test]
    fn boundaries_are_stripped() {
        assert_eq!(run("", "#ab#c#"), "abc");
        // Even when a rule emits one.
        assert_eq!(run("x%,#y#,1", "x"), "y");
    }

    #[test]
    fn unmatched_characters_copy_verbatim() {
        assert_eq!(run("ka%,ක,2", "-ka?"), "-ක?");
    }

    #[test]
    fn empty_input() {
        assert_eq!(run("ka%,ක,2", ""), "");
    }

    #[test]
    fn observer_reports_elision() {
        let parsed = parse_decode_rules("#%,(null),1\nka%,ක,2");
        let mut emitted = Vec::new();
        decode_with("#ka#", &parsed.table, |step| {
            emitted.push(step.emitted.map(str::to_string))
        });
        assert_eq!(emitted, vec![None, Some("ක".to_string()), None]);
    }
}
