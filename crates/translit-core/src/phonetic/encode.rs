use std::iter;

use tracing::{debug, debug_span, trace};

use super::{Step, BOUNDARY};
use crate::lang::Gender;
use crate::rules::{EncodeRule, RuleTable};
use crate::settings::PhoneticSettings;

/// Encode `word` into the phonetic pivot.
pub fn encode(
    word: &str,
    gender: Gender,
    rules: &RuleTable<EncodeRule>,
    phonetic: &PhoneticSettings,
) -> String {
    encode_with(word, gender, rules, phonetic, |_| {})
}

/// [`encode`], reporting every loop iteration to `observe`.
pub fn encode_with<F>(
    word: &str,
    gender: Gender,
    rules: &RuleTable<EncodeRule>,
    phonetic: &PhoneticSettings,
    mut observe: F,
) -> String
where
    F: FnMut(Step<'_>),
{
    let _span = debug_span!("encode", word, %gender).entered();

    let input: Vec<char> = iter::once(BOUNDARY)
        .chain(word.chars())
        .chain(iter::once(BOUNDARY))
        .collect();
    let mut out = String::with_capacity(input.len() * 2);
    let mut cursor = 0;

    while cursor < input.len() {
        let remaining = &input[cursor..];
        match rules.find_for(remaining, gender) {
            Some(rule) => {
                let glued = append_with_glue(&mut out, &rule.replacement, phonetic);
                let consumed = rule.consume.get().min(remaining.len());
                trace!(
                    pattern = rule.pattern.as_str(),
                    replacement = rule.replacement.as_str(),
                    glued,
                    "rule matched"
                );
                observe(Step {
                    remaining,
                    pattern: Some(rule.pattern.as_str()),
                    emitted: Some(rule.replacement.as_str()),
                    glued,
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

    debug!(phonetic = %out);
    out
}

/// Append `chunk`, first inserting the glue segment when the output ends on
/// a consonant and the chunk does not start with a vowel.
fn append_with_glue(out: &mut String, chunk: &str, phonetic: &PhoneticSettings) -> bool {
    let needs_glue = match out.chars().next_back() {
        Some(last) => {
            !phonetic.is_end_vowel(last)
                && chunk
                    .chars()
                    .next()
                    .map_or(true, |first| !phonetic.is_start_vowel(first))
        }
        None => false,
    };
    if needs_glue {
        out.push_str(&phonetic.glue);
    }
    out.push_str(chunk);
    needs_glue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::parse_encode_rules;
    use crate::settings::Settings;

    fn run(rules: &str, word: &str, gender: Gender) -> String {
        let parsed = parse_encode_rules(rules);
        assert!(parsed.rejected.is_empty());
        encode(word, gender, &parsed.table, &Settings::default().phonetic)
    }

    #[test]
    fn wraps_word_in_boundaries() {
        // No rules: every character is copied verbatim.
        assert_eq!(run("", "abc", Gender::Unspecified), "#abc#");
        assert_eq!(run("", "", Gender::Unspecified), "##");
    }

    #[test]
    fn glue_between_consonants() {
        let rules = "0,,#%,1,#\n0,,k%,1,k\n0,,a%,1,a\n0,,n%,1,n";
        assert_eq!(run(rules, "nk", Gender::Unspecified), "#n.ak.a#");
        assert_eq!(run(rules, "ka", Gender::Unspecified), "#ka#");
        assert_eq!(run(rules, "an", Gender::Unspecified), "#an.a#");
    }

    #[test]
    fn empty_chunk_after_consonant_gets_glue() {
        let rules = "0,,k%,1,k\n0,,x%,1,";
        assert_eq!(run(rules, "kx", Gender::Unspecified), "#k.a#");
    }

    #[test]
    fn verbatim_copy_skips_glue() {
        let rules = "0,,#%,1,#\n0,,k%,1,k";
        // '-' has no rule; it is copied without glue, but the following
        // rule chunk still sees '-' as a non-vowel.
        assert_eq!(run(rules, "k-k", Gender::Unspecified), "#k-.ak.a#");
    }

    #[test]
    fn gender_changes_outcome() {
        let rules = "0,,#%,1,#\n2,,a#,1,aa\n1,,a#,1,ah\n0,,a%,1,a\n0,,k%,1,k";
        assert_eq!(run(rules, "ka", Gender::Female), "#kaa#");
        assert_eq!(run(rules, "ka", Gender::Male), "#kah.a#");
        assert_eq!(run(rules, "ka", Gender::Unspecified), "#ka#");
    }

    #[test]
    fn consume_longer_than_input_clamps() {
        let rules = "0,,#%,9,x";
        assert_eq!(run(rules, "abc", Gender::Unspecified), "x");
    }

    #[test]
    fn observer_sees_every_step() {
        let parsed = parse_encode_rules("0,,#%,1,#\n0,,kh%,2,kh");
        let mut steps = Vec::new();
        let out = encode_with(
            "khz",
            Gender::Unspecified,
            &parsed.table,
            &Settings::default().phonetic,
            |step| {
                steps.push((
                    step.remaining.iter().collect::<String>(),
                    step.pattern.map(str::to_string),
                    step.consumed,
                ))
            },
        );
        assert_eq!(out, "#khz.a#");
        assert_eq!(
            steps,
            vec![
                ("#khz#".to_string(), Some("#%".to_string()), 1),
                ("khz#".to_string(), Some("kh%".to_string()), 2),
                ("z#".to_string(), None, 1),
                ("#".to_string(), Some("#%".to_string()), 1),
            ]
        );
    }
}
