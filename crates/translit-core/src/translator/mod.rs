//! Dictionary-first word and line translation.

mod tokenize;

pub use tokenize::Tokens;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::dict::normalize;
use crate::lang::{Gender, Lang};
use crate::phonetic::{self, Step};
use crate::tables::{TableSet, TranslationTables};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("unsupported language pair: {src} -> {dst}")]
    UnsupportedPair { src: Lang, dst: Lang },
}

/// Where a translated word came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Dictionary,
    Phonetic,
}

/// Full diagnostic result for a single word.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub word: String,
    pub src: Lang,
    pub dst: Lang,
    pub gender: Gender,
    pub origin: Origin,
    /// Intermediate pivot, present only for the phonetic path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    pub encode_steps: Vec<ExplainStep>,
    pub decode_steps: Vec<ExplainStep>,
    pub output: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExplainStep {
    pub remaining: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// `None` when the rule elided its match.
    pub emitted: Option<String>,
    pub glued: bool,
    pub consumed: usize,
}

impl From<Step<'_>> for ExplainStep {
    fn from(step: Step<'_>) -> Self {
        Self {
            remaining: step.remaining.iter().collect(),
            pattern: step.pattern.map(str::to_string),
            emitted: step.emitted.map(str::to_string),
            glued: step.glued,
            consumed: step.consumed,
        }
    }
}

/// Translates words and lines using a borrowed, immutable table set.
///
/// Cheap to copy and safe to share between threads.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'t> {
    tables: &'t TranslationTables,
}

impl<'t> Translator<'t> {
    pub fn new(tables: &'t TranslationTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'t TranslationTables {
        self.tables
    }

    fn resolve(&self, src: Lang, dst: Lang) -> Result<TableSet<'t>, TranslateError> {
        self.tables
            .resolve(src, dst)
            .ok_or(TranslateError::UnsupportedPair { src, dst })
    }

    /// Translate one word, preferring the dictionary over the phonetic rules.
    ///
    /// Without a gender the general vocabulary is consulted, with one the
    /// person-name map.
    pub fn translate_word(
        &self,
        word: &str,
        src: Lang,
        dst: Lang,
        gender: Gender,
    ) -> Result<String, TranslateError> {
        let set = self.resolve(src, dst)?;
        Ok(self.word_with(&set, word, gender, |_| {}))
    }

    fn word_with<E>(&self, set: &TableSet<'t>, word: &str, gender: Gender, on_encode: E) -> String
    where
        E: FnMut(Step<'_>),
    {
        self.render(set, word, gender, on_encode, |_| {}).output
    }

    /// Dictionary lookup, then encode and decode on a miss. The observers
    /// only see steps of the phonetic path.
    fn render<E, D>(
        &self,
        set: &TableSet<'t>,
        word: &str,
        gender: Gender,
        on_encode: E,
        on_decode: D,
    ) -> Rendered
    where
        E: FnMut(Step<'_>),
        D: FnMut(Step<'_>),
    {
        let _span = debug_span!("translate_word", word, %gender).entered();
        let word = normalize(word);

        if let Some(hit) = lookup(set, &word, gender) {
            return Rendered {
                origin: Origin::Dictionary,
                phonetic: None,
                output: hit.to_string(),
            };
        }
        debug!("dictionary lookup failed for {word}");

        let phonetic_settings = &self.tables.settings().phonetic;
        let pivot = phonetic::encode_with(&word, gender, set.encode, phonetic_settings, on_encode);
        let output = phonetic::decode_with(&pivot, set.decode, on_decode);
        Rendered {
            origin: Origin::Phonetic,
            phonetic: Some(pivot),
            output,
        }
    }

    /// Translate a phrase token by token.
    ///
    /// Delimiters and other single-character tokens are copied unchanged;
    /// everything else goes through [`translate_word`](Self::translate_word).
    pub fn translate_line(
        &self,
        text: &str,
        src: Lang,
        dst: Lang,
        gender: Gender,
    ) -> Result<String, TranslateError> {
        let _span = debug_span!("translate_line", %src, %dst, %gender).entered();
        let set = self.resolve(src, dst)?;

        let mut out = String::with_capacity(text.len() * 2);
        for token in Tokens::new(text, &self.tables.settings().tokenizer) {
            if token.chars().nth(1).is_some() {
                out.push_str(&self.word_with(&set, token, gender, |_| {}));
            } else {
                out.push_str(token);
            }
        }
        Ok(out)
    }

    /// Translate one word and record how the result was produced.
    pub fn explain_word(
        &self,
        word: &str,
        src: Lang,
        dst: Lang,
        gender: Gender,
    ) -> Result<Explanation, TranslateError> {
        let set = self.resolve(src, dst)?;
        let mut encode_steps = Vec::new();
        let mut decode_steps = Vec::new();
        let rendered = self.render(
            &set,
            word,
            gender,
            |step| encode_steps.push(ExplainStep::from(step)),
            |step| decode_steps.push(ExplainStep::from(step)),
        );

        Ok(Explanation {
            word: normalize(word).into_owned(),
            src,
            dst,
            gender,
            origin: rendered.origin,
            phonetic: rendered.phonetic,
            encode_steps,
            decode_steps,
            output: rendered.output,
        })
    }
}

struct Rendered {
    origin: Origin,
    phonetic: Option<String>,
    output: String,
}

fn lookup<'a>(set: &TableSet<'a>, word: &str, gender: Gender) -> Option<&'a str> {
    set.dictionary.lookup(word, gender != Gender::Unspecified)
}
