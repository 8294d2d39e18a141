//! Rule-based transliteration between English, Sinhala and Tamil.
//!
//! A word is first looked up in the dictionary for its language pair. On a
//! miss it is encoded into a phonetic pivot with the source language's rule
//! table and rendered into the destination script with the destination's
//! phonetic table.

pub mod dict;
pub mod lang;
pub mod pattern;
pub mod phonetic;
pub mod rules;
pub mod settings;
pub mod tables;
pub mod translator;

#[cfg(test)]
pub(crate) mod testutil;

pub use lang::{Gender, Lang};
pub use settings::Settings;
pub use tables::TranslationTables;
pub use translator::{TranslateError, Translator};
