use std::sync::OnceLock;

use crate::dict::{DictEntry, DictionaryTable};
use crate::lang::Lang;
use crate::rules::{parse_decode_rules, parse_encode_rules};
use crate::settings::Settings;
use crate::tables::TranslationTables;

/// Bundled tables, built once per test binary.
pub fn builtin() -> &'static TranslationTables {
    static TABLES: OnceLock<TranslationTables> = OnceLock::new();
    TABLES.get_or_init(TranslationTables::builtin)
}

/// Minimal en → si tables with a hand-built dictionary.
pub fn tables_with_dictionary(entries: &[(&str, &str, bool)]) -> TranslationTables {
    let encode = parse_encode_rules("0,,#%,1,#\n0,,a%,1,a\n0,,k%,1,k");
    let decode = parse_decode_rules(".a%,(null),2\nka%,ක,2\nk%,ක්,1\na%,අ,1");
    let dictionary: DictionaryTable = entries
        .iter()
        .map(|&(src, dst, name)| DictEntry::new(src, dst, name))
        .collect();
    TranslationTables::new(Settings::default())
        .with_encode_rules(Lang::English, encode.table)
        .with_decode_rules(Lang::Sinhala, decode.table)
        .with_dictionary(Lang::English, Lang::Sinhala, dictionary)
}
