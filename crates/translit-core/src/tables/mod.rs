//! The complete, immutable set of rule and dictionary tables.
//!
//! Tables are built once, either from the bundled sample data or from a
//! directory holding the same nine files, and only read afterwards.

mod builtin;

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::dict::{parse_mapping, DictRecordError, DictionaryTable};
use crate::lang::Lang;
use crate::rules::{
    parse_decode_rules, parse_encode_rules, DecodeRule, EncodeRule, RuleError, RuleTable,
};
use crate::settings::Settings;

/// Script → phonetic rule files.
pub const ENCODE_FILES: [(Lang, &str); 3] = [
    (Lang::English, "rules-en.txt"),
    (Lang::Sinhala, "rules-si.txt"),
    (Lang::Tamil, "rules-ta.txt"),
];

/// Phonetic → script rule files.
pub const DECODE_FILES: [(Lang, &str); 3] = [
    (Lang::Sinhala, "phonetic-si.txt"),
    (Lang::Tamil, "phonetic-ta.txt"),
    (Lang::English, "phonetic-en.txt"),
];

/// Mapping files; each fills the listed direction and its reverse.
pub const MAPPING_FILES: [(Lang, Lang, &str); 3] = [
    (Lang::English, Lang::Sinhala, "en-to-si.txt"),
    (Lang::English, Lang::Tamil, "en-to-ta.txt"),
    (Lang::Sinhala, Lang::Tamil, "si-to-ta.txt"),
];

#[derive(Debug, thiserror::Error)]
pub enum TablesError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no bundled table named {0}")]
    MissingBuiltin(String),
    #[error("translation tables already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    Rule(RuleError),
    Dict(DictRecordError),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Rule(e) => write!(f, "{e}"),
            RecordError::Dict(e) => write!(f, "{e}"),
        }
    }
}

/// A record dropped while loading, with the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    pub file: &'static str,
    pub error: RecordError,
}

impl fmt::Display for RejectedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file, self.error)
    }
}

#[derive(Debug, Default)]
pub struct LoadReport {
    pub rejected: Vec<RejectedRecord>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Tables used for one `(source, destination)` pair.
#[derive(Debug, Clone, Copy)]
pub struct TableSet<'a> {
    pub dictionary: &'a DictionaryTable,
    pub encode: &'a RuleTable<EncodeRule>,
    pub decode: &'a RuleTable<DecodeRule>,
}

#[derive(Debug, Clone, Default)]
pub struct TranslationTables {
    settings: Settings,
    encode: HashMap<Lang, RuleTable<EncodeRule>>,
    decode: HashMap<Lang, RuleTable<DecodeRule>>,
    dictionaries: HashMap<(Lang, Lang), DictionaryTable>,
}

impl TranslationTables {
    /// Empty tables; no pair is supported until rules are added.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            encode: HashMap::new(),
            decode: HashMap::new(),
            dictionaries: HashMap::new(),
        }
    }

    pub fn with_encode_rules(mut self, lang: Lang, rules: RuleTable<EncodeRule>) -> Self {
        self.encode.insert(lang, rules);
        self
    }

    pub fn with_decode_rules(mut self, lang: Lang, rules: RuleTable<DecodeRule>) -> Self {
        self.decode.insert(lang, rules);
        self
    }

    pub fn with_dictionary(mut self, src: Lang, dst: Lang, table: DictionaryTable) -> Self {
        self.dictionaries.insert((src, dst), table);
        self
    }

    /// The sample tables bundled with the crate, with default settings.
    pub fn builtin() -> Self {
        Self::builtin_with(Settings::default())
    }

    /// The bundled tables under custom settings.
    pub fn builtin_with(settings: Settings) -> Self {
        let (tables, report) = Self::load_from(settings, |name| {
            builtin::file(name)
                .map(Cow::Borrowed)
                .ok_or_else(|| TablesError::MissingBuiltin(name.to_string()))
        })
        .expect("bundled tables must be present");
        debug_assert!(report.is_clean(), "bundled tables must be well formed");
        tables
    }

    /// Load the nine table files from `dir`.
    pub fn load_dir(dir: &Path, settings: Settings) -> Result<(Self, LoadReport), TablesError> {
        Self::load_from(settings, |name| {
            let path = dir.join(name);
            fs::read_to_string(&path)
                .map(Cow::Owned)
                .map_err(|source| TablesError::Io { path, source })
        })
    }

    fn load_from<'s>(
        settings: Settings,
        read: impl Fn(&'static str) -> Result<Cow<'s, str>, TablesError>,
    ) -> Result<(Self, LoadReport), TablesError> {
        let mut tables = Self::new(settings);
        let mut report = LoadReport::default();

        for (lang, file) in ENCODE_FILES {
            let parsed = parse_encode_rules(&read(file)?);
            report.extend(file, parsed.rejected.into_iter().map(RecordError::Rule));
            debug!(file, rules = parsed.table.len(), "loaded encode rules");
            tables.encode.insert(lang, parsed.table);
        }

        for (lang, file) in DECODE_FILES {
            let parsed = parse_decode_rules(&read(file)?);
            report.extend(file, parsed.rejected.into_iter().map(RecordError::Rule));
            debug!(file, rules = parsed.table.len(), "loaded decode rules");
            tables.decode.insert(lang, parsed.table);
        }

        for (src, dst, file) in MAPPING_FILES {
            let parsed = parse_mapping(&read(file)?);
            report.extend(file, parsed.rejected.into_iter().map(RecordError::Dict));
            debug!(
                file,
                names = parsed.forward.names_len(),
                other = parsed.forward.other_len(),
                "loaded mappings"
            );
            tables.dictionaries.insert((src, dst), parsed.forward);
            tables.dictionaries.insert((dst, src), parsed.reverse);
        }

        if !report.is_clean() {
            warn!(rejected = report.rejected.len(), "some table records were rejected");
        }
        Ok((tables, report))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Tables for `src → dst`, or `None` when the pair is not supported.
    ///
    /// A language is never translated into itself.
    pub fn resolve(&self, src: Lang, dst: Lang) -> Option<TableSet<'_>> {
        if src == dst {
            return None;
        }
        Some(TableSet {
            dictionary: self.dictionaries.get(&(src, dst))?,
            encode: self.encode.get(&src)?,
            decode: self.decode.get(&dst)?,
        })
    }

    pub fn supports(&self, src: Lang, dst: Lang) -> bool {
        self.resolve(src, dst).is_some()
    }

    pub fn encode_rules(&self, lang: Lang) -> Option<&RuleTable<EncodeRule>> {
        self.encode.get(&lang)
    }

    pub fn decode_rules(&self, lang: Lang) -> Option<&RuleTable<DecodeRule>> {
        self.decode.get(&lang)
    }

    pub fn dictionary(&self, src: Lang, dst: Lang) -> Option<&DictionaryTable> {
        self.dictionaries.get(&(src, dst))
    }
}

impl LoadReport {
    fn extend(&mut self, file: &'static str, errors: impl Iterator<Item = RecordError>) {
        self.rejected
            .extend(errors.map(|error| RejectedRecord { file, error }));
    }
}

static GLOBAL: OnceLock<TranslationTables> = OnceLock::new();

/// Install process-wide tables. Must happen before the first [`global`] call.
pub fn install(tables: TranslationTables) -> Result<(), TablesError> {
    GLOBAL
        .set(tables)
        .map_err(|_| TablesError::AlreadyInitialized)
}

/// Process-wide tables, falling back to [`TranslationTables::builtin`] when
/// nothing was installed.
pub fn global() -> &'static TranslationTables {
    GLOBAL.get_or_init(TranslationTables::builtin)
}
