use std::fmt::Write as _;
use std::path::Path;
use std::process;

use translit_core::tables::LoadReport;
use translit_core::translator::{ExplainStep, Explanation, Origin};
use translit_core::{Gender, Lang, TranslationTables, Translator};

use super::load_tables;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn check(data: Option<&Path>) {
    let (tables, report) = die!(load_tables(data, None), "Error loading tables: {}");
    print!("{}", format_check(&tables, &report));
    if !report.is_clean() {
        process::exit(1);
    }
}

pub fn explain(word: &str, src: Lang, dst: Lang, gender: Gender, data: Option<&Path>, json: bool) {
    let (tables, _) = die!(load_tables(data, None), "Error loading tables: {}");
    let result = die!(
        Translator::new(&tables).explain_word(word, src, dst, gender),
        "Error: {}"
    );
    if json {
        let text = die!(serde_json::to_string_pretty(&result), "Error: {}");
        println!("{text}");
    } else {
        print!("{}", format_explanation(&result));
    }
}

/// Table sizes per language and pair, followed by every rejected record.
pub fn format_check(tables: &TranslationTables, report: &LoadReport) -> String {
    let mut out = String::new();
    for lang in Lang::ALL {
        let encode = tables.encode_rules(lang).map_or(0, |t| t.len());
        let decode = tables.decode_rules(lang).map_or(0, |t| t.len());
        let _ = writeln!(out, "{lang}: {encode} encode rules, {decode} decode rules");
    }
    for src in Lang::ALL {
        for dst in Lang::ALL {
            if let Some(dict) = tables.dictionary(src, dst) {
                let _ = writeln!(
                    out,
                    "{src} -> {dst}: {} names, {} other",
                    dict.names_len(),
                    dict.other_len()
                );
            }
        }
    }
    if report.is_clean() {
        out.push_str("OK: no rejected records\n");
    } else {
        let _ = writeln!(out, "{} rejected records:", report.rejected.len());
        for rejected in &report.rejected {
            let _ = writeln!(out, "  {rejected}");
        }
    }
    out
}

pub fn format_explanation(result: &Explanation) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "=== \"{}\" {} -> {} (gender {}) ===",
        result.word, result.src, result.dst, result.gender
    );

    match result.origin {
        Origin::Dictionary => out.push_str("dictionary hit\n"),
        Origin::Phonetic => {
            out.push_str("\nencode:\n");
            format_steps(&mut out, &result.encode_steps);
            if let Some(phonetic) = &result.phonetic {
                let _ = writeln!(out, "phonetic: {phonetic}");
            }
            out.push_str("\ndecode:\n");
            format_steps(&mut out, &result.decode_steps);
        }
    }

    let _ = writeln!(out, "\noutput: {}", result.output);
    out
}

fn format_steps(out: &mut String, steps: &[ExplainStep]) {
    for step in steps {
        let pattern = step.pattern.as_deref().unwrap_or("(verbatim)");
        let emitted = step.emitted.as_deref().unwrap_or("(null)");
        let glue = if step.glued { "  +glue" } else { "" };
        let _ = writeln!(
            out,
            "  {:<16} {:<10} -> {:<8} consume={}{}",
            step.remaining, pattern, emitted, step.consumed, glue
        );
    }
}
