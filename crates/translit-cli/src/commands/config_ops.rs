use std::fs;
use std::process;

use translit_core::settings::{default_toml, parse_settings_toml};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: phonetic.glue={:?}, phonetic.end_vowels={:?}, phonetic.start_vowels={:?}, tokenizer.delimiters={:?}",
        s.phonetic.glue, s.phonetic.end_vowels, s.phonetic.start_vowels, s.tokenizer.delimiters
    );
}
