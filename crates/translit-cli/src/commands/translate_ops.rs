use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use tracing::warn;
use translit_core::{Gender, Lang, Translator};

/// Translate `input` line by line into `output`.
///
/// Line terminators are stripped and rewritten as `\n`. Invalid UTF-8 is
/// replaced with U+FFFD and the line is still translated.
pub fn translate_stream<R: BufRead, W: Write>(
    translator: Translator<'_>,
    mut input: R,
    mut output: W,
    src: Lang,
    dst: Lang,
    gender: Gender,
) -> io::Result<()> {
    let mut raw = Vec::new();
    let mut line_no = 0;
    loop {
        raw.clear();
        if input.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        line_no += 1;
        let bytes = trim_line_end(&raw);
        let line = String::from_utf8_lossy(bytes);
        if let Cow::Owned(_) = line {
            warn!(line = line_no, "invalid UTF-8 replaced");
        }
        let translated = translator
            .translate_line(&line, src, dst, gender)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        writeln!(output, "{translated}")?;
    }
    output.flush()
}

fn trim_line_end(raw: &[u8]) -> &[u8] {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    raw.strip_suffix(b"\r").unwrap_or(raw)
}
