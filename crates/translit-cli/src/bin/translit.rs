use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use translit_cli::commands::{load_tables, translate_ops};
use translit_cli::trace_init::init_tracing;
use translit_core::{Gender, Lang, Translator};

/// Translate stdin line by line between English, Sinhala and Tamil.
#[derive(Parser)]
#[command(name = "translit", about = "Rule-based transliteration")]
struct Cli {
    /// Source language (en, si, ta)
    #[arg(short, long, default_value = "en")]
    source: Lang,
    /// Target language (en, si, ta)
    #[arg(short, long, default_value = "si")]
    target: Lang,
    /// Gender of person names (u, m, f)
    #[arg(short, long, default_value = "u")]
    gender: Gender,
    /// Directory holding the rule and mapping files (default: bundled tables)
    #[arg(long)]
    data: Option<PathBuf>,
    /// Settings TOML file
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Enable debug tracing on stderr
    #[arg(long)]
    debug: bool,
    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.log_json);

    let (tables, report) =
        load_tables(cli.data.as_deref(), cli.settings.as_deref()).unwrap_or_else(|e| {
            eprintln!("Error loading tables: {e}");
            process::exit(1);
        });
    for rejected in &report.rejected {
        eprintln!("warning: rejected {rejected}");
    }
    if !tables.supports(cli.source, cli.target) {
        eprintln!(
            "Error: unsupported language pair: {} -> {}",
            cli.source, cli.target
        );
        process::exit(1);
    }

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    if let Err(e) = translate_ops::translate_stream(
        Translator::new(&tables),
        stdin,
        stdout,
        cli.source,
        cli.target,
        cli.gender,
    ) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
