use std::path::PathBuf;

use clap::{Parser, Subcommand};

use translit_cli::commands::{config_ops, rule_ops};
use translit_cli::trace_init::init_tracing;
use translit_core::{Gender, Lang};

#[derive(Parser)]
#[command(name = "ruletool", about = "Translit rule table diagnostics")]
struct Cli {
    /// Enable debug tracing on stderr
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load every table and report sizes and rejected records
    Check {
        /// Directory holding the rule and mapping files (default: bundled tables)
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Show how a single word is translated
    Explain {
        /// Word to explain
        word: String,
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
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug, false);

    match cli.command {
        Command::Check { data } => rule_ops::check(data.as_deref()),
        Command::Explain {
            word,
            source,
            target,
            gender,
            data,
            json,
        } => rule_ops::explain(&word, source, target, gender, data.as_deref(), json),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
