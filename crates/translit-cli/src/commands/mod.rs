pub mod config_ops;
pub mod rule_ops;
pub mod translate_ops;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use translit_core::settings::{parse_settings_toml, SettingsError};
use translit_core::tables::{LoadReport, TablesError};
use translit_core::{Settings, TranslationTables};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Tables(#[from] TablesError),
}

/// Build the tables for a command: the bundled set unless `data` names a
/// directory, with default settings unless `settings` names a TOML file.
pub fn load_tables(
    data: Option<&Path>,
    settings: Option<&Path>,
) -> Result<(TranslationTables, LoadReport), LoadError> {
    let settings = match settings {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| LoadError::ReadSettings {
                path: path.to_path_buf(),
                source,
            })?;
            parse_settings_toml(&text)?
        }
        None => Settings::default(),
    };

    match data {
        Some(dir) => {
            debug!(dir = %dir.display(), "loading tables");
            Ok(TranslationTables::load_dir(dir, settings)?)
        }
        None => Ok((
            TranslationTables::builtin_with(settings),
            LoadReport::default(),
        )),
    }
}
