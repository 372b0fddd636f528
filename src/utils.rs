use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tempfile::NamedTempFile;

use crate::error::ConvertError;

pub const DEFAULT_JOURNAL_NAME: &str = "journal.txt";
pub const PHOTOS_DIR_NAME: &str = "photos";

/// Configuration required to run a conversion.
/// This decouples the logic from how the arguments were parsed (CLI/Config file).
#[derive(Clone, Debug)]
pub struct ConvertConfig {
    pub source_path: PathBuf,
    pub target_dir: PathBuf,
    pub journal_name: String,
    pub verbose: bool,
    pub quiet: bool,
}

impl ConvertConfig {
    pub fn new(source_path: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            target_dir: target_dir.into(),
            journal_name: DEFAULT_JOURNAL_NAME.to_string(),
            verbose: false,
            quiet: true,
        }
    }

    pub fn journal_path(&self) -> PathBuf {
        self.target_dir.join(&self.journal_name)
    }
}

/// Settings persisted in `config.toml`.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub target_dir: Option<PathBuf>,
    pub journal_name: Option<String>,
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("dayone-to-jrnl/config.toml"))
}

/// Load the config file: the explicit path if given (it must exist), otherwise the
/// default location if present, otherwise an empty config.
pub fn load_file_config(explicit_path: Option<&Path>) -> Result<FileConfig, ConvertError> {
    let path = match explicit_path {
        Some(p) if !p.exists() => {
            return Err(ConvertError::Config(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
        Some(p) => Some(p.to_path_buf()),
        None => default_config_path().filter(|p| p.exists()),
    };

    match path {
        None => Ok(FileConfig::default()),
        Some(p) => read_file_config(&p),
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConvertError> {
    let content = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
    toml::from_str(&content).map_err(|e| {
        ConvertError::Config(format!("Failed to parse config {}: {}", path.display(), e))
    })
}

/// Merge command-line values over the config file: CLI > config > default.
/// There is no default target directory.
pub fn resolve_config(
    source_path: PathBuf,
    cli_target_dir: Option<PathBuf>,
    cli_journal_name: Option<String>,
    file_cfg: FileConfig,
) -> Result<ConvertConfig, ConvertError> {
    let target_dir = cli_target_dir.or(file_cfg.target_dir).ok_or_else(|| {
        ConvertError::Config(
            "No target directory given.\nUsage: dayone-to-jrnl SOURCE_FILE TARGET_DIR"
                .to_string(),
        )
    })?;

    let journal_name = cli_journal_name
        .or(file_cfg.journal_name)
        .unwrap_or_else(|| DEFAULT_JOURNAL_NAME.to_string());

    Ok(ConvertConfig {
        journal_name,
        ..ConvertConfig::new(source_path, target_dir)
    })
}

/// Check the filesystem preconditions before anything is read or written.
pub fn validate_paths(config: &ConvertConfig) -> Result<(), ConvertError> {
    if !config.source_path.is_file() {
        return Err(ConvertError::Config(format!(
            "Source file does not exist: {}",
            config.source_path.display()
        )));
    }

    if !config.target_dir.is_dir() {
        return Err(ConvertError::Config(format!(
            "Target directory is not a directory: {}",
            config.target_dir.display()
        )));
    }

    if !is_writable(&config.target_dir) {
        return Err(ConvertError::Config(format!(
            "Target directory is not writable: {}",
            config.target_dir.display()
        )));
    }

    if config.journal_name.is_empty() || Path::new(&config.journal_name).components().count() != 1 {
        return Err(ConvertError::Config(format!(
            "Journal name must be a plain file name, got {:?}",
            config.journal_name
        )));
    }

    Ok(())
}

/// Permission bits say nothing about ownership, so try creating a file.
fn is_writable(dir: &Path) -> bool {
    NamedTempFile::new_in(dir).is_ok()
}
