use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a conversion.
///
/// Configuration, parse and version errors are raised before anything is written.
/// `Io` errors can happen halfway through the journal and leave it partially appended.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{0}")]
    Config(String),

    #[error("Errors when parsing JSON file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown Day One data version: {}", found.as_deref().unwrap_or("<missing>"))]
    UnsupportedVersion { found: Option<String> },

    #[error("Invalid creationDate {value:?}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Unknown time zone {0:?}")]
    UnknownTimeZone(String),

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
