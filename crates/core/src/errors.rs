use std::path::PathBuf;

use thiserror::Error;

/// Failure to bring the catalog into memory. Fatal at startup.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("catalog source was not found: `{0}`")]
    Missing(PathBuf),
    #[error("could not read catalog source `{path}`: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog source `{path}`: {source}")]
    Csv { path: PathBuf, source: csv::Error },
    #[error("catalog source `{path}` is missing required column `{column}`")]
    MissingColumn { path: PathBuf, column: &'static str },
    #[error("catalog source `{path}` line {line}: invalid `{column}` value `{value}`")]
    InvalidField { path: PathBuf, line: u64, column: &'static str, value: String },
}

/// Problems with an incoming chat request body.
///
/// These never reach the caller: the handler logs them and answers as if the
/// message were empty.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("malformed request: {0}")]
    MalformedRequest(String),
}

impl DataLoadError {
    /// Short machine-readable classification used by operator tooling.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Missing(_) => "catalog_missing",
            Self::Read { .. } => "catalog_unreadable",
            Self::Csv { .. } | Self::MissingColumn { .. } | Self::InvalidField { .. } => {
                "catalog_malformed"
            }
        }
    }
}
