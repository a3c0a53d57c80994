//! Errors raised while loading catalog files.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised by the JSON loaders.
#[derive(Debug, Error)]
pub enum DataError {
    /// Opening the file failed.
    #[error("failed to open {kind} at {path}")]
    Open {
        /// What was being loaded, e.g. `career catalog`.
        kind: &'static str,
        /// Requested path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The file was not valid JSON for the expected shape, or failed
    /// validation while decoding.
    #[error("failed to parse {kind} at {path}")]
    Parse {
        /// What was being loaded.
        kind: &'static str,
        /// Requested path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}
