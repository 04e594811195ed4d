//! Error types for bundling.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while assembling or writing the bundled document.
#[derive(Debug, Error)]
pub enum BundleError {
    /// The tags directory could not be enumerated.
    #[error("Failed to read tags directory {}: {source}", path.display())]
    TagsDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file did not contain the expected YAML structure.
    #[error("Invalid YAML in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The bundled document could not be serialized.
    #[error("Failed to serialize bundled document: {0}")]
    Serialize(#[source] serde_yaml::Error),

    /// The output file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
