//! Error types for the word list to puzzle conversion.

use std::path::PathBuf;

/// Result type alias for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Coarse classification of a [`ConvertError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input could not be read or output could not be written.
    FileAccess,
    /// Input held no usable words.
    InvalidInput,
    /// YAML encoding or decoding failed.
    Format,
}

/// Errors produced while building or writing a puzzle document.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Failed to read a file from disk.
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a file to disk.
    #[error("Failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// No non-blank lines were found, so the ladder has no first or last word.
    #[error("{}", empty_input_message(.path))]
    EmptyInput { path: Option<PathBuf> },

    /// The document could not be encoded to or decoded from YAML.
    #[error("Invalid puzzle YAML: {0}")]
    DocumentFormat(#[from] serde_yaml::Error),
}

fn empty_input_message(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(
            "No words found in {}: the input must contain at least one non-blank line",
            path.display()
        ),
        None => "No words given: a ladder needs at least one word".to_string(),
    }
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileRead { .. } | Self::FileWrite { .. } => ErrorKind::FileAccess,
            Self::EmptyInput { .. } => ErrorKind::InvalidInput,
            Self::DocumentFormat(_) => ErrorKind::Format,
        }
    }

    /// Attach the input path to an [`ConvertError::EmptyInput`] raised without one.
    pub(crate) fn with_input_path(self, input: &std::path::Path) -> Self {
        match self {
            Self::EmptyInput { path: None } => Self::EmptyInput {
                path: Some(input.to_path_buf()),
            },
            other => other,
        }
    }
}

/// Read a whole UTF-8 file, reporting failures against `path`.
pub(crate) fn read_file(path: &std::path::Path) -> ConvertResult<String> {
    std::fs::read_to_string(path).map_err(|source| ConvertError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}
