//! Error types for training, persistence and classification

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur anywhere in the library
#[derive(Error, Debug)]
pub enum LangIdError {
    #[error("cannot normalize a zero-magnitude vector")]
    DegenerateVector,

    #[error("language {label} has no trigrams (every text is shorter than 3 characters)")]
    DegenerateLanguage { label: String },

    #[error("malformed training record at {source_name}:{line}: {reason}")]
    MalformedRecord {
        source_name: String,
        line: u64,
        reason: String,
    },

    #[error("field at {source_name}:{line} has {len} characters, limit is {limit}")]
    FieldTooLarge {
        source_name: String,
        line: u64,
        len: usize,
        limit: usize,
    },

    #[error("training corpus contains no records")]
    EmptyCorpus,

    #[error("trained model contains no languages")]
    EmptyModel,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode model: {0}")]
    ModelEncode(String),

    #[error("failed to decode model {}: {reason}", path.display())]
    ModelDecode { path: PathBuf, reason: String },

    #[error("unsupported model format version {found} (expected {expected})")]
    ModelVersion { found: u32, expected: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl LangIdError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LangIdError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type LangIdResult<T> = Result<T, LangIdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = LangIdError::io(
            "/tmp/missing.bin",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.bin"), "got: {msg}");
    }

    #[test]
    fn test_malformed_record_message() {
        let err = LangIdError::MalformedRecord {
            source_name: "train.csv".into(),
            line: 7,
            reason: "missing language label".into(),
        };
        assert_eq!(
            err.to_string(),
            "malformed training record at train.csv:7: missing language label"
        );
    }
}
