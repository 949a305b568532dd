// src/error.rs
//
// Errors raised while collecting inputs (snapshot documents, config files).
// Rule evaluation itself is total and never fails.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),

    /// Only .json, .yaml and .yml documents are understood.
    #[error("unsupported document format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("invalid field `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl InputError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type InputResult<T> = Result<T, InputError>;
