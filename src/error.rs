//! Error types for parsing and conversion

use std::io;

use thiserror::Error;

/// Error raised while reading INI text.
///
/// Every variant carries the source label (usually the file path) and the
/// 1-based line number where parsing stopped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("{source_name}:{line}: key/value line before any section header: {text:?}")]
    MissingSectionHeader {
        source_name: String,
        line: usize,
        text: String,
    },

    #[error("{source_name}:{line}: expected `key = value` or `[section]`, found {text:?}")]
    InvalidLine {
        source_name: String,
        line: usize,
        text: String,
    },

    #[error("{source_name}:{line}: empty section name")]
    EmptySectionName { source_name: String, line: usize },

    #[error("{source_name}:{line}: empty key in {text:?}")]
    EmptyKey {
        source_name: String,
        line: usize,
        text: String,
    },
}

/// Error raised while expanding `%(name)s` references.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InterpolationError {
    #[error("[{section}] {key}: bad interpolation syntax near {rest:?} (use %% for a literal %)")]
    Syntax {
        section: String,
        key: String,
        rest: String,
    },

    #[error("[{section}] {key}: references unknown key {reference:?}")]
    Missing {
        section: String,
        key: String,
        reference: String,
    },

    #[error("[{section}] {key}: interpolation nested deeper than {max_depth} levels")]
    Depth {
        section: String,
        key: String,
        max_depth: usize,
    },
}

/// Top-level error for a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    #[error("{var}: value contains a NUL byte and cannot be quoted for the shell")]
    Unquotable { var: String },
}
