//! Error types for font conversion.

use std::{io, path::PathBuf, result};

/// Errors that abort a conversion run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid metadata in '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("unsupported root element '{0}', expected 'svg'")]
    UnsupportedRoot(String),

    #[error("invalid font-face bbox '{0}', expected four integers")]
    InvalidBoundingBox(String),

    #[error("invalid codepoint '{codepoint}' for glyph '{glyph}'")]
    InvalidCodepoint { glyph: String, codepoint: String },

    #[error("font has {0} glyphs to render but no font-face bbox")]
    MissingBoundingBox(usize),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = result::Result<T, Error>;
