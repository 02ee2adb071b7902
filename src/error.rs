use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid output path: {0} would overwrite the input file")]
    InvalidOutputPath(PathBuf),

    #[error("Unsupported format: {0}. Supported formats: jpeg, png, gif")]
    UnsupportedFormat(String),

    #[error("Corrupt image: {path}: {source}")]
    CorruptImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Write failed: {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Encode failed: {path}: {reason}")]
    Encode { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CompressionError>;
