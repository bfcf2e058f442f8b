use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DeepIndexError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("cannot read folder {path}: {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    InvalidInput(String),

    #[error("unknown extraction backend '{0}'. Available: auto, pdftotext, lopdf")]
    UnknownBackend(String),

    #[error("no result #{index} (the current search has {len} result(s))")]
    HitOutOfRange { index: usize, len: usize },

    #[error("failed to export results to {path}: {reason}")]
    Export { path: PathBuf, reason: String },

    #[error("cannot open file: {0}")]
    ViewerLaunch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
