use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PdfCmpError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to load comparison profile from {path}: {reason}")]
    OptionsLoad { path: PathBuf, reason: String },

    #[error("invalid comparison options: {0}")]
    OptionsInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PdfCmpError {
    /// True when the document itself could not be read. Fatal for that
    /// document's comparison; callers should not retry.
    pub fn is_extraction(&self) -> bool {
        matches!(
            self,
            PdfCmpError::Extraction(_)
                | PdfCmpError::PdftotextNotFound
                | PdfCmpError::PdftotextFailed { .. }
        )
    }
}
