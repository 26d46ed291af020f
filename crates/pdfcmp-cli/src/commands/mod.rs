pub mod compare;
pub mod content;
pub mod extract;
pub mod presets;

use pdfcmp_core::error::PdfCmpError;
use pdfcmp_core::extraction::pdftotext::PdftotextExtractor;
use pdfcmp_core::extraction::ExtractedDocument;
use std::path::Path;

/// Load a document from a PDF, or from a JSON extraction saved earlier.
pub fn load_document(path: &Path, role: &str) -> Result<ExtractedDocument, PdfCmpError> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let bytes = std::fs::read(path)?;
    if is_json {
        let doc: ExtractedDocument = serde_json::from_slice(&bytes)?;
        tracing::debug!(role, path = %path.display(), lines = doc.lines.len(), "loaded saved extraction");
        Ok(doc)
    } else {
        let extractor = PdftotextExtractor::new();
        pdfcmp_core::extract_document(&bytes, &extractor, role)
    }
}
