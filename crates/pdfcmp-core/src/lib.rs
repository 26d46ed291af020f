pub mod compare;
pub mod content;
pub mod diff;
pub mod error;
pub mod extraction;
pub mod highlight;
pub mod matching;
pub mod options;
pub mod text;

use compare::Comparison;
use content::ContentAccuracy;
use error::PdfCmpError;
use extraction::{ExtractedDocument, PdfExtractor};
use options::CompareOptions;
use tracing::debug;

pub use compare::compare_documents;

/// Main API entry point: compare a generated PDF against its original.
///
/// Both documents are extracted with `extractor`; an unreadable document
/// fails the whole comparison. Documents without text are compared normally
/// and produce a degenerate summary.
pub fn compare_pdfs(
    original_pdf: &[u8],
    generated_pdf: &[u8],
    extractor: &dyn PdfExtractor,
    options: &CompareOptions,
) -> Result<Comparison, PdfCmpError> {
    options::validate_options(options)?;

    let original = extract_document(original_pdf, extractor, "original")?;
    let generated = extract_document(generated_pdf, extractor, "generated")?;

    compare_documents(&original, &generated, options)
}

/// Extract one document, logging what came out.
pub fn extract_document(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    role: &str,
) -> Result<ExtractedDocument, PdfCmpError> {
    let doc = extractor.extract(pdf_bytes)?;
    debug!(
        role,
        backend = extractor.backend_name(),
        pages = doc.page_count,
        lines = doc.lines.len(),
        "document extracted"
    );
    Ok(doc)
}

/// Whether two PDFs contain the same words with the same multiplicities,
/// ignoring case, order, line and page structure.
pub fn words_equal_pdfs(
    pdf_a: &[u8],
    pdf_b: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<bool, PdfCmpError> {
    let a = extractor.extract_words(pdf_a)?;
    let b = extractor.extract_words(pdf_b)?;
    Ok(content::words_equal(&a, &b))
}

/// Share of the original PDF's words that appear in the generated PDF.
pub fn content_accuracy_pdfs(
    original_pdf: &[u8],
    generated_pdf: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<ContentAccuracy, PdfCmpError> {
    let original = extractor.extract_words(original_pdf)?;
    let generated = extractor.extract_words(generated_pdf)?;
    Ok(content::content_accuracy(&original, &generated))
}
