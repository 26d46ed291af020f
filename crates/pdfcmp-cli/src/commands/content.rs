use pdfcmp_core::content;
use pdfcmp_core::error::PdfCmpError;
use std::path::Path;

use super::load_document;
use crate::output;

pub fn run(
    original_file: &Path,
    generated_file: &Path,
    output_format: &str,
) -> Result<(), PdfCmpError> {
    let original = load_document(original_file, "original")?.words();
    let generated = load_document(generated_file, "generated")?.words();

    let accuracy = content::content_accuracy(&original, &generated);
    let same_words = content::words_equal(&original, &generated);

    match output_format {
        "json" => output::json::print(&accuracy)?,
        _ => output::table::print_content(&accuracy, same_words),
    }

    Ok(())
}
