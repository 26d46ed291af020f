use pdfcmp_core::error::PdfCmpError;
use std::path::{Path, PathBuf};

use super::load_document;
use crate::output;

pub fn run(
    input_file: &Path,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), PdfCmpError> {
    let doc = load_document(input_file, "input")?;

    match output_file {
        Some(path) => {
            let json = serde_json::to_string_pretty(&doc)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} line(s) from {} page(s), written to {}",
                doc.lines.len(),
                doc.page_count,
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&doc)?,
            _ => output::table::print_extraction(&doc),
        },
    }

    Ok(())
}
