use pdfcmp_core::compare::{Comparison, ComparisonRow, ComparisonSummary};
use pdfcmp_core::error::PdfCmpError;
use pdfcmp_core::highlight::Highlights;
use serde::Serialize;
use std::path::Path;

/// Full comparison result as written to JSON.
#[derive(Serialize)]
struct ComparisonReport<'a> {
    summary: &'a ComparisonSummary,
    rows: &'a [ComparisonRow],
    highlights: &'a Highlights,
}

impl<'a> ComparisonReport<'a> {
    fn new(comparison: &'a Comparison, highlights: &'a Highlights) -> Self {
        ComparisonReport {
            summary: &comparison.summary,
            rows: &comparison.rows,
            highlights,
        }
    }
}

pub fn print<T: Serialize>(value: &T) -> Result<(), PdfCmpError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

pub fn print_comparison(comparison: &Comparison, highlights: &Highlights) -> Result<(), PdfCmpError> {
    print(&ComparisonReport::new(comparison, highlights))
}

pub fn write_comparison(
    path: &Path,
    comparison: &Comparison,
    highlights: &Highlights,
) -> Result<(), PdfCmpError> {
    let json = serde_json::to_string_pretty(&ComparisonReport::new(comparison, highlights))?;
    std::fs::write(path, json)?;
    Ok(())
}
