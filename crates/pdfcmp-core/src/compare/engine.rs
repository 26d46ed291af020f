use crate::compare::aggregate::Aggregator;
use crate::compare::outcome::{Comparison, ComparisonRow};
use crate::error::PdfCmpError;
use crate::extraction::{ExtractedDocument, PositionedLine};
use crate::matching::{best_match, SpatialWindow};
use crate::options::{validate_options, CompareOptions};
use rayon::prelude::*;
use tracing::{debug, warn};

/// Compare a generated document against its original, line by line.
///
/// Every generated line yields exactly one row, in generated order. Matching
/// only reads `original`, so with `options.parallel` the lines are scored on
/// the rayon pool; the collected order is the same as the sequential path.
///
/// Fails with `OptionsInvalid` before any matching if `options` are out of
/// range.
pub fn compare_documents(
    original: &ExtractedDocument,
    generated: &ExtractedDocument,
    options: &CompareOptions,
) -> Result<Comparison, PdfCmpError> {
    validate_options(options)?;

    if original.is_empty() {
        warn!("original document has no text lines");
    }
    if generated.is_empty() {
        warn!("generated document has no text lines");
    }

    let window = SpatialWindow::from_options(options);
    let threshold = options.similarity_threshold;
    let originals = original.lines.as_slice();

    let rows: Vec<ComparisonRow> = if options.parallel {
        generated
            .lines
            .par_iter()
            .map(|g| compare_line(g, originals, window, threshold))
            .collect()
    } else {
        generated
            .lines
            .iter()
            .map(|g| compare_line(g, originals, window, threshold))
            .collect()
    };

    let mut aggregator = Aggregator::new();
    aggregator.extend(&rows);
    let summary = aggregator.finish(original.lines.len());

    debug!(
        gen_lines = summary.gen_line_count,
        orig_lines = summary.orig_line_count,
        matched = summary.matched_line_count,
        char_accuracy = summary.char_accuracy,
        line_accuracy = summary.line_accuracy,
        "comparison complete"
    );

    Ok(Comparison { rows, summary })
}

fn compare_line(
    generated: &PositionedLine,
    originals: &[PositionedLine],
    window: SpatialWindow,
    threshold: f64,
) -> ComparisonRow {
    let candidate = best_match(generated, originals, window);
    match candidate.original {
        Some(original) => ComparisonRow::matched(generated, original, candidate.score, threshold),
        None => ComparisonRow::unmatched(generated),
    }
}
