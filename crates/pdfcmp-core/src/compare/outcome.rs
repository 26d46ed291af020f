use crate::diff::{no_match_html, word_diff};
use crate::extraction::{BBox, PositionedLine};
use crate::text::char_edit_distance;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome class of one generated line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Matched with similarity at or above the threshold.
    Match,
    /// Matched, but below the threshold.
    Mismatch,
    /// No original line to compare with.
    NoMatch,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::Match => write!(f, "match"),
            ErrorType::Mismatch => write!(f, "mismatch"),
            ErrorType::NoMatch => write!(f, "no_match"),
        }
    }
}

/// Result for a single generated line.
///
/// Built only through [`ComparisonRow::matched`] and
/// [`ComparisonRow::unmatched`], which keep `error_type`, `matched` and the
/// optional original fields consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub gen_page: usize,
    pub gen_sequence_index: usize,
    pub gen_text: String,
    pub gen_annotated_html: String,
    pub gen_bbox: BBox,
    pub orig_page: Option<usize>,
    pub orig_sequence_index: Option<usize>,
    pub orig_text: Option<String>,
    pub orig_annotated_html: String,
    pub orig_bbox: Option<BBox>,
    /// Token-sort similarity in [0, 100].
    pub similarity: f64,
    /// Levenshtein distance between the raw texts.
    pub char_edit_distance: usize,
    /// Generated minus original top edge; `None` without an original.
    pub y_delta: Option<f64>,
    pub matched: bool,
    pub error_type: ErrorType,
}

impl ComparisonRow {
    /// Row for a generated line paired with its best original line.
    pub fn matched(
        generated: &PositionedLine,
        original: &PositionedLine,
        similarity: f64,
        threshold: f64,
    ) -> Self {
        let similarity = similarity.clamp(0.0, 100.0);
        let matched = similarity >= threshold;
        let diff = word_diff(&generated.raw_text, &original.raw_text);

        ComparisonRow {
            gen_page: generated.page,
            gen_sequence_index: generated.sequence_index,
            gen_text: generated.raw_text.clone(),
            gen_annotated_html: diff.generated_html,
            gen_bbox: generated.bbox,
            orig_page: Some(original.page),
            orig_sequence_index: Some(original.sequence_index),
            orig_text: Some(original.raw_text.clone()),
            orig_annotated_html: diff.original_html,
            orig_bbox: Some(original.bbox),
            similarity,
            char_edit_distance: char_edit_distance(&generated.raw_text, &original.raw_text),
            y_delta: Some(generated.bbox.y_min - original.bbox.y_min),
            matched,
            error_type: if matched {
                ErrorType::Match
            } else {
                ErrorType::Mismatch
            },
        }
    }

    /// Row for a generated line with no original counterpart. The whole
    /// line counts as wrong.
    pub fn unmatched(generated: &PositionedLine) -> Self {
        ComparisonRow {
            gen_page: generated.page,
            gen_sequence_index: generated.sequence_index,
            gen_text: generated.raw_text.clone(),
            gen_annotated_html: no_match_html(&generated.raw_text),
            gen_bbox: generated.bbox,
            orig_page: None,
            orig_sequence_index: None,
            orig_text: None,
            orig_annotated_html: String::new(),
            orig_bbox: None,
            similarity: 0.0,
            char_edit_distance: generated.raw_text.chars().count(),
            y_delta: None,
            matched: false,
            error_type: ErrorType::NoMatch,
        }
    }

    pub fn has_original(&self) -> bool {
        self.orig_page.is_some()
    }
}

/// Per-class row counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBreakdown {
    pub matches: usize,
    pub mismatches: usize,
    pub no_matches: usize,
}

/// Corpus-level figures for one document pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub gen_line_count: usize,
    pub orig_line_count: usize,
    /// Lines at or above the similarity threshold.
    pub matched_line_count: usize,
    /// `1 - total_char_diffs / total_chars`, rounded to 4 places.
    pub char_accuracy: f64,
    /// `matched_line_count / gen_line_count`, rounded to 4 places.
    pub line_accuracy: f64,
    pub total_char_diffs: usize,
    pub total_chars: usize,
    pub error_breakdown: ErrorBreakdown,
}

/// Full output of one comparison run, rows in generated-line order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub rows: Vec<ComparisonRow>,
    pub summary: ComparisonSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(page: usize, seq: usize, y: f64, text: &str) -> PositionedLine {
        PositionedLine::new(page, seq, text, BBox::new(72.0, y, 300.0, y + 12.0))
    }

    #[test]
    fn test_matched_row_above_threshold() {
        let g = line(1, 2, 110.0, "Second lime");
        let o = line(1, 2, 108.0, "Second line");
        let row = ComparisonRow::matched(&g, &o, 90.9, 75.0);
        assert!(row.matched);
        assert_eq!(row.error_type, ErrorType::Match);
        assert_eq!(row.char_edit_distance, 1);
        assert_eq!(row.y_delta, Some(2.0));
        assert_eq!(row.orig_sequence_index, Some(2));
        assert!(row.gen_annotated_html.contains("replace-generated"));
    }

    #[test]
    fn test_matched_row_below_threshold_is_mismatch() {
        let g = line(1, 1, 100.0, "abc");
        let o = line(1, 1, 100.0, "xyz");
        let row = ComparisonRow::matched(&g, &o, 0.0, 75.0);
        assert!(!row.matched);
        assert_eq!(row.error_type, ErrorType::Mismatch);
        assert!(row.has_original());
    }

    #[test]
    fn test_unmatched_row_invariants() {
        let g = line(3, 7, 100.0, "Orphan");
        let row = ComparisonRow::unmatched(&g);
        assert_eq!(row.error_type, ErrorType::NoMatch);
        assert!(!row.has_original());
        assert!(row.orig_text.is_none());
        assert!(row.y_delta.is_none());
        assert_eq!(row.char_edit_distance, 6);
        assert_eq!(
            row.gen_annotated_html,
            r#"<span class="error no-match">Orphan</span>"#
        );
    }

    #[test]
    fn test_error_type_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ErrorType::NoMatch).unwrap(),
            "\"no_match\""
        );
        assert_eq!(ErrorType::Mismatch.to_string(), "mismatch");
    }
}
