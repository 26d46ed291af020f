use crate::compare::outcome::{ComparisonRow, ComparisonSummary, ErrorBreakdown, ErrorType};

/// Accumulates per-line outcomes into corpus-level accuracy figures.
///
/// Every row adds at least one character to the denominator. A row with an
/// original adds `max(len(gen), len(orig))` and its edit distance; a row
/// without one adds `len(gen)` to both sides.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    rows: usize,
    matched_lines: usize,
    total_chars: usize,
    total_char_diffs: usize,
    breakdown: ErrorBreakdown,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, row: &ComparisonRow) {
        self.rows += 1;
        let gen_len = row.gen_text.chars().count();

        match &row.orig_text {
            Some(orig) => {
                let orig_len = orig.chars().count();
                self.total_chars += gen_len.max(orig_len).max(1);
                self.total_char_diffs += row.char_edit_distance;
            }
            None => {
                self.total_chars += gen_len.max(1);
                self.total_char_diffs += gen_len;
            }
        }

        if row.matched {
            self.matched_lines += 1;
        }
        match row.error_type {
            ErrorType::Match => self.breakdown.matches += 1,
            ErrorType::Mismatch => self.breakdown.mismatches += 1,
            ErrorType::NoMatch => self.breakdown.no_matches += 1,
        }
    }

    /// Derive the summary. `orig_line_count` is informational only.
    pub fn finish(&self, orig_line_count: usize) -> ComparisonSummary {
        // diffs never exceed chars (edit distance <= longer length), so this
        // stays in [0, 1] and is not clamped
        let char_accuracy = if self.total_chars == 0 {
            0.0
        } else {
            1.0 - self.total_char_diffs as f64 / self.total_chars as f64
        };
        let line_accuracy = if self.rows == 0 {
            0.0
        } else {
            self.matched_lines as f64 / self.rows as f64
        };

        ComparisonSummary {
            gen_line_count: self.rows,
            orig_line_count,
            matched_line_count: self.matched_lines,
            char_accuracy: round4(char_accuracy),
            line_accuracy: round4(line_accuracy),
            total_char_diffs: self.total_char_diffs,
            total_chars: self.total_chars,
            error_breakdown: self.breakdown,
        }
    }
}

impl<'a> Extend<&'a ComparisonRow> for Aggregator {
    fn extend<I: IntoIterator<Item = &'a ComparisonRow>>(&mut self, rows: I) {
        for row in rows {
            self.record(row);
        }
    }
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
