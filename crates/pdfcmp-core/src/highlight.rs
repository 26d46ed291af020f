use crate::compare::outcome::{ComparisonRow, ErrorType};
use crate::extraction::BBox;
use serde::{Deserialize, Serialize};

/// A region an annotation step should mark on one page of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub page: usize,
    pub line_index: usize,
    pub bbox: BBox,
    pub error_type: ErrorType,
    pub note: String,
}

/// Regions to mark in each document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Highlights {
    pub original: Vec<Highlight>,
    pub generated: Vec<Highlight>,
}

/// Collect regions for every row that is not a clean match.
///
/// The generated side gets one region per such row; the original side only
/// for rows that were paired with an original line.
pub fn collect_highlights(rows: &[ComparisonRow]) -> Highlights {
    let mut out = Highlights::default();

    for row in rows.iter().filter(|r| r.error_type != ErrorType::Match) {
        let note = format!("Error: {}", row.error_type);

        out.generated.push(Highlight {
            page: row.gen_page,
            line_index: row.gen_sequence_index,
            bbox: row.gen_bbox,
            error_type: row.error_type,
            note: note.clone(),
        });

        if let (Some(page), Some(line_index), Some(bbox)) =
            (row.orig_page, row.orig_sequence_index, row.orig_bbox)
        {
            out.original.push(Highlight {
                page,
                line_index,
                bbox,
                error_type: row.error_type,
                note,
            });
        }
    }

    out
}
