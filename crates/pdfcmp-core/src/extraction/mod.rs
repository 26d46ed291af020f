pub mod pdftotext;

use crate::error::PdfCmpError;
use crate::text::normalize::normalize_text;
use serde::{Deserialize, Serialize};

/// Axis-aligned box in page coordinates (origin top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl BBox {
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        BBox {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Smallest box covering all of `boxes`, or `None` for an empty input.
    pub fn union_all<'a>(boxes: impl IntoIterator<Item = &'a BBox>) -> Option<BBox> {
        boxes.into_iter().fold(None, |acc, b| {
            Some(match acc {
                None => *b,
                Some(a) => BBox {
                    x_min: a.x_min.min(b.x_min),
                    y_min: a.y_min.min(b.y_min),
                    x_max: a.x_max.max(b.x_max),
                    y_max: a.y_max.max(b.y_max),
                },
            })
        })
    }
}

/// One visually rendered text line of a PDF page.
///
/// `normalized_text` is always derived from `raw_text`; deserializing
/// recomputes it rather than trusting the stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredLine")]
pub struct PositionedLine {
    /// 1-based page number.
    pub page: usize,
    /// 1-based position of the line within its page, in reading order.
    pub sequence_index: usize,
    pub raw_text: String,
    /// Canonical form used for similarity scoring.
    pub normalized_text: String,
    pub bbox: BBox,
}

impl PositionedLine {
    pub fn new(page: usize, sequence_index: usize, raw_text: impl Into<String>, bbox: BBox) -> Self {
        let raw_text = raw_text.into();
        let normalized_text = normalize_text(&raw_text);
        PositionedLine {
            page,
            sequence_index,
            raw_text,
            normalized_text,
            bbox,
        }
    }
}

/// Serialized form of a line; any stored `normalized_text` is ignored.
#[derive(Deserialize)]
struct StoredLine {
    page: usize,
    sequence_index: usize,
    raw_text: String,
    bbox: BBox,
}

impl From<StoredLine> for PositionedLine {
    fn from(line: StoredLine) -> Self {
        PositionedLine::new(line.page, line.sequence_index, line.raw_text, line.bbox)
    }
}

/// All positioned lines of one document, grouped by page in reading order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub page_count: usize,
    pub lines: Vec<PositionedLine>,
}

impl ExtractedDocument {
    /// Every whitespace-delimited word of the document, ignoring line and
    /// page structure.
    pub fn words(&self) -> Vec<String> {
        self.lines
            .iter()
            .flat_map(|l| l.raw_text.split_whitespace().map(str::to_string))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract positioned lines from PDF bytes.
    fn extract(&self, pdf_bytes: &[u8]) -> Result<ExtractedDocument, PdfCmpError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;

    /// Extract the flat word sequence of a PDF.
    fn extract_words(&self, pdf_bytes: &[u8]) -> Result<Vec<String>, PdfCmpError> {
        Ok(self.extract(pdf_bytes)?.words())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_all() {
        let boxes = [
            BBox::new(10.0, 20.0, 30.0, 28.0),
            BBox::new(32.0, 19.5, 60.0, 29.0),
        ];
        let u = BBox::union_all(&boxes).unwrap();
        assert_eq!(u, BBox::new(10.0, 19.5, 60.0, 29.0));
        assert!(BBox::union_all(Vec::<BBox>::new().iter()).is_none());
    }

    #[test]
    fn test_positioned_line_normalizes() {
        let line = PositionedLine::new(1, 1, "Hello\u{a0}  World", BBox::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(line.raw_text, "Hello\u{a0}  World");
        assert_eq!(line.normalized_text, "hello world");
    }

    #[test]
    fn test_document_words() {
        let doc = ExtractedDocument {
            page_count: 2,
            lines: vec![
                PositionedLine::new(1, 1, "Invoice  No. 42", BBox::new(0.0, 0.0, 1.0, 1.0)),
                PositionedLine::new(2, 1, "Total", BBox::new(0.0, 0.0, 1.0, 1.0)),
            ],
        };
        assert_eq!(doc.words(), vec!["Invoice", "No.", "42", "Total"]);
    }

    #[test]
    fn test_document_json_round_trip() {
        let doc = ExtractedDocument {
            page_count: 2,
            lines: vec![
                PositionedLine::new(1, 1, "Total  Due", BBox::new(72.0, 90.0, 160.0, 102.0)),
                PositionedLine::new(2, 1, "Fish & Chips", BBox::new(72.0, 70.0, 150.0, 82.0)),
            ],
        };
        let json = serde_json::to_string(&doc).unwrap();
        let back: ExtractedDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_stored_normalized_text_is_recomputed() {
        let json = r#"{
            "page_count": 1,
            "lines": [{
                "page": 1,
                "sequence_index": 2,
                "raw_text": "Beta  Release",
                "normalized_text": "zzz",
                "bbox": { "x_min": 72.0, "y_min": 90.0, "x_max": 140.0, "y_max": 102.0 }
            }]
        }"#;
        let doc: ExtractedDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.lines[0].normalized_text, "beta release");
        assert_eq!(doc.lines[0].sequence_index, 2);

        // files written without the derived field load too
        let bare = json.replace(r#""normalized_text": "zzz","#, "");
        let doc: ExtractedDocument = serde_json::from_str(&bare).unwrap();
        assert_eq!(doc.lines[0].normalized_text, "beta release");
    }
}
