use crate::error::PdfCmpError;
use crate::extraction::{BBox, ExtractedDocument, PdfExtractor, PositionedLine};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -bbox-layout`, which emits an XHTML tree of
/// page / flow / block / line / word elements with per-word boxes.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract(&self, pdf_bytes: &[u8]) -> Result<ExtractedDocument, PdfCmpError> {
        // pdftotext wants a path; the temp file is removed when dropped.
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| PdfCmpError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| PdfCmpError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-bbox-layout")
            .arg(tmpfile.path())
            .arg("-")
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PdfCmpError::PdftotextNotFound
                } else {
                    PdfCmpError::Extraction(format!("pdftotext -bbox-layout failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(PdfCmpError::PdftotextFailed { code, stderr });
        }

        let xml = String::from_utf8_lossy(&output.stdout);
        parse_bbox_layout(&xml)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Words collected for the `<line>` currently being read.
#[derive(Default)]
struct LineAccumulator {
    line_box: Option<BBox>,
    words: Vec<String>,
    word_boxes: Vec<BBox>,
}

impl LineAccumulator {
    fn reset(&mut self, line_box: Option<BBox>) {
        self.line_box = line_box;
        self.words.clear();
        self.word_boxes.clear();
    }
}

/// Parse `pdftotext -bbox-layout` output into positioned lines.
pub(crate) fn parse_bbox_layout(xml: &str) -> Result<ExtractedDocument, PdfCmpError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut doc = ExtractedDocument::default();
    let mut line = LineAccumulator::default();
    let mut sequence_index = 0usize;
    let mut word: Option<(String, Option<BBox>)> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            PdfCmpError::Extraction(format!(
                "malformed bbox layout at byte {}: {}",
                reader.error_position(),
                e
            ))
        })?;

        match event {
            Event::Start(e) => match e.local_name().as_ref() {
                b"page" => {
                    doc.page_count += 1;
                    sequence_index = 0;
                }
                b"line" => line.reset(parse_bbox(&e)?),
                b"word" => word = Some((String::new(), parse_bbox(&e)?)),
                _ => {}
            },
            Event::Empty(e) => {
                if e.local_name().as_ref() == b"page" {
                    doc.page_count += 1;
                    sequence_index = 0;
                }
            }
            Event::Text(t) => {
                if let Some((text, _)) = word.as_mut() {
                    let unescaped = t
                        .unescape()
                        .map_err(|e| PdfCmpError::Extraction(format!("bad word text: {e}")))?;
                    text.push_str(&unescaped);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"word" => {
                    if let Some((text, bbox)) = word.take() {
                        let text = text.trim();
                        if !text.is_empty() {
                            line.words.push(text.to_string());
                            line.word_boxes.extend(bbox);
                        }
                    }
                }
                b"line" => {
                    let text = line.words.join(" ");
                    let bbox = BBox::union_all(&line.word_boxes).or(line.line_box);
                    if let Some(bbox) = bbox.filter(|_| !text.is_empty()) {
                        sequence_index += 1;
                        doc.lines.push(PositionedLine::new(
                            doc.page_count.max(1),
                            sequence_index,
                            text,
                            bbox,
                        ));
                    }
                    line.reset(None);
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(doc)
}

fn parse_bbox(tag: &BytesStart<'_>) -> Result<Option<BBox>, PdfCmpError> {
    let x_min = parse_attr_f64(tag, "xMin")?;
    let y_min = parse_attr_f64(tag, "yMin")?;
    let x_max = parse_attr_f64(tag, "xMax")?;
    let y_max = parse_attr_f64(tag, "yMax")?;
    Ok(match (x_min, y_min, x_max, y_max) {
        (Some(x0), Some(y0), Some(x1), Some(y1)) => Some(BBox::new(x0, y0, x1, y1)),
        _ => None,
    })
}

fn parse_attr_f64(tag: &BytesStart<'_>, name: &str) -> Result<Option<f64>, PdfCmpError> {
    let attr = tag
        .try_get_attribute(name)
        .map_err(|e| PdfCmpError::Extraction(format!("bad attribute '{name}': {e}")))?;
    let Some(attr) = attr else {
        return Ok(None);
    };
    let value = attr
        .unescape_value()
        .map_err(|e| PdfCmpError::Extraction(format!("bad attribute '{name}': {e}")))?;
    value
        .trim()
        .parse::<f64>()
        .map(Some)
        .map_err(|e| PdfCmpError::Extraction(format!("bad number in '{name}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">
<html xmlns="http://www.w3.org/1999/xhtml">
<head>
<title></title>
<meta name="Producer" content="Skia/PDF"/>
</head>
<body>
<doc>
  <page width="612.000000" height="792.000000">
    <flow>
      <block xMin="72.0" yMin="70.0" xMax="300.0" yMax="110.0">
        <line xMin="72.0" yMin="70.0" xMax="160.0" yMax="82.0">
          <word xMin="72.0" yMin="70.5" xMax="100.0" yMax="82.0">Hello</word>
          <word xMin="104.0" yMin="70.0" xMax="140.0" yMax="81.0">world</word>
        </line>
        <line xMin="72.0" yMin="90.0" xMax="100.0" yMax="102.0">
        </line>
        <line xMin="72.0" yMin="98.0" xMax="300.0" yMax="110.0">
          <word xMin="72.0" yMin="98.0" xMax="120.0" yMax="110.0">Fish&amp;Chips</word>
          <word xMin="124.0" yMin="98.0" xMax="150.0" yMax="110.0">&lt;b&gt;</word>
        </line>
      </block>
    </flow>
  </page>
  <page width="612.000000" height="792.000000">
    <flow>
      <block xMin="72.0" yMin="70.0" xMax="300.0" yMax="82.0">
        <line xMin="72.0" yMin="70.0" xMax="300.0" yMax="82.0">
          <word xMin="72.0" yMin="70.0" xMax="90.0" yMax="82.0">Page</word>
          <word xMin="94.0" yMin="70.0" xMax="100.0" yMax="82.0">2</word>
        </line>
      </block>
    </flow>
  </page>
</doc>
</body>
</html>
"#;

    #[test]
    fn test_parse_pages_and_lines() {
        let doc = parse_bbox_layout(SAMPLE).unwrap();
        assert_eq!(doc.page_count, 2);
        assert_eq!(doc.lines.len(), 3);

        let first = &doc.lines[0];
        assert_eq!(first.page, 1);
        assert_eq!(first.sequence_index, 1);
        assert_eq!(first.raw_text, "Hello world");
        assert_eq!(first.normalized_text, "hello world");
    }

    #[test]
    fn test_line_bbox_is_union_of_words() {
        let doc = parse_bbox_layout(SAMPLE).unwrap();
        assert_eq!(doc.lines[0].bbox, BBox::new(72.0, 70.0, 140.0, 82.0));
    }

    #[test]
    fn test_empty_lines_dropped_and_numbering_contiguous() {
        let doc = parse_bbox_layout(SAMPLE).unwrap();
        assert_eq!(doc.lines[1].sequence_index, 2);
        assert_eq!(doc.lines[1].raw_text, "Fish&Chips <b>");
    }

    #[test]
    fn test_numbering_restarts_per_page() {
        let doc = parse_bbox_layout(SAMPLE).unwrap();
        let last = &doc.lines[2];
        assert_eq!(last.page, 2);
        assert_eq!(last.sequence_index, 1);
        assert_eq!(last.raw_text, "Page 2");
    }

    #[test]
    fn test_empty_document() {
        let doc = parse_bbox_layout("<doc><page width=\"1\" height=\"1\"></page></doc>").unwrap();
        assert_eq!(doc.page_count, 1);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_malformed_xml_is_extraction_error() {
        let err = parse_bbox_layout("<doc><page><line></page></doc>").unwrap_err();
        assert!(err.is_extraction());
    }

    #[test]
    fn test_bad_coordinate_is_extraction_error() {
        let xml = r#"<doc><page><line xMin="a" yMin="0" xMax="1" yMax="1"></line></page></doc>"#;
        assert!(parse_bbox_layout(xml).unwrap_err().is_extraction());
    }

    #[test]
    fn test_line_box_used_when_words_have_none() {
        let xml = r#"<doc><page width="612" height="792">
            <line xMin="50.0" yMin="200.0" xMax="180.0" yMax="212.0">
              <word>Unboxed</word>
              <word>words</word>
            </line>
        </page></doc>"#;
        let doc = parse_bbox_layout(xml).unwrap();
        assert_eq!(doc.lines.len(), 1);
        assert_eq!(doc.lines[0].raw_text, "Unboxed words");
        assert_eq!(doc.lines[0].bbox, BBox::new(50.0, 200.0, 180.0, 212.0));
    }

    #[test]
    fn test_line_without_any_box_is_dropped() {
        let xml = r#"<doc><page><line><word>Floating</word></line></page></doc>"#;
        let doc = parse_bbox_layout(xml).unwrap();
        assert!(doc.is_empty());
    }
}
