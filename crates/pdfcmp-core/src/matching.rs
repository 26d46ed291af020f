use crate::extraction::PositionedLine;
use crate::options::CompareOptions;
use crate::text::similarity;
use tracing::debug;

/// Vertical slack added per page of distance between candidate and line.
pub const Y_TOLERANCE_PER_PAGE: f64 = 5.0;

/// Best original-line candidate for one generated line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchCandidate<'a> {
    /// Similarity in [0, 100].
    pub score: f64,
    pub original: Option<&'a PositionedLine>,
}

/// Spatial window used to pre-select original lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialWindow {
    pub y_tolerance: f64,
    pub page_window: u32,
}

impl SpatialWindow {
    pub fn from_options(options: &CompareOptions) -> Self {
        SpatialWindow {
            y_tolerance: options.y_tolerance,
            page_window: options.page_window,
        }
    }

    /// Whether `original` is close enough to `generated` to be a spatial
    /// candidate. Vertical slack grows linearly with page distance.
    pub fn contains(&self, generated: &PositionedLine, original: &PositionedLine) -> bool {
        let page_delta = generated.page.abs_diff(original.page);
        if page_delta > self.page_window as usize {
            return false;
        }
        let allowed = self.y_tolerance + Y_TOLERANCE_PER_PAGE * page_delta as f64;
        (original.bbox.y_min - generated.bbox.y_min).abs() <= allowed
    }
}

impl Default for SpatialWindow {
    fn default() -> Self {
        SpatialWindow::from_options(&CompareOptions::default())
    }
}

/// Find the original line that best matches `generated`.
///
/// Scores only spatially nearby lines first; when none are nearby, scores
/// every original line. Ties keep the earliest line in `originals` order.
/// Returns `(0, None)` only when `originals` is empty.
pub fn best_match<'a>(
    generated: &PositionedLine,
    originals: &'a [PositionedLine],
    window: SpatialWindow,
) -> MatchCandidate<'a> {
    let nearby = pick_best(
        generated,
        originals.iter().filter(|o| window.contains(generated, o)),
    );
    if nearby.original.is_some() {
        return nearby;
    }

    if !originals.is_empty() {
        debug!(
            page = generated.page,
            line = generated.sequence_index,
            "no spatial candidate, falling back to global search"
        );
    }
    pick_best(generated, originals.iter())
}

fn pick_best<'a>(
    generated: &PositionedLine,
    candidates: impl Iterator<Item = &'a PositionedLine>,
) -> MatchCandidate<'a> {
    let mut best = MatchCandidate {
        score: 0.0,
        original: None,
    };
    for original in candidates {
        let score = similarity(&generated.normalized_text, &original.normalized_text);
        // strict comparison keeps the first of equal scores
        if best.original.is_none() || score > best.score {
            best = MatchCandidate {
                score,
                original: Some(original),
            };
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::BBox;

    fn line(page: usize, seq: usize, y: f64, text: &str) -> PositionedLine {
        PositionedLine::new(page, seq, text, BBox::new(72.0, y, 300.0, y + 12.0))
    }

    #[test]
    fn test_empty_originals() {
        let g = line(1, 1, 100.0, "Hello");
        let m = best_match(&g, &[], SpatialWindow::default());
        assert_eq!(m.score, 0.0);
        assert!(m.original.is_none());
    }

    #[test]
    fn test_prefers_nearby_over_better_text_far_away() {
        let g = line(1, 1, 100.0, "Total due");
        let originals = vec![
            line(1, 1, 500.0, "Total due"),
            line(1, 2, 104.0, "Total duo"),
        ];
        let m = best_match(&g, &originals, SpatialWindow::default());
        assert_eq!(m.original.unwrap().sequence_index, 2);
        assert!(m.score < 100.0);
    }

    #[test]
    fn test_falls_back_to_global_search() {
        let g = line(1, 1, 100.0, "Moved paragraph");
        let originals = vec![
            line(3, 1, 700.0, "Something else"),
            line(4, 1, 20.0, "moved paragraph"),
        ];
        let m = best_match(&g, &originals, SpatialWindow::default());
        assert_eq!(m.original.unwrap().page, 4);
        assert_eq!(m.score, 100.0);
    }

    #[test]
    fn test_tolerance_widens_with_page_distance() {
        let window = SpatialWindow {
            y_tolerance: 12.0,
            page_window: 1,
        };
        let g = line(2, 1, 100.0, "x");
        // 16 apart: outside 12 on the same page, inside 12 + 5 on the next
        assert!(!window.contains(&g, &line(2, 1, 116.0, "x")));
        assert!(window.contains(&g, &line(3, 1, 116.0, "x")));
        assert!(window.contains(&g, &line(1, 1, 84.0, "x")));
        assert!(!window.contains(&g, &line(4, 1, 100.0, "x")));
    }

    #[test]
    fn test_zero_page_window_is_same_page_only() {
        let window = SpatialWindow {
            y_tolerance: 12.0,
            page_window: 0,
        };
        let g = line(2, 1, 100.0, "x");
        assert!(window.contains(&g, &line(2, 3, 100.0, "x")));
        assert!(!window.contains(&g, &line(1, 1, 100.0, "x")));
    }

    #[test]
    fn test_ties_keep_first() {
        let g = line(1, 1, 100.0, "abc");
        let originals = vec![
            line(1, 1, 98.0, "xyz"),
            line(1, 2, 100.0, "abc"),
            line(1, 3, 102.0, "abc"),
        ];
        let m = best_match(&g, &originals, SpatialWindow::default());
        assert_eq!(m.original.unwrap().sequence_index, 2);
    }

    #[test]
    fn test_zero_score_candidate_still_returned() {
        let g = line(1, 1, 100.0, "abc");
        let originals = vec![line(1, 1, 100.0, "xyz")];
        let m = best_match(&g, &originals, SpatialWindow::default());
        assert_eq!(m.score, 0.0);
        assert!(m.original.is_some());
    }
}
