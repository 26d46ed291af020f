use serde::{Deserialize, Serialize};

/// Tunables for one comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// Minimum similarity (0–100) for a matched line to count as `match`.
    pub similarity_threshold: f64,
    /// Vertical slack, in points, for same-page candidates. Widens by 5 per
    /// page of distance.
    pub y_tolerance: f64,
    /// Maximum page distance for a spatial candidate.
    pub page_window: u32,
    /// Match generated lines on the rayon pool.
    pub parallel: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        CompareOptions {
            similarity_threshold: 75.0,
            y_tolerance: 12.0,
            page_window: 1,
            parallel: true,
        }
    }
}

/// A named, documented set of options, as stored in a JSON profile file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub options: CompareOptions,
}
