use pdfcmp_core::error::PdfCmpError;
use pdfcmp_core::highlight::collect_highlights;
use pdfcmp_core::options::{self, builtin, CompareOptions};
use std::path::{Path, PathBuf};

use super::load_document;
use crate::output;

/// Flags that select and tweak the comparison options.
#[derive(clap::Args)]
pub struct OptionFlags {
    /// Predefined profile: default, strict, lenient
    #[arg(short, long, value_name = "NAME", default_value = "default")]
    preset: String,

    /// Custom JSON profile file (replaces --preset)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Similarity threshold (0-100) for a line to count as a match
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Vertical slack in points for spatial candidates
    #[arg(long)]
    y_tolerance: Option<f64>,

    /// Maximum page distance for spatial candidates
    #[arg(long)]
    page_window: Option<u32>,

    /// Match lines on a single thread
    #[arg(long)]
    sequential: bool,
}

impl OptionFlags {
    /// Preset, then profile file, then individual flags.
    pub fn resolve(&self) -> Result<CompareOptions, PdfCmpError> {
        let profile = match &self.config {
            Some(path) => options::load_profile(path)?,
            None => builtin::load_preset(&self.preset)?,
        };

        let mut opts = profile.options;
        if let Some(t) = self.threshold {
            opts.similarity_threshold = t;
        }
        if let Some(y) = self.y_tolerance {
            opts.y_tolerance = y;
        }
        if let Some(w) = self.page_window {
            opts.page_window = w;
        }
        if self.sequential {
            opts.parallel = false;
        }

        options::validate_options(&opts)?;
        tracing::debug!(profile = %profile.name, ?opts, "effective options");
        Ok(opts)
    }
}

pub fn run(
    original_file: &Path,
    generated_file: &Path,
    flags: &OptionFlags,
    output_format: &str,
    output_file: Option<PathBuf>,
    show_all: bool,
) -> Result<(), PdfCmpError> {
    let opts = flags.resolve()?;

    let original = load_document(original_file, "original")?;
    let generated = load_document(generated_file, "generated")?;

    let comparison = pdfcmp_core::compare_documents(&original, &generated, &opts)?;
    let highlights = collect_highlights(&comparison.rows);

    if let Some(path) = output_file {
        // Always write JSON when saving to file
        output::json::write_comparison(&path, &comparison, &highlights)?;
        eprintln!(
            "Compared {} line(s), written to {}",
            comparison.rows.len(),
            path.display()
        );
    }

    match output_format {
        "json" => output::json::print_comparison(&comparison, &highlights)?,
        _ => output::table::print_comparison(&comparison, show_all),
    }

    Ok(())
}
