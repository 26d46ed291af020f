use pdfcmp_core::error::PdfCmpError;
use pdfcmp_core::options::{self, builtin, Profile};
use std::path::Path;

pub fn list() -> Result<(), PdfCmpError> {
    println!("Available predefined profiles:\n");
    for name in builtin::PRESETS {
        let profile = builtin::load_preset(name)?;
        let o = &profile.options;
        println!(
            "  {:<8} threshold {}, y-tolerance {}pt, page window {}",
            name, o.similarity_threshold, o.y_tolerance, o.page_window
        );
        if let Some(ref desc) = profile.description {
            println!("           {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), PdfCmpError> {
    let profile = builtin::load_preset(preset)?;
    print_profile(&profile);
    println!();
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), PdfCmpError> {
    let profile = options::load_profile(file)?;

    println!("Profile '{}' is valid.", profile.name);
    print_profile(&profile);

    // Usable but probably not what was meant
    let o = &profile.options;
    let mut warnings = Vec::new();
    if o.similarity_threshold == 0.0 {
        warnings.push("similarity_threshold 0 counts every paired line as a match".to_string());
    }
    if o.similarity_threshold == 100.0 {
        warnings.push("similarity_threshold 100 rejects any textual difference".to_string());
    }
    if o.y_tolerance == 0.0 && o.page_window == 0 {
        warnings.push(
            "y_tolerance 0 with page_window 0 sends almost every line to the global fallback"
                .to_string(),
        );
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

fn print_profile(profile: &Profile) {
    if let Some(ref desc) = profile.description {
        println!("  {}", desc);
    }
    let o = &profile.options;
    println!("  Similarity threshold: {}", o.similarity_threshold);
    println!("  Y tolerance:          {} pt (+5 per page apart)", o.y_tolerance);
    println!("  Page window:          {}", o.page_window);
    println!("  Parallel matching:    {}", o.parallel);
}
