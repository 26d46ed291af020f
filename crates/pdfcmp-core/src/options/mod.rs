pub mod builtin;
pub mod schema;

use crate::error::PdfCmpError;
pub use schema::{CompareOptions, Profile};
use std::path::Path;

/// Load a comparison profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<Profile, PdfCmpError> {
    let content = std::fs::read_to_string(path).map_err(|e| PdfCmpError::OptionsLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_profile(&content, path)
}

/// Parse a profile from a JSON string, naming `source` in errors.
pub fn parse_profile(json: &str, source: &Path) -> Result<Profile, PdfCmpError> {
    let profile: Profile = serde_json::from_str(json).map_err(|e| PdfCmpError::OptionsLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Parse a profile from a JSON string (no file path context).
pub fn parse_profile_str(json: &str) -> Result<Profile, PdfCmpError> {
    let profile: Profile = serde_json::from_str(json).map_err(PdfCmpError::Json)?;
    validate_profile(&profile)?;
    Ok(profile)
}

pub fn validate_profile(profile: &Profile) -> Result<(), PdfCmpError> {
    if profile.name.trim().is_empty() {
        return Err(PdfCmpError::OptionsInvalid(
            "profile name must not be empty".into(),
        ));
    }
    validate_options(&profile.options)
}

/// Check that options are usable for a comparison run.
pub fn validate_options(options: &CompareOptions) -> Result<(), PdfCmpError> {
    let t = options.similarity_threshold;
    if !t.is_finite() || !(0.0..=100.0).contains(&t) {
        return Err(PdfCmpError::OptionsInvalid(format!(
            "similarity_threshold must be between 0 and 100, got {t}"
        )));
    }

    let y = options.y_tolerance;
    if !y.is_finite() || y < 0.0 {
        return Err(PdfCmpError::OptionsInvalid(format!(
            "y_tolerance must be a non-negative number, got {y}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_profile() {
        let json = r#"{
            "name": "Invoices",
            "options": { "similarity_threshold": 80, "page_window": 0 }
        }"#;
        let p = parse_profile_str(json).unwrap();
        assert_eq!(p.name, "Invoices");
        assert_eq!(p.options.similarity_threshold, 80.0);
        assert_eq!(p.options.page_window, 0);
        // unspecified fields fall back to defaults
        assert_eq!(p.options.y_tolerance, 12.0);
        assert!(p.options.parallel);
    }

    #[test]
    fn test_missing_options_block_uses_defaults() {
        let p = parse_profile_str(r#"{ "name": "Bare" }"#).unwrap();
        assert_eq!(p.options, CompareOptions::default());
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let json = r#"{ "name": "Bad", "options": { "similarity_threshold": 120 } }"#;
        assert!(matches!(
            parse_profile_str(json),
            Err(PdfCmpError::OptionsInvalid(_))
        ));
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let json = r#"{ "name": "Bad", "options": { "y_tolerance": -1 } }"#;
        assert!(parse_profile_str(json).is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(parse_profile_str(r#"{ "name": "  " }"#).is_err());
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let options = CompareOptions {
            similarity_threshold: f64::NAN,
            ..CompareOptions::default()
        };
        assert!(validate_options(&options).is_err());
    }

    #[test]
    fn test_load_profile_missing_file() {
        let err = load_profile(Path::new("/nonexistent/profile.json")).unwrap_err();
        assert!(matches!(err, PdfCmpError::OptionsLoad { .. }));
    }
}
