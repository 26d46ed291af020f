use crate::error::PdfCmpError;
use crate::options::schema::Profile;
use crate::options::validate_profile;

const DEFAULT_JSON: &str = include_str!("../../../../presets/default.json");
const STRICT_JSON: &str = include_str!("../../../../presets/strict.json");
const LENIENT_JSON: &str = include_str!("../../../../presets/lenient.json");

/// Available predefined profiles.
pub const PRESETS: &[&str] = &["default", "strict", "lenient"];

/// Load a predefined profile by name.
pub fn load_preset(name: &str) -> Result<Profile, PdfCmpError> {
    let json = match name {
        "default" => DEFAULT_JSON,
        "strict" => STRICT_JSON,
        "lenient" => LENIENT_JSON,
        _ => {
            return Err(PdfCmpError::OptionsInvalid(format!(
                "unknown preset '{}'. Available: {}",
                name,
                PRESETS.join(", ")
            )))
        }
    };
    let profile: Profile = serde_json::from_str(json)?;
    validate_profile(&profile)?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CompareOptions;

    #[test]
    fn test_default_preset_matches_default_options() {
        let p = load_preset("default").unwrap();
        assert_eq!(p.options, CompareOptions::default());
    }

    #[test]
    fn test_all_presets_load() {
        for name in PRESETS {
            let p = load_preset(name).unwrap();
            assert!(p.description.is_some(), "{name}");
        }
    }

    #[test]
    fn test_strict_is_stricter() {
        let strict = load_preset("strict").unwrap().options;
        let lenient = load_preset("lenient").unwrap().options;
        assert!(strict.similarity_threshold > lenient.similarity_threshold);
        assert!(strict.y_tolerance < lenient.y_tolerance);
        assert_eq!(strict.page_window, 0);
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("xyz").is_err());
    }
}
