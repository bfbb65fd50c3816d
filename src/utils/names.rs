use crate::utils::constants::DEFAULT_WAYPOINT_NAME;
use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

fn separator_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^\p{L}\p{N}]+").expect("separator pattern is valid"))
}

/// Trimmed placemark name, or the default waypoint name when blank or absent
pub fn display_name(name: Option<&str>) -> &str {
    match name.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => DEFAULT_WAYPOINT_NAME,
    }
}

/// Collapse a name into a single camel-cased word.
///
/// The name is NFC normalized and split on runs of anything that is not a
/// letter or digit; each fragment is capitalized and the rest lower-cased.
///
/// # Examples
/// ```
/// use kml2wpt::utils::camel_case_name;
///
/// assert_eq!(camel_case_name("rocky point #2"), "RockyPoint2");
/// ```
pub fn camel_case_name(name: &str) -> String {
    let normalized: String = name.nfc().collect();

    separator_pattern()
        .split(&normalized)
        .filter(|fragment| !fragment.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(fragment: &str) -> String {
    let mut chars = fragment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}
