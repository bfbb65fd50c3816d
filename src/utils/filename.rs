use crate::utils::constants::{KML_EXTENSION, KMZ_EXTENSION, WPT_EXTENSION};
use std::path::{Path, PathBuf};

/// Output path for a converted document: a trailing `.kml` (or `.kmz`) is
/// dropped, case-insensitively, and `.wpt` appended.
///
/// `trip.KML` becomes `trip.wpt`; `notes.txt` becomes `notes.txt.wpt`.
pub fn wpt_file_name(input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let stem = strip_suffix_ignore_case(&file_name, KML_EXTENSION)
        .or_else(|| strip_suffix_ignore_case(&file_name, KMZ_EXTENSION))
        .unwrap_or(&file_name);

    input.with_file_name(format!("{}.{}", stem, WPT_EXTENSION))
}

/// Like [`wpt_file_name`], but placed in `output_dir` when one is given.
pub fn output_path_for(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let output = wpt_file_name(input);
    match (output_dir, output.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => output,
    }
}

fn strip_suffix_ignore_case<'a>(file_name: &'a str, extension: &str) -> Option<&'a str> {
    let split = file_name.len().checked_sub(extension.len() + 1)?;
    if !file_name.is_char_boundary(split) {
        return None;
    }

    let (stem, suffix) = file_name.split_at(split);
    (suffix.starts_with('.') && suffix[1..].eq_ignore_ascii_case(extension)).then_some(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wpt_file_name() {
        assert_eq!(wpt_file_name(Path::new("trip.kml")), PathBuf::from("trip.wpt"));
        assert_eq!(wpt_file_name(Path::new("trip.KML")), PathBuf::from("trip.wpt"));
        assert_eq!(wpt_file_name(Path::new("trip.kmz")), PathBuf::from("trip.wpt"));
        assert_eq!(
            wpt_file_name(Path::new("data/my.kml.kml")),
            PathBuf::from("data/my.kml.wpt")
        );
        assert_eq!(
            wpt_file_name(Path::new("notes.txt")),
            PathBuf::from("notes.txt.wpt")
        );
        assert_eq!(wpt_file_name(Path::new("ruta_é.kml")), PathBuf::from("ruta_é.wpt"));
    }

    #[test]
    fn test_output_path_for() {
        assert_eq!(
            output_path_for(Path::new("in/trip.kml"), Some(Path::new("out"))),
            PathBuf::from("out/trip.wpt")
        );
        assert_eq!(
            output_path_for(Path::new("in/trip.kml"), None),
            PathBuf::from("in/trip.wpt")
        );
    }
}
