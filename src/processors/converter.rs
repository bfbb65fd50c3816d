use crate::error::Result;
use crate::kml::{KmlDocument, PlacemarkTraversal};
use crate::models::{ConversionSummary, Waypoint};
use crate::processors::output_assembler::assemble_output;
use crate::processors::placemark_formatter::placemark_to_waypoint;
use crate::utils::constants::{DEFAULT_EXCLUDED_FOLDER, PLACEMARK_TAG};
use tracing::{debug, info};

/// KML to WPT conversion.
///
/// Each call is independent: the document is parsed, filtered, formatted
/// and assembled in one pass. The first malformed document or bad
/// coordinate aborts the whole conversion and nothing is returned.
#[derive(Debug, Clone)]
pub struct Converter {
    excluded_folder: String,
}

impl Converter {
    pub fn new() -> Self {
        Self {
            excluded_folder: DEFAULT_EXCLUDED_FOLDER.to_string(),
        }
    }

    pub fn with_excluded_folder(mut self, excluded_folder: impl Into<String>) -> Self {
        self.excluded_folder = excluded_folder.into();
        self
    }

    pub fn excluded_folder(&self) -> &str {
        &self.excluded_folder
    }

    /// Convert KML text into WPT text.
    pub fn convert(&self, kml: &str) -> Result<String> {
        let waypoints = self.convert_to_waypoints(kml)?;
        Ok(assemble_output(waypoints.iter().map(Waypoint::to_string)))
    }

    /// Parse and filter a document, returning the waypoints in output order.
    pub fn convert_to_waypoints(&self, kml: &str) -> Result<Vec<Waypoint>> {
        let document = KmlDocument::parse(kml)?;
        let (waypoints, _) = self.collect_waypoints(&document)?;
        debug!("Converted {} waypoints", waypoints.len());
        Ok(waypoints)
    }

    /// Count what a conversion keeps, excludes and skips.
    pub fn summarize(&self, kml: &str) -> Result<ConversionSummary> {
        let document = KmlDocument::parse(kml)?;
        let total = document.find_all(PLACEMARK_TAG).count();
        let (waypoints, excluded) = self.collect_waypoints(&document)?;

        let summary = ConversionSummary::new(total, excluded, &waypoints);
        info!(
            "{} placemarks: {} converted, {} excluded, {} without coordinates",
            summary.placemarks, summary.converted, summary.excluded, summary.skipped
        );
        Ok(summary)
    }

    /// Waypoints in output order plus the number of excluded placemarks.
    fn collect_waypoints(&self, document: &KmlDocument) -> Result<(Vec<Waypoint>, usize)> {
        let mut traversal = PlacemarkTraversal::with_excluded_folder(document, &self.excluded_folder);
        let mut waypoints = Vec::new();
        for placemark in traversal.by_ref() {
            if let Some(waypoint) = placemark_to_waypoint(&placemark)? {
                waypoints.push(waypoint);
            }
        }
        Ok((waypoints, traversal.excluded()))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert KML text into WPT text with the default settings.
///
/// # Examples
/// ```
/// use kml2wpt::convert_kml_to_wpt;
///
/// let kml = "<kml><Placemark><name>Camp 1</name>\
///            <Point><coordinates>-122.5,37.75,120</coordinates></Point>\
///            </Placemark></kml>";
/// assert_eq!(
///     convert_kml_to_wpt(kml).unwrap(),
///     "$FormatGEO\nCamp1 N 37 45 00.00 W 122 30 00.00 120 Camp 1"
/// );
/// ```
pub fn convert_kml_to_wpt(kml: &str) -> Result<String> {
    Converter::new().convert(kml)
}
