use crate::models::coordinate::Coordinate;
use crate::models::dms::DmsAngle;
use crate::utils::coordinates::round_half_up;
use crate::utils::names::{camel_case_name, display_name};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One output record of a WPT file.
///
/// `Display` renders the WPT line:
/// `<Name> <LatDir> <DD> <MM> <SS.ss> <LonDir> <DDD> <MM> <SS.ss> <Elev> <Description>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    pub latitude: DmsAngle,
    pub longitude: DmsAngle,
    /// Whole metres, already rounded.
    pub elevation: f64,
    pub description: String,
    pub coordinate: Coordinate,
}

impl Waypoint {
    /// Build a waypoint from raw (untrimmed) placemark fields.
    pub fn new(name: Option<&str>, description: Option<&str>, coordinate: Coordinate) -> Self {
        let label = display_name(name);

        let mut text = label.to_string();
        if let Some(extra) = description.map(str::trim).filter(|d| !d.is_empty()) {
            text.push(',');
            text.push_str(extra);
        }

        Self {
            name: camel_case_name(label),
            latitude: coordinate.latitude_dms(),
            longitude: coordinate.longitude_dms(),
            elevation: round_half_up(coordinate.elevation),
            description: text,
            coordinate,
        }
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {:.0} {}",
            self.name, self.latitude, self.longitude, self.elevation, self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_waypoint_line() {
        let waypoint = Waypoint::new(Some("Camp 1"), None, Coordinate::new(-122.5, 37.75, 120.0));
        assert_eq!(
            waypoint.to_string(),
            "Camp1 N 37 45 00.00 W 122 30 00.00 120 Camp 1"
        );
    }

    #[test]
    fn test_unnamed_waypoint_line() {
        let waypoint = Waypoint::new(None, None, Coordinate::new(0.0, 0.0, 0.0));
        assert_eq!(
            waypoint.to_string(),
            "Waypoint N 00 00 00.00 E 000 00 00.00 0 Waypoint"
        );
    }

    #[test]
    fn test_description_is_appended_after_raw_name() {
        let waypoint = Waypoint::new(
            Some("  rocky point #2 "),
            Some("\n  Good view, steep trail  \n"),
            Coordinate::new(151.2153, -33.8568, 58.5),
        );

        assert_eq!(waypoint.name, "RockyPoint2");
        assert_eq!(waypoint.description, "rocky point #2,Good view, steep trail");
        assert_eq!(
            waypoint.to_string(),
            "RockyPoint2 S 33 51 24.48 E 151 12 55.08 59 rocky point #2,Good view, steep trail"
        );
    }

    #[test]
    fn test_blank_description_is_dropped() {
        let waypoint = Waypoint::new(Some(""), Some("   "), Coordinate::new(10.0, 10.0, -3.4));
        assert_eq!(waypoint.description, "Waypoint");
        assert_eq!(waypoint.elevation, -3.0);
    }

    #[test]
    fn test_elevation_is_not_clamped() {
        let waypoint = Waypoint::new(Some("P"), None, Coordinate::new(1.0, 1.0, 1e20));
        assert_eq!(
            waypoint.to_string(),
            "P N 01 00 00.00 E 001 00 00.00 100000000000000000000 P"
        );

        let waypoint = Waypoint::new(Some("P"), None, Coordinate::new(1.0, 1.0, 0.49999999999999994));
        assert_eq!(waypoint.to_string(), "P N 01 00 00.00 E 001 00 00.00 0 P");

        let waypoint = Waypoint::new(Some("P"), None, Coordinate::new(1.0, 1.0, -0.3));
        assert_eq!(waypoint.to_string(), "P N 01 00 00.00 E 001 00 00.00 0 P");
    }
}
