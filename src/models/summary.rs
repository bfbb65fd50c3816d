use crate::models::waypoint::Waypoint;
use serde::{Deserialize, Serialize};

/// Placemark accounting for one converted document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSummary {
    /// Every `<Placemark>` in the document
    pub placemarks: usize,
    /// Left out because they sit inside the excluded folder
    pub excluded: usize,
    /// Kept placemarks without point coordinates
    pub skipped: usize,
    /// Lines written to the output
    pub converted: usize,
    pub waypoints: Vec<String>,
}

impl ConversionSummary {
    pub fn new(placemarks: usize, excluded: usize, waypoints: &[Waypoint]) -> Self {
        let converted = waypoints.len();
        Self {
            placemarks,
            excluded,
            skipped: placemarks - excluded - converted,
            converted,
            waypoints: waypoints.iter().map(|w| w.name.clone()).collect(),
        }
    }

    pub fn display_summary(&self) -> String {
        let mut summary = format!(
            "Conversion Summary:\n  Placemarks: {}\n  Excluded (folder): {}\n  Skipped (no coordinates): {}\n  Converted: {}\n",
            self.placemarks, self.excluded, self.skipped, self.converted
        );

        if !self.waypoints.is_empty() {
            summary.push_str("  Waypoints:\n");
            for name in &self.waypoints {
                summary.push_str(&format!("    {}\n", name));
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    #[test]
    fn test_summary_counts() {
        let waypoints = vec![
            Waypoint::new(Some("North Gate"), None, Coordinate::new(1.0, 2.0, 0.0)),
            Waypoint::new(None, None, Coordinate::new(3.0, 4.0, 0.0)),
        ];
        let summary = ConversionSummary::new(5, 2, &waypoints);

        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.converted, 2);
        assert_eq!(summary.waypoints, vec!["NorthGate", "Waypoint"]);

        let text = summary.display_summary();
        assert!(text.contains("Excluded (folder): 2"));
        assert!(text.contains("    NorthGate\n"));
    }
}
