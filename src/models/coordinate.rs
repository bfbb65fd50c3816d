use crate::error::{ConversionError, Result};
use crate::models::dms::DmsAngle;
use crate::utils::coordinates::parse_coordinate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A KML `longitude,latitude[,elevation]` tuple in decimal degrees and metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
    pub elevation: f64,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64, elevation: f64) -> Self {
        Self {
            longitude,
            latitude,
            elevation,
        }
    }

    /// Parse the text of a `<coordinates>` element.
    ///
    /// Longitude and latitude are required. A missing or blank elevation
    /// is 0. Anything after the third field is ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let mut fields = text.trim().split(',');

        let longitude = parse_coordinate(fields.next().unwrap_or_default(), "longitude", text)?;

        let latitude = match fields.next() {
            Some(token) => parse_coordinate(token, "latitude", text)?,
            None => {
                return Err(ConversionError::CoordinateParse {
                    value: text.trim().to_string(),
                    reason: "latitude is missing".to_string(),
                })
            }
        };

        let elevation = match fields.next() {
            Some(token) if !token.trim().is_empty() => parse_coordinate(token, "elevation", text)?,
            _ => 0.0,
        };

        Ok(Self::new(longitude, latitude, elevation))
    }

    pub fn latitude_dms(&self) -> DmsAngle {
        DmsAngle::latitude(self.latitude)
    }

    pub fn longitude_dms(&self) -> DmsAngle {
        DmsAngle::longitude(self.longitude)
    }
}

impl FromStr for Coordinate {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_full_tuple() {
        let coord = Coordinate::parse("-122.5,37.75,120").unwrap();
        assert_eq!(coord, Coordinate::new(-122.5, 37.75, 120.0));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let coord: Coordinate = "\n   151.2153 ,  -33.8568 , 58.3  \n".parse().unwrap();
        assert_eq!(coord, Coordinate::new(151.2153, -33.8568, 58.3));
    }

    #[test]
    fn test_elevation_defaults_to_zero() {
        assert_eq!(Coordinate::parse("1,2").unwrap().elevation, 0.0);
        assert_eq!(Coordinate::parse("1,2,").unwrap().elevation, 0.0);
        assert_eq!(Coordinate::parse("1,2,3,4").unwrap().elevation, 3.0);
    }

    #[test]
    fn test_invalid_tuples() {
        for text in ["abc,10,0", "10,abc", "10", "", "1,2,high", "1,2,3 4,5,6"] {
            let err = Coordinate::parse(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::CoordinateParse, "input: {:?}", text);
        }
    }
}
