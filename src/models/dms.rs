use crate::utils::coordinates::{decimal_to_dms, dms_to_decimal};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Zero-padded width of the degrees field in a WPT line
    pub fn degree_width(&self) -> usize {
        match self {
            Axis::Latitude => 2,
            Axis::Longitude => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Zero counts as north / east.
    pub fn for_value(axis: Axis, value: f64) -> Self {
        match (axis, value >= 0.0) {
            (Axis::Latitude, true) => Hemisphere::North,
            (Axis::Latitude, false) => Hemisphere::South,
            (Axis::Longitude, true) => Hemisphere::East,
            (Axis::Longitude, false) => Hemisphere::West,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Hemisphere::South | Hemisphere::West)
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Unsigned degrees/minutes/seconds with the sign carried by the hemisphere.
///
/// `degrees` is always a whole number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DmsAngle {
    pub axis: Axis,
    pub hemisphere: Hemisphere,
    pub degrees: f64,
    pub minutes: u32,
    pub seconds: f64,
}

impl DmsAngle {
    pub fn from_decimal(axis: Axis, value: f64) -> Self {
        let (degrees, minutes, seconds) = decimal_to_dms(value);
        Self {
            axis,
            hemisphere: Hemisphere::for_value(axis, value),
            degrees,
            minutes,
            seconds,
        }
    }

    pub fn latitude(value: f64) -> Self {
        Self::from_decimal(Axis::Latitude, value)
    }

    pub fn longitude(value: f64) -> Self {
        Self::from_decimal(Axis::Longitude, value)
    }

    pub fn to_decimal(&self) -> f64 {
        dms_to_decimal(
            self.degrees,
            self.minutes,
            self.seconds,
            self.hemisphere.is_negative(),
        )
    }
}

/// WPT field layout: `<dir> <degrees> <MM> <SS.ss>`.
impl fmt::Display for DmsAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:0width$.0} {:02} {:05.2}",
            self.hemisphere,
            self.degrees,
            self.minutes,
            self.seconds,
            width = self.axis.degree_width()
        )
    }
}
