use crate::error::{ConversionError, Result};

/// Split decimal degrees into unsigned (degrees, minutes, seconds).
///
/// The sign is dropped; callers carry it as a hemisphere letter. Degrees
/// stay a whole `f64` so magnitudes beyond any integer type keep their value.
///
/// # Examples
/// ```
/// use kml2wpt::utils::decimal_to_dms;
///
/// let (d, m, s) = decimal_to_dms(-122.5);
/// assert_eq!((d, m), (122.0, 30));
/// assert!(s.abs() < 1e-9);
/// ```
pub fn decimal_to_dms(decimal: f64) -> (f64, u32, f64) {
    let abs_decimal = decimal.abs();

    let degrees = abs_decimal.floor();
    let minutes = ((abs_decimal - degrees) * 60.0).floor();
    let seconds = (abs_decimal - degrees - minutes / 60.0) * 3600.0;

    // Rounding can leave a hair below zero when the minutes land exactly on a boundary
    let seconds = if seconds < 0.0 { 0.0 } else { seconds };

    (degrees, minutes as u32, seconds)
}

/// Rebuild signed decimal degrees from unsigned DMS parts
pub fn dms_to_decimal(degrees: f64, minutes: u32, seconds: f64, negative: bool) -> f64 {
    let value = degrees + minutes as f64 / 60.0 + seconds / 3600.0;
    if negative {
        -value
    } else {
        value
    }
}

/// Parse one comma-separated field of a KML coordinate tuple.
///
/// `tuple` is the full coordinate text, used in the error message.
pub fn parse_coordinate(token: &str, field: &str, tuple: &str) -> Result<f64> {
    let trimmed = token.trim();

    let value = trimmed.parse::<f64>().map_err(|_| ConversionError::CoordinateParse {
        value: tuple.trim().to_string(),
        reason: format!("{} '{}' is not a number", field, trimmed),
    })?;

    if !value.is_finite() {
        return Err(ConversionError::CoordinateParse {
            value: tuple.trim().to_string(),
            reason: format!("{} '{}' is not a finite number", field, trimmed),
        });
    }

    Ok(value)
}

/// Round to the nearest integer with halves going towards positive infinity.
///
/// The result stays an `f64`; print it with `{:.0}`.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    // Adding positive zero turns -0.0 into 0.0
    rounded + 0.0
}
