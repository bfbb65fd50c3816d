use crate::error::Result;
use crate::kml::Placemark;
use crate::models::{Coordinate, Waypoint};
use tracing::debug;

/// Turn a placemark into a waypoint.
///
/// Returns `Ok(None)` when the placemark has no point coordinates; a
/// coordinate string that does not parse is an error.
pub fn placemark_to_waypoint(placemark: &Placemark<'_>) -> Result<Option<Waypoint>> {
    let Some(coordinates) = placemark.coordinates() else {
        debug!("Placemark {} has no point coordinates", placemark.node());
        return Ok(None);
    };

    let coordinate = Coordinate::parse(&coordinates)?;
    let name = placemark.name();
    let description = placemark.description();

    Ok(Some(Waypoint::new(
        name.as_deref(),
        description.as_deref(),
        coordinate,
    )))
}

/// Format one placemark as a WPT line, without a trailing newline.
pub fn format_placemark(placemark: &Placemark<'_>) -> Result<Option<String>> {
    Ok(placemark_to_waypoint(placemark)?.map(|waypoint| waypoint.to_string()))
}
