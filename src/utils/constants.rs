/// Output header line
pub const WPT_HEADER: &str = "$FormatGEO";

/// KML tag names (local part, without namespace prefix)
pub const PLACEMARK_TAG: &str = "Placemark";
pub const FOLDER_TAG: &str = "Folder";
pub const NAME_TAG: &str = "name";
pub const DESCRIPTION_TAG: &str = "description";
pub const POINT_TAG: &str = "Point";
pub const COORDINATES_TAG: &str = "coordinates";

/// Placemarks inside a folder with this name are left out of the output
pub const DEFAULT_EXCLUDED_FOLDER: &str = "Waypoints";

/// Name used when a placemark has no usable name
pub const DEFAULT_WAYPOINT_NAME: &str = "Waypoint";

/// File extensions
pub const KML_EXTENSION: &str = "kml";
pub const KMZ_EXTENSION: &str = "kmz";
pub const WPT_EXTENSION: &str = "wpt";

/// Entry conventionally holding the main document of a KMZ archive
pub const KMZ_ROOT_DOCUMENT: &str = "doc.kml";

/// Configuration
pub const CONFIG_FILE: &str = "kml2wpt.toml";
pub const ENV_PREFIX: &str = "KML2WPT";
