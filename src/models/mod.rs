pub mod coordinate;
pub mod dms;
pub mod summary;
pub mod waypoint;

pub use coordinate::Coordinate;
pub use dms::{Axis, DmsAngle, Hemisphere};
pub use summary::ConversionSummary;
pub use waypoint::Waypoint;
