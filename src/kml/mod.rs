pub mod document;
pub mod placemark;
pub mod traversal;

pub use document::{KmlDocument, NodeId};
pub use placemark::Placemark;
pub use traversal::{is_in_excluded_folder, PlacemarkTraversal};
