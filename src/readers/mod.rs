pub mod kml_reader;

pub use kml_reader::KmlReader;
