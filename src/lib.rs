pub mod cli;
pub mod settings;
pub mod error;
pub mod kml;
pub mod models;
pub mod processors;
pub mod readers;
pub mod utils;
pub mod writers;

pub use error::{ConversionError, ErrorKind, Result};
pub use processors::{convert_kml_to_wpt, Converter};
