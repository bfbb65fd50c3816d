pub mod batch_processor;
pub mod converter;
pub mod output_assembler;
pub mod placemark_formatter;

pub use batch_processor::{BatchProcessor, BatchReport, FileOutcome};
pub use converter::{convert_kml_to_wpt, Converter};
pub use output_assembler::assemble_output;
pub use placemark_formatter::{format_placemark, placemark_to_waypoint};
