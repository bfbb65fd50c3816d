pub mod wpt_writer;

pub use wpt_writer::WptWriter;
