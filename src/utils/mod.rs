pub mod constants;
pub mod coordinates;
pub mod filename;
pub mod logging;
pub mod names;
pub mod progress;

pub use constants::*;
pub use coordinates::{decimal_to_dms, dms_to_decimal};
pub use filename::{output_path_for, wpt_file_name};
pub use logging::init_logging;
pub use names::camel_case_name;
pub use progress::ProgressReporter;
