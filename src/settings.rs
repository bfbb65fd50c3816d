use crate::error::Result;
use crate::processors::Converter;
use crate::utils::constants::{CONFIG_FILE, DEFAULT_EXCLUDED_FOLDER, ENV_PREFIX};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

/// Settings shared by the CLI commands.
///
/// Sources, later ones winning: built-in defaults, a TOML file, then
/// `KML2WPT_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Settings {
    #[validate(length(min = 1))]
    pub excluded_folder: String,

    #[validate(range(min = 1))]
    pub max_workers: usize,

    pub overwrite: bool,

    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Settings {
    /// Load settings for the CLI.
    ///
    /// An explicit `config_file` must exist; without one, `kml2wpt.toml` in
    /// the working directory is used if present.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        Self::load_from(config_file, Some(ENV_PREFIX))
    }

    pub fn load_from(config_file: Option<&Path>, env_prefix: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("excluded_folder", DEFAULT_EXCLUDED_FOLDER)?
            .set_default("max_workers", num_cpus::get() as u64)?
            .set_default("overwrite", false)?;

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::from(Path::new(CONFIG_FILE)).required(false)),
        };

        if let Some(prefix) = env_prefix {
            builder = builder.add_source(Environment::with_prefix(prefix).try_parsing(true));
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn converter(&self) -> Converter {
        Converter::new().with_excluded_folder(self.excluded_folder.clone())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            excluded_folder: DEFAULT_EXCLUDED_FOLDER.to_string(),
            max_workers: num_cpus::get(),
            overwrite: false,
            output_dir: None,
        }
    }
}
