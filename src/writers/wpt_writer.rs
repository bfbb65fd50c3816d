use crate::error::{ConversionError, Result};
use std::io::{ErrorKind as IoErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Writes WPT text to disk.
///
/// Output goes through a temporary file in the destination directory that
/// is renamed into place, so a failed write never leaves a partial file.
pub struct WptWriter {
    overwrite: bool,
}

impl WptWriter {
    pub fn new() -> Self {
        Self { overwrite: false }
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn write(&self, path: &Path, contents: &str) -> Result<()> {
        if !self.overwrite && path.exists() {
            return Err(ConversionError::OutputExists(path.to_path_buf()));
        }

        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(directory)?;

        let mut temp_file = NamedTempFile::new_in(directory)?;
        temp_file.write_all(contents.as_bytes())?;
        temp_file.flush()?;

        if self.overwrite {
            temp_file.persist(path).map_err(|e| e.error)?;
        } else {
            temp_file.persist_noclobber(path).map_err(|e| {
                if e.error.kind() == IoErrorKind::AlreadyExists {
                    ConversionError::OutputExists(path.to_path_buf())
                } else {
                    ConversionError::Io(e.error)
                }
            })?;
        }

        debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }
}

impl Default for WptWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_directories() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("out").join("trip.wpt");

        WptWriter::new().write(&path, "$FormatGEO")?;

        assert_eq!(std::fs::read_to_string(&path)?, "$FormatGEO");
        Ok(())
    }

    #[test]
    fn test_existing_file_is_kept_without_overwrite() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("trip.wpt");
        std::fs::write(&path, "old")?;

        let err = WptWriter::new().write(&path, "new").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Output);
        assert_eq!(std::fs::read_to_string(&path)?, "old");

        WptWriter::new().with_overwrite(true).write(&path, "new")?;
        assert_eq!(std::fs::read_to_string(&path)?, "new");

        // Only the output file is left behind
        assert_eq!(std::fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }
}
