use crate::error::{ConversionError, Result};
use crate::processors::Converter;
use crate::readers::KmlReader;
use crate::utils::filename::wpt_file_name;
use crate::utils::progress::ProgressReporter;
use crate::writers::WptWriter;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Result of converting one file in a batch.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn display_summary(&self) -> String {
        let mut summary = format!(
            "Batch Summary:\n  Documents: {}\n  Converted: {}\n  Failed: {}\n",
            self.total(),
            self.succeeded(),
            self.failed()
        );

        for outcome in self.outcomes.iter().filter(|o| !o.is_success()) {
            summary.push_str(&format!(
                "    {}: {}\n",
                outcome.input.display(),
                outcome.error.as_deref().unwrap_or_default()
            ));
        }

        summary
    }

    /// Fail when any document in the batch failed.
    pub fn into_result(self) -> Result<Self> {
        match self.failed() {
            0 => Ok(self),
            failed => Err(ConversionError::BatchFailed {
                failed,
                total: self.total(),
            }),
        }
    }
}

/// Converts every KML/KMZ file of a directory on a rayon pool.
///
/// Documents are independent: one failing file is recorded in the report
/// and the rest of the batch carries on.
pub struct BatchProcessor {
    max_workers: usize,
    converter: Converter,
    writer: WptWriter,
    output_dir: Option<PathBuf>,
    recursive: bool,
}

impl BatchProcessor {
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers,
            converter: Converter::new(),
            writer: WptWriter::new(),
            output_dir: None,
            recursive: false,
        }
    }

    pub fn with_converter(mut self, converter: Converter) -> Self {
        self.converter = converter;
        self
    }

    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        self.output_dir = output_dir;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.writer = WptWriter::new().with_overwrite(overwrite);
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// KML and KMZ files under `dir`, sorted by path.
    pub fn find_inputs(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut inputs = Vec::new();
        let mut pending = vec![dir.to_path_buf()];

        while let Some(current) = pending.pop() {
            for entry in std::fs::read_dir(&current)? {
                let entry = entry?;
                let path = entry.path();
                // Symlinked directories are not followed
                if entry.file_type()?.is_dir() {
                    if self.recursive {
                        pending.push(path);
                    }
                } else if KmlReader::is_supported(&path) {
                    inputs.push(path);
                }
            }
        }

        inputs.sort();
        Ok(inputs)
    }

    /// Convert every input under `dir`.
    pub fn process_directory(
        &self,
        dir: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<BatchReport> {
        if !dir.is_dir() {
            return Err(ConversionError::InvalidInput(format!(
                "{} is not a directory",
                dir.display()
            )));
        }

        let inputs = self.find_inputs(dir)?;
        info!("Found {} documents in {}", inputs.len(), dir.display());
        self.process_files(dir, &inputs, progress)
    }

    /// Convert `inputs`, mirroring their layout below `base` into the
    /// output directory when one is set.
    pub fn process_files(
        &self,
        base: &Path,
        inputs: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Result<BatchReport> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()
            .map_err(|e| ConversionError::Config(e.to_string()))?;

        let outcomes: Vec<FileOutcome> = pool.install(|| {
            inputs
                .par_iter()
                .map(|input| {
                    let output = self.output_path(base, input);
                    let outcome = match self.convert_file(input, &output) {
                        Ok(()) => FileOutcome {
                            input: input.clone(),
                            output: Some(output),
                            error: None,
                        },
                        Err(e) => {
                            warn!("Failed to convert {}: {}", input.display(), e);
                            FileOutcome {
                                input: input.clone(),
                                output: None,
                                error: Some(e.to_string()),
                            }
                        }
                    };

                    if let Some(p) = progress {
                        p.increment(1);
                    }

                    outcome
                })
                .collect()
        });

        Ok(BatchReport { outcomes })
    }

    fn convert_file(&self, input: &Path, output: &Path) -> Result<()> {
        let kml = KmlReader::read_path(input)?;
        let wpt = self.converter.convert(&kml)?;
        self.writer.write(output, &wpt)?;
        info!("Converted {} -> {}", input.display(), output.display());
        Ok(())
    }

    fn output_path(&self, base: &Path, input: &Path) -> PathBuf {
        let output = wpt_file_name(input);
        match &self.output_dir {
            Some(dir) => match output.strip_prefix(base) {
                Ok(relative) => dir.join(relative),
                Err(_) => dir.join(output.file_name().unwrap_or_default()),
            },
            None => output,
        }
    }
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}
