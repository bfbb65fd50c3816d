use crate::cli::args::{Cli, Commands};
use crate::error::{ConversionError, Result};
use crate::processors::{BatchProcessor, Converter};
use crate::readers::KmlReader;
use crate::settings::Settings;
use crate::utils::filename::output_path_for;
use crate::utils::logging::init_logging;
use crate::utils::progress::ProgressReporter;
use crate::writers::WptWriter;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let settings = Settings::load(cli.config.as_deref())?;
    debug!("Loaded settings: {:?}", settings);

    match cli.command {
        Commands::Convert {
            input,
            output,
            stdout,
            force,
            excluded_folder,
        } => {
            let converter = converter_for(&settings, excluded_folder);

            let source = input.clone();
            let wpt = tokio::task::spawn_blocking(move || -> Result<String> {
                let kml = KmlReader::read_path(&source)?;
                converter.convert(&kml)
            })
            .await??;

            if stdout {
                // Same bytes as the written file, no trailing newline
                print!("{}", wpt);
                std::io::stdout().flush()?;
                return Ok(());
            }

            let output_file =
                output.unwrap_or_else(|| output_path_for(&input, settings.output_dir.as_deref()));

            WptWriter::new()
                .with_overwrite(force || settings.overwrite)
                .write(&output_file, &wpt)?;

            println!(
                "Converted {} → {} ({} waypoints)",
                input.display(),
                output_file.display(),
                wpt.lines().count() - 1
            );
        }

        Commands::ConvertDirectory {
            input_dir,
            output_dir,
            recursive,
            max_workers,
            force,
            excluded_folder,
        } => {
            let max_workers = max_workers.unwrap_or(settings.max_workers).max(1);
            let output_dir: Option<PathBuf> = output_dir.or_else(|| settings.output_dir.clone());

            println!("Converting documents in {}", input_dir.display());
            println!("Workers: {}", max_workers);

            let processor = BatchProcessor::new(max_workers)
                .with_converter(converter_for(&settings, excluded_folder))
                .with_output_dir(output_dir)
                .with_overwrite(force || settings.overwrite)
                .with_recursive(recursive);

            let report = tokio::task::spawn_blocking(move || {
                let inputs = processor.find_inputs(&input_dir)?;
                let progress =
                    ProgressReporter::new(inputs.len() as u64, "Converting documents...", false);
                let report = processor.process_files(&input_dir, &inputs, Some(&progress))?;
                progress.finish_with_message(&format!("Processed {} documents", report.total()));
                Ok::<_, ConversionError>(report)
            })
            .await??;

            println!("\n{}", report.display_summary());
            report.into_result()?;
            println!("Conversion complete!");
        }

        Commands::Info {
            input,
            json,
            excluded_folder,
        } => {
            let converter = converter_for(&settings, excluded_folder);
            let kml = KmlReader::read_path(&input)?;
            let summary = converter.summarize(&kml)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("Analyzing KML file: {}", input.display());
                println!("\n{}", summary.display_summary());
            }
        }
    }

    Ok(())
}

fn converter_for(settings: &Settings, excluded_folder: Option<String>) -> Converter {
    match excluded_folder {
        Some(folder) => Converter::new().with_excluded_folder(folder),
        None => settings.converter(),
    }
}
