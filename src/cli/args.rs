use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kml2wpt")]
#[command(about = "Convert KML placemarks into WPT waypoint lists")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Configuration file [default: kml2wpt.toml if present]"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a single KML or KMZ file
    Convert {
        #[arg(short, long, help = "Input .kml or .kmz file")]
        input: PathBuf,

        #[arg(
            short,
            long,
            help = "Output WPT file path [default: input name with .wpt extension]"
        )]
        output: Option<PathBuf>,

        #[arg(long, help = "Print the WPT text instead of writing a file")]
        stdout: bool,

        #[arg(short, long, help = "Overwrite an existing output file")]
        force: bool,

        #[arg(long, help = "Skip placemarks inside folders with this name [default: Waypoints]")]
        excluded_folder: Option<String>,
    },

    /// Convert every KML/KMZ file in a directory
    ConvertDirectory {
        #[arg(short, long, help = "Input directory")]
        input_dir: PathBuf,

        #[arg(
            short,
            long,
            help = "Output directory [default: next to each input file]"
        )]
        output_dir: Option<PathBuf>,

        #[arg(short, long, help = "Descend into subdirectories")]
        recursive: bool,

        #[arg(long, help = "Worker threads [default: number of CPUs]")]
        max_workers: Option<usize>,

        #[arg(short, long, help = "Overwrite existing output files")]
        force: bool,

        #[arg(long)]
        excluded_folder: Option<String>,
    },

    /// Show what a conversion would keep, exclude and skip
    Info {
        #[arg(short, long, help = "Input .kml or .kmz file")]
        input: PathBuf,

        #[arg(long, help = "Print the summary as JSON")]
        json: bool,

        #[arg(long)]
        excluded_folder: Option<String>,
    },
}
