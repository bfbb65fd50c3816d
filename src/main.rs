use clap::Parser;
use kml2wpt::cli::{run, Cli};
use kml2wpt::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
