//! Command line tool to convert NMEA logs to GPX tracks
mod cli;
use cli::Cli;

use std::fs::File;
use std::io::{BufWriter, Write};

use env_logger::{Builder, Target};
use log::info;

use nmea2gpx::prelude::{process, BufferedReader, Error, GpxWriter};

fn main() -> Result<(), Error> {
    let mut builder = Builder::from_default_env();
    builder
        .target(Target::Stderr)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let cli = Cli::new();

    let reader = match cli.input_path() {
        Some(path) => {
            info!("reading \"{}\"", path.display());
            BufferedReader::new(path)?
        },
        None => BufferedReader::stdin(),
    };

    let output: Box<dyn Write> = match cli.output_path() {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout().lock()),
    };

    let mut gpx = GpxWriter::new(BufWriter::new(output), &cli.creator())?;
    let statistics = process(reader, &mut gpx, cli.hemisphere_policy())?;
    gpx.finish()?;

    info!("{}", statistics);
    if let Some(path) = cli.output_path() {
        info!("\"{}\" generated", path.display());
    }
    Ok(())
}
