mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use gtfs_archive::{FeedRecord, FileReader, GtfsArchive, GtfsFile};
use log::{error, info};

use crate::cli::Cli;

/// Counts the rows without keeping them in memory
fn count<T: FeedRecord>(reader: FileReader<T>) -> Result<usize> {
    let mut rows = 0;
    for record in reader {
        record?;
        rows += 1;
    }
    Ok(rows)
}

fn count_rows(archive: &GtfsArchive, file: GtfsFile) -> Result<usize> {
    match file {
        GtfsFile::Agency => count(archive.agency_file()?),
        GtfsFile::Stops => count(archive.stops_file()?),
        GtfsFile::Routes => count(archive.routes_file()?),
        GtfsFile::Trips => count(archive.trips_file()?),
        GtfsFile::StopTimes => count(archive.stop_times_file()?),
        GtfsFile::Calendar => count(archive.calendar_file()?),
        GtfsFile::CalendarDates => count(archive.calendar_dates_file()?),
        GtfsFile::Shapes => count(archive.shapes_file()?),
        GtfsFile::Transfers => count(archive.transfers_file()?),
        GtfsFile::FeedInfo => count(archive.feed_info_file()?),
        GtfsFile::Frequencies => count(archive.frequencies_file()?),
    }
}

fn print_feed_info(archive: &GtfsArchive, json: bool) -> Result<()> {
    if !archive.has_file(GtfsFile::FeedInfo) {
        println!("no feed_info.txt");
        return Ok(());
    }
    let feed_info = archive.feed_info()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&*feed_info)?);
        return Ok(());
    }
    for info in feed_info.iter() {
        println!(
            "{} ({}), version {}, valid from {} to {}",
            info,
            info.url,
            info.version.as_deref().unwrap_or("-"),
            info.start_date.map_or("-".to_owned(), |d| d.to_string()),
            info.end_date.map_or("-".to_owned(), |d| d.to_string()),
        );
    }
    Ok(())
}

fn inspect(archive: &GtfsArchive, cli: &Cli) -> Result<()> {
    for file in archive.files() {
        let rows = count_rows(archive, file).with_context(|| format!("reading {}", file))?;
        println!("{:>20} {:>10}", file.file_name(), rows);
    }
    print_feed_info(archive, cli.json)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let archive = cli
        .config()
        .open(&cli.feed)
        .with_context(|| format!("opening {}", cli.feed))?;
    let result = inspect(&archive, &cli);

    if cli.keep {
        info!("Kept {}", archive.root().display());
        result
    } else {
        after_cleanup(result, archive.cleanup())
    }
}

/// The error of the inspection comes first, a failed cleanup is then only logged
fn after_cleanup(result: Result<()>, cleanup: Result<(), gtfs_archive::Error>) -> Result<()> {
    match (result, cleanup) {
        (Err(e), Err(cleanup)) => {
            error!("{}", cleanup);
            Err(e)
        }
        (Ok(()), Err(cleanup)) => Err(cleanup.into()),
        (result, Ok(())) => result,
    }
}
