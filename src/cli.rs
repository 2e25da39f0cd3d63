use std::path::PathBuf;

use clap::Parser;
use gtfs_archive::ArchiveConfig;

#[derive(Parser, Debug)]
#[command(name = "gtfs-inspect")]
#[command(version)]
#[command(about = "Counts the rows of every file of a zipped GTFS feed", long_about = None)]
#[command(after_help = "Examples:\n  \
  gtfs-inspect klt.zip                              row counts of a local feed\n  \
  gtfs-inspect --json https://example.com/gtfs.zip  feed info of a remote feed, as JSON\n  \
  gtfs-inspect --keep --temp-root /var/tmp klt.zip  keep the extracted files")]
pub struct Cli {
    /// GTFS zip file path or HTTP URL
    #[arg(value_name = "FEED")]
    pub feed: String,

    /// Directory under which the feed is downloaded and extracted
    #[arg(long, value_name = "DIR")]
    pub temp_root: Option<PathBuf>,

    /// Keep the whitespace around values
    #[arg(long)]
    pub no_trim: bool,

    /// Do not remove the extracted files
    #[arg(long)]
    pub keep: bool,

    /// Print the feed info as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn config(&self) -> ArchiveConfig {
        let config = ArchiveConfig::default().trim_fields(!self.no_trim);
        match &self.temp_root {
            Some(dir) => config.temp_root(dir),
            None => config,
        }
    }
}
