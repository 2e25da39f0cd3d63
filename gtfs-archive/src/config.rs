use std::path::{Path, PathBuf};

use crate::{Error, GtfsArchive};

fn default_temp_root() -> PathBuf {
    std::env::temp_dir().join("gtfs")
}

/// Allows to parameterize where archives are extracted and how their files are read
///
/// ```no_run
///let archive = gtfs_archive::ArchiveConfig::default()
///    .temp_root("/var/tmp/feeds")
///    .trim_fields(false)
///    .open_from_path("fixtures/klt.zip")?;
///let stops = archive.stops()?;
///archive.cleanup()?;
/// # Ok::<(), gtfs_archive::Error>(())
///```
#[derive(Derivative, Debug, Clone)]
#[derivative(Default)]
pub struct ArchiveConfig {
    /// Directory under which downloaded archives and extraction directories are created
    #[derivative(Default(value = "default_temp_root()"))]
    pub temp_root: PathBuf,
    /// Trim the whitespace around the values (header names are never trimmed)
    ///
    /// It is quite time consumming
    /// If performance is an issue, and if your data is high quality, you can switch it off
    #[derivative(Default(value = "true"))]
    pub trim_fields: bool,
    /// Keep the zip downloaded by [ArchiveConfig::open_from_url] once it is extracted
    #[derivative(Default(value = "false"))]
    pub keep_downloaded_archive: bool,
}

impl ArchiveConfig {
    /// Sets the directory under which the archives are extracted (default: `gtfs` in the system temporary directory)
    ///
    /// Returns Self and can be chained
    pub fn temp_root<P: Into<PathBuf>>(mut self, temp_root: P) -> Self {
        self.temp_root = temp_root.into();
        self
    }

    /// Should the values be trimmed (default: true)
    pub fn trim_fields(mut self, trim_fields: bool) -> Self {
        self.trim_fields = trim_fields;
        self
    }

    /// Should a downloaded zip be kept next to its extraction directory (default: false)
    pub fn keep_downloaded_archive(mut self, keep: bool) -> Self {
        self.keep_downloaded_archive = keep;
        self
    }

    /// Opens from an url (if starts with `"http"`) if the feature `read-url` is activated,
    /// or a local zip file
    pub fn open(&self, gtfs: &str) -> Result<GtfsArchive, Error> {
        #[cfg(feature = "read-url")]
        if gtfs.starts_with("http") {
            return self.open_from_url(gtfs);
        }
        self.open_from_path(gtfs)
    }

    /// Extracts a local zip archive
    pub fn open_from_path<P: AsRef<Path>>(&self, path: P) -> Result<GtfsArchive, Error> {
        GtfsArchive::extract_local(self, path.as_ref())
    }

    /// Fetches the zip archive behind the url, unless it was already fetched, and extracts it
    #[cfg(feature = "read-url")]
    pub fn open_from_url(&self, url: &str) -> Result<GtfsArchive, Error> {
        GtfsArchive::fetch_and_extract(self, url)
    }
}
