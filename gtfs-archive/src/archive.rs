use std::collections::hash_map::Entry;
use std::ffi::OsString;
use std::fmt;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use sha2::{Digest, Sha256};

use crate::cache::ViewCache;
use crate::factory::{FeedRecord, GtfsFile};
use crate::file_reader::FileReader;
use crate::objects::*;
use crate::{ArchiveConfig, Error};

/// An extracted GTFS feed
///
/// The archive hands out a new [FileReader] for every call to one of the `*_file` methods, and
/// keeps the views computed by [GtfsArchive::stops], [GtfsArchive::stop]… for its whole lifetime.
///
/// The extraction directory is never removed automatically: call [GtfsArchive::cleanup] once done.
///
/// ```no_run
/// let archive = gtfs_archive::GtfsArchive::open_from_path("fixtures/klt.zip")?;
/// let mut stops = archive.stops_file()?;
/// while let Some(stop) = stops.next_record()? {
///     println!("{}", stop);
/// }
/// archive.cleanup()?;
/// # Ok::<(), gtfs_archive::Error>(())
/// ```
#[derive(Clone)]
pub struct GtfsArchive {
    inner: Arc<ArchiveInner>,
}

pub(crate) struct ArchiveInner {
    root: PathBuf,
    trim_fields: bool,
    views: ViewCache,
    materialize_passes: Arc<AtomicUsize>,
}

/// Non-owning reference from a record (or a reader) to its archive
///
/// It never keeps the archive alive
#[derive(Clone, Default)]
pub struct ArchiveRef(Weak<ArchiveInner>);

impl ArchiveRef {
    /// The archive, if it is still alive
    pub fn upgrade(&self) -> Option<GtfsArchive> {
        self.0.upgrade().map(|inner| GtfsArchive { inner })
    }

    /// Do both references point to the same archive
    pub fn same_archive(&self, other: &ArchiveRef) -> bool {
        Weak::ptr_eq(&self.0, &other.0)
    }
}

/// Records are compared by their values: the back-reference never makes two records different
impl PartialEq for ArchiveRef {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl fmt::Debug for ArchiveRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0.upgrade() {
            Some(inner) => write!(f, "ArchiveRef({})", inner.root.display()),
            None => write!(f, "ArchiveRef(<dropped>)"),
        }
    }
}

impl fmt::Debug for GtfsArchive {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("GtfsArchive")
            .field("root", &self.inner.root)
            .field("views", &self.inner.views.len())
            .finish()
    }
}

fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

/// Name under which the archive behind `url` is downloaded and extracted
#[cfg(feature = "read-url")]
pub(crate) fn url_digest(url: &str) -> String {
    sha256_hex(url.as_bytes())
}

fn extraction_error(path: &Path) -> impl Fn(zip::result::ZipError) -> Error + '_ {
    move |source| Error::Extraction {
        path: path.to_owned(),
        source,
    }
}

fn open_error(path: &Path) -> impl FnOnce(io::Error) -> Error + '_ {
    move |source| Error::ArchiveOpen {
        path: path.to_owned(),
        source,
    }
}

impl GtfsArchive {
    /// Opens from an url (if starts with `"http"`), or a local zip file, with the default [ArchiveConfig]
    pub fn open(gtfs: &str) -> Result<GtfsArchive, Error> {
        ArchiveConfig::default().open(gtfs)
    }

    /// Extracts a local zip file with the default [ArchiveConfig]
    pub fn open_from_path<P: AsRef<Path>>(path: P) -> Result<GtfsArchive, Error> {
        ArchiveConfig::default().open_from_path(path)
    }

    /// Fetches and extracts a remote zip file with the default [ArchiveConfig]
    #[cfg(feature = "read-url")]
    pub fn open_from_url(url: &str) -> Result<GtfsArchive, Error> {
        ArchiveConfig::default().open_from_url(url)
    }

    fn new(root: PathBuf, config: &ArchiveConfig) -> Self {
        Self {
            inner: Arc::new(ArchiveInner {
                root,
                trim_fields: config.trim_fields,
                views: ViewCache::default(),
                materialize_passes: Arc::new(AtomicUsize::new(0)),
            }),
        }
    }

    pub(crate) fn extract_local(config: &ArchiveConfig, path: &Path) -> Result<GtfsArchive, Error> {
        let absolute = fs::canonicalize(path).map_err(open_error(path))?;
        let stem = absolute
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("feed");
        let digest = sha256_hex(absolute.to_string_lossy().as_bytes());
        let root = config
            .temp_root
            .join(format!("{}-{}", stem, &digest[..16]));

        extract(&absolute, &root)?;
        Ok(GtfsArchive::new(root, config))
    }

    #[cfg(feature = "read-url")]
    pub(crate) fn fetch_and_extract(config: &ArchiveConfig, url: &str) -> Result<GtfsArchive, Error> {
        let digest = url_digest(url);
        fs::create_dir_all(&config.temp_root).map_err(open_error(&config.temp_root))?;
        let zip_path = config.temp_root.join(format!("{}.zip", digest));

        if zip_path.is_file() {
            info!("Reusing {} already fetched from {}", zip_path.display(), url);
        } else {
            download(url, &zip_path)?;
        }

        let root = config.temp_root.join(&digest);
        if let Err(e) = extract(&zip_path, &root) {
            if let Error::Extraction { .. } = e {
                // not a zip, fetch it again next time
                warn!("Removing {}: {}", zip_path.display(), e);
                if let Err(remove) = fs::remove_file(&zip_path) {
                    warn!("Could not remove {}: {}", zip_path.display(), remove);
                }
            }
            return Err(e);
        }
        if !config.keep_downloaded_archive {
            fs::remove_file(&zip_path).map_err(open_error(&zip_path))?;
        }
        Ok(GtfsArchive::new(root, config))
    }

    /// The extraction directory
    pub fn root(&self) -> &Path {
        &self.inner.root
    }

    /// Does the archive contain this file
    pub fn has_file(&self, file: GtfsFile) -> bool {
        self.inner.root.join(file.file_name()).is_file()
    }

    /// All the supported files present in the archive
    pub fn files(&self) -> Vec<GtfsFile> {
        GtfsFile::ALL
            .into_iter()
            .filter(|f| self.has_file(*f))
            .collect()
    }

    /// Number of full passes over a file done by [FileReader::materialize] for this archive
    pub fn materialize_count(&self) -> usize {
        self.inner.materialize_passes.load(Ordering::Relaxed)
    }

    pub(crate) fn views(&self) -> &ViewCache {
        &self.inner.views
    }

    /// Number of derived views computed for this archive
    pub fn view_builds(&self) -> usize {
        self.inner.views.builds()
    }

    pub(crate) fn downgrade(&self) -> ArchiveRef {
        ArchiveRef(Arc::downgrade(&self.inner))
    }

    /// A new reader over the file holding the records `T`, starting at the first row
    ///
    /// Fails with [Error::MissingFile] if the archive does not contain the file
    pub fn file<T: FeedRecord>(&self) -> Result<FileReader<T>, Error> {
        let path = self.inner.root.join(T::FILE.file_name());
        if !path.is_file() {
            return Err(Error::MissingFile(T::FILE.file_name().to_owned()));
        }
        Ok(FileReader::new(
            self.downgrade(),
            path,
            T::FILE,
            self.inner.trim_fields,
            self.inner.materialize_passes.clone(),
        ))
    }

    /// Reader over `agency.txt`
    pub fn agency_file(&self) -> Result<FileReader<Agency>, Error> {
        self.file()
    }

    /// Reader over `stops.txt`
    pub fn stops_file(&self) -> Result<FileReader<Stop>, Error> {
        self.file()
    }

    /// Reader over `routes.txt`
    pub fn routes_file(&self) -> Result<FileReader<Route>, Error> {
        self.file()
    }

    /// Reader over `trips.txt`
    pub fn trips_file(&self) -> Result<FileReader<Trip>, Error> {
        self.file()
    }

    /// Reader over `stop_times.txt`
    pub fn stop_times_file(&self) -> Result<FileReader<StopTime>, Error> {
        self.file()
    }

    /// Reader over `calendar.txt`
    pub fn calendar_file(&self) -> Result<FileReader<CalendarEntry>, Error> {
        self.file()
    }

    /// Reader over `calendar_dates.txt`
    pub fn calendar_dates_file(&self) -> Result<FileReader<CalendarDate>, Error> {
        self.file()
    }

    /// Reader over `shapes.txt`
    pub fn shapes_file(&self) -> Result<FileReader<ShapePoint>, Error> {
        self.file()
    }

    /// Reader over `transfers.txt`
    pub fn transfers_file(&self) -> Result<FileReader<Transfer>, Error> {
        self.file()
    }

    /// Reader over `feed_info.txt`
    pub fn feed_info_file(&self) -> Result<FileReader<FeedInfo>, Error> {
        self.file()
    }

    /// Reader over `frequencies.txt`
    pub fn frequencies_file(&self) -> Result<FileReader<Frequency>, Error> {
        self.file()
    }

    /// Deletes the extracted files, then the extraction directory
    ///
    /// Does nothing if the directory is already gone. If an entry cannot be removed,
    /// [Error::Cleanup] is returned and calling `cleanup` again retries what is left.
    /// The computed views stay available.
    pub fn cleanup(&self) -> Result<(), Error> {
        let root = &self.inner.root;
        let entries = match fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(source) => {
                return Err(Error::Cleanup {
                    path: root.clone(),
                    source,
                })
            }
        };

        for entry in entries {
            let path = entry
                .map_err(|source| Error::Cleanup {
                    path: root.clone(),
                    source,
                })?
                .path();
            remove_if_present(&path, fs::remove_file(&path))?;
        }
        remove_if_present(root, fs::remove_dir(root))?;
        info!("Removed {}", root.display());
        Ok(())
    }
}

fn remove_if_present(path: &Path, result: io::Result<()>) -> Result<(), Error> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(Error::Cleanup {
            path: path.to_owned(),
            source,
        }),
    }
}

/// Extracts every file of the zip directly in `root`
///
/// Feeds are sometimes zipped with a top-level folder, so only the file names are kept.
/// When several entries share a file name, the one closest to the top of the zip is
/// extracted, the first of them on a tie.
fn extract(zip_path: &Path, root: &Path) -> Result<(), Error> {
    let file = File::open(zip_path).map_err(open_error(zip_path))?;
    let mut archive = zip::ZipArchive::new(file).map_err(extraction_error(zip_path))?;
    fs::create_dir_all(root).map_err(open_error(root))?;
    debug!("Extracting {} entries of {}", archive.len(), zip_path.display());

    // file name -> (depth, index, name in the zip)
    let mut selected: FxHashMap<OsString, (usize, usize, String)> = FxHashMap::default();
    for i in 0..archive.len() {
        let entry = archive.by_index(i).map_err(extraction_error(zip_path))?;
        if entry.is_dir() {
            continue;
        }
        let path = match entry.enclosed_name() {
            Some(path) => path,
            None => {
                warn!("Skipping unsafe entry {} of {}", entry.name(), zip_path.display());
                continue;
            }
        };
        let file_name = match path.file_name() {
            Some(name) => name.to_owned(),
            None => continue,
        };
        let depth = path.components().count();
        match selected.entry(file_name) {
            Entry::Vacant(slot) => {
                slot.insert((depth, i, entry.name().to_owned()));
            }
            Entry::Occupied(mut slot) => {
                let kept = slot.get();
                if depth < kept.0 {
                    warn!(
                        "Skipping {} of {}: {} has the same file name",
                        kept.2,
                        zip_path.display(),
                        entry.name()
                    );
                    slot.insert((depth, i, entry.name().to_owned()));
                } else {
                    warn!(
                        "Skipping {} of {}: {} has the same file name",
                        entry.name(),
                        zip_path.display(),
                        kept.2
                    );
                }
            }
        }
    }

    let mut entries: Vec<(usize, OsString)> = selected
        .into_iter()
        .map(|(file_name, (_, i, _))| (i, file_name))
        .collect();
    entries.sort_unstable();

    let count = entries.len();
    for (i, file_name) in entries {
        let mut entry = archive.by_index(i).map_err(extraction_error(zip_path))?;
        let output_path = root.join(file_name);
        let mut output = File::create(&output_path).map_err(open_error(&output_path))?;
        io::copy(&mut entry, &mut output).map_err(open_error(&output_path))?;
    }
    info!(
        "Extracted {} files from {} to {}",
        count,
        zip_path.display(),
        root.display()
    );
    Ok(())
}

#[cfg(feature = "read-url")]
fn download(url: &str, destination: &Path) -> Result<(), Error> {
    let partial = destination.with_extension("zip.part");
    if partial.exists() {
        warn!("Discarding the unfinished download {}", partial.display());
    }

    info!("Fetching {}", url);
    let mut response = reqwest::blocking::get(url)?;
    if !response.status().is_success() {
        return Err(Error::RetrievalStatus {
            url: url.to_owned(),
            status: response.status().as_u16(),
        });
    }
    let mut file = File::create(&partial).map_err(open_error(&partial))?;
    let size = response.copy_to(&mut file)?;
    drop(file);
    fs::rename(&partial, destination).map_err(open_error(destination))?;
    debug!("Fetched {} bytes into {}", size, destination.display());
    Ok(())
}
