use std::fmt;

use csv::StringRecord;
use serde::de::DeserializeOwned;

use crate::archive::{ArchiveRef, GtfsArchive};
use crate::decoder::Header;
use crate::objects::*;

/// The component files of a feed that can be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GtfsFile {
    /// `agency.txt`
    Agency,
    /// `stops.txt`
    Stops,
    /// `routes.txt`
    Routes,
    /// `trips.txt`
    Trips,
    /// `stop_times.txt`
    StopTimes,
    /// `calendar.txt`
    Calendar,
    /// `calendar_dates.txt`
    CalendarDates,
    /// `shapes.txt`
    Shapes,
    /// `transfers.txt`
    Transfers,
    /// `feed_info.txt`
    FeedInfo,
    /// `frequencies.txt`
    Frequencies,
}

impl GtfsFile {
    /// Every supported file, in the order of the reference
    pub const ALL: [GtfsFile; 11] = [
        GtfsFile::Agency,
        GtfsFile::Stops,
        GtfsFile::Routes,
        GtfsFile::Trips,
        GtfsFile::StopTimes,
        GtfsFile::Calendar,
        GtfsFile::CalendarDates,
        GtfsFile::Shapes,
        GtfsFile::Transfers,
        GtfsFile::FeedInfo,
        GtfsFile::Frequencies,
    ];

    /// Name of the file inside the archive
    pub fn file_name(self) -> &'static str {
        match self {
            GtfsFile::Agency => "agency.txt",
            GtfsFile::Stops => "stops.txt",
            GtfsFile::Routes => "routes.txt",
            GtfsFile::Trips => "trips.txt",
            GtfsFile::StopTimes => "stop_times.txt",
            GtfsFile::Calendar => "calendar.txt",
            GtfsFile::CalendarDates => "calendar_dates.txt",
            GtfsFile::Shapes => "shapes.txt",
            GtfsFile::Transfers => "transfers.txt",
            GtfsFile::FeedInfo => "feed_info.txt",
            GtfsFile::Frequencies => "frequencies.txt",
        }
    }

    /// The supported file with that name, if any
    pub fn from_file_name(name: &str) -> Option<GtfsFile> {
        GtfsFile::ALL.into_iter().find(|f| f.file_name() == name)
    }
}

impl fmt::Display for GtfsFile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// A record read from one row of a [GtfsFile]
///
/// Each record type is bound to exactly one file, so the file to open and the way to build the
/// records are both known when the reader is created.
pub trait FeedRecord: DeserializeOwned + Clone + Send + Sync + 'static {
    /// The file holding this kind of records
    const FILE: GtfsFile;

    /// Sets the back-reference to the archive the record was read from
    fn attach(&mut self, archive: ArchiveRef);

    /// The back-reference to the archive the record was read from
    fn archive_ref(&self) -> &ArchiveRef;

    /// The archive the record was read from, if it is still alive
    fn archive(&self) -> Option<GtfsArchive> {
        self.archive_ref().upgrade()
    }
}

/// Builds a record of type `T` from a row labelled by the header
pub type RecordFactory<T> = fn(&ArchiveRef, &Header, &StringRecord) -> Result<T, csv::Error>;

/// Builds a record of type `T` from a row labelled by the header
///
/// Numeric, date and enumerated fields are converted; identifiers are kept as strings
pub fn build_record<T: FeedRecord>(
    archive: &ArchiveRef,
    header: &Header,
    row: &StringRecord,
) -> Result<T, csv::Error> {
    let mut record: T = row.deserialize(Some(header.record()))?;
    record.attach(archive.clone());
    Ok(record)
}

macro_rules! feed_records {
    ($($record:ty => $file:expr),* $(,)?) => {
        $(
            impl FeedRecord for $record {
                const FILE: GtfsFile = $file;

                fn attach(&mut self, archive: ArchiveRef) {
                    self.archive = archive;
                }

                fn archive_ref(&self) -> &ArchiveRef {
                    &self.archive
                }
            }
        )*
    };
}

feed_records! {
    Agency => GtfsFile::Agency,
    Stop => GtfsFile::Stops,
    Route => GtfsFile::Routes,
    Trip => GtfsFile::Trips,
    StopTime => GtfsFile::StopTimes,
    CalendarEntry => GtfsFile::Calendar,
    CalendarDate => GtfsFile::CalendarDates,
    ShapePoint => GtfsFile::Shapes,
    Transfer => GtfsFile::Transfers,
    FeedInfo => GtfsFile::FeedInfo,
    Frequency => GtfsFile::Frequencies,
}
