//! Module for the error management
use std::path::PathBuf;
use thiserror::Error;

/// Specific line from a CSV file that could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// Headers of the CSV file
    pub headers: Vec<String>,
    /// Values of the line that could not be parsed
    pub values: Vec<String>,
}

/// An error that can occur when opening a GTFS archive or reading its files.
#[derive(Error, Debug)]
pub enum Error {
    /// The archive could not be opened or its content could not be written to the extraction directory
    #[error("could not open the GTFS archive '{}'", path.display())]
    ArchiveOpen {
        /// The path that could not be accessed
        path: PathBuf,
        /// The initial I/O error
        #[source]
        source: std::io::Error,
    },
    /// The archive is not a valid zip file
    #[error("could not extract the GTFS archive '{}'", path.display())]
    Extraction {
        /// Path of the zip file
        path: PathBuf,
        /// The initial error of the zip library
        #[source]
        source: zip::result::ZipError,
    },
    /// Impossible to fetch the remote archive by the URL
    #[cfg(feature = "read-url")]
    #[error("impossible to remotely access file")]
    Retrieval(#[from] reqwest::Error),
    /// The remote server answered, but not with the archive
    #[cfg(feature = "read-url")]
    #[error("fetching '{url}' failed with HTTP status {status}")]
    RetrievalStatus {
        /// The requested URL
        url: String,
        /// HTTP status code of the answer
        status: u16,
    },
    /// A file is not present in the archive
    #[error("could not find file {0} in the archive")]
    MissingFile(String),
    /// The time is not given in the HH:MM:SS format
    #[error("'{0}' is not a valid time; HH:MM:SS format is expected.")]
    InvalidTime(String),
    /// The color is not given in the RRGGBB format, without a leading `#`
    #[error("'{0}' is not a valid color; RRGGBB format is expected, without a leading `#`")]
    InvalidColor(String),
    /// Generic Input/Output error
    #[error("impossible to read file")]
    IO(#[from] std::io::Error),
    /// Impossible to read a file
    #[error("impossible to read '{file_name}'")]
    NamedFileIO {
        /// The file name that could not be read
        file_name: String,
        /// The inital error that caused the unability to read the file
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// A row could not be decoded: wrong number of columns, broken quoting or a value of the wrong type
    #[error("impossible to read csv file '{file_name}'")]
    RowDecode {
        /// File name that could not be parsed as CSV
        file_name: String,
        /// The initial error by the csv library
        #[source]
        source: csv::Error,
        /// The line that could not be turned into a record
        line_in_error: Option<LineError>,
    },
    /// An entry of the extraction directory could not be removed
    ///
    /// Calling [crate::GtfsArchive::cleanup] again retries what is left
    #[error("could not remove '{}'", path.display())]
    Cleanup {
        /// The file or directory that is still there
        path: PathBuf,
        /// The initial I/O error
        #[source]
        source: std::io::Error,
    },
    /// A cached view was stored with another type than the one requested
    #[error("the cached view {0} does not have the requested type")]
    ViewTypeMismatch(String),
}
