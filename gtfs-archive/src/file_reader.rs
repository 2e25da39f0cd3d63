use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use log::debug;

use crate::archive::{ArchiveRef, GtfsArchive};
use crate::decoder::{Header, RowDecoder};
use crate::factory::{build_record, FeedRecord, GtfsFile, RecordFactory};
use crate::Error;

enum State {
    /// The file has not been opened yet
    Pending,
    Open(RowDecoder<BufReader<File>>),
    /// End of the file reached, or a failure was already reported: the handle is closed
    Exhausted,
}

/// Sequential reader over one file of an archive
///
/// The file is opened on the first read and closed as soon as the last row is read, a row
/// fails to decode, or [FileReader::close] is called. Once closed, the reader only returns
/// end-of-stream.
pub struct FileReader<T: FeedRecord> {
    archive: ArchiveRef,
    path: PathBuf,
    file: GtfsFile,
    trim_fields: bool,
    passes: Arc<AtomicUsize>,
    factory: RecordFactory<T>,
    state: State,
    header: Option<Header>,
}

impl<T: FeedRecord> FileReader<T> {
    pub(crate) fn new(
        archive: ArchiveRef,
        path: PathBuf,
        file: GtfsFile,
        trim_fields: bool,
        passes: Arc<AtomicUsize>,
    ) -> Self {
        Self {
            archive,
            path,
            file,
            trim_fields,
            passes,
            factory: build_record::<T>,
            state: State::Pending,
            header: None,
        }
    }

    /// The file read
    pub fn file(&self) -> GtfsFile {
        self.file
    }

    /// The archive this reader belongs to, if it is still alive
    pub fn archive(&self) -> Option<GtfsArchive> {
        self.archive.upgrade()
    }

    fn open(&self) -> Result<RowDecoder<BufReader<File>>, Error> {
        let file_name = self.file.file_name();
        let reader = File::open(&self.path).map_err(|e| Error::NamedFileIO {
            file_name: file_name.to_owned(),
            source: Box::new(e),
        })?;
        debug!("Opened {}", self.path.display());
        RowDecoder::new(file_name, BufReader::new(reader), self.trim_fields)
    }

    /// The field names of the file, opening it if needed
    ///
    /// Stays available after the reader is closed
    pub fn header(&mut self) -> Result<&Header, Error> {
        let header = match self.header.take() {
            Some(header) => header,
            None if matches!(self.state, State::Pending) => {
                let decoder = self.open()?;
                let header = decoder.header().clone();
                self.state = State::Open(decoder);
                header
            }
            // closed before anything was read: the header comes from a fresh handle
            None => self.open()?.header().clone(),
        };
        Ok(self.header.insert(header))
    }

    /// The next record, or `None` at the end of the file
    ///
    /// On an error, the file is closed: the error is returned once, then `None`
    pub fn next_record(&mut self) -> Result<Option<T>, Error> {
        if let State::Pending = self.state {
            match self.open() {
                Ok(decoder) => {
                    self.header = Some(decoder.header().clone());
                    self.state = State::Open(decoder);
                }
                Err(e) => {
                    self.state = State::Exhausted;
                    return Err(e);
                }
            }
        }

        let decoder = match &mut self.state {
            State::Open(decoder) => decoder,
            _ => return Ok(None),
        };
        let next = match decoder.advance() {
            Ok(true) => {
                let archive = &self.archive;
                let factory = self.factory;
                decoder.decode(|header, row| factory(archive, header, row)).map(Some)
            }
            Ok(false) => Ok(None),
            Err(e) => Err(e),
        };
        if !matches!(next, Ok(Some(_))) {
            self.close();
        }
        next
    }

    /// Closes the file. Following reads return end-of-stream
    pub fn close(&mut self) {
        if self.is_open() {
            debug!("Closed {}", self.path.display());
        }
        self.state = State::Exhausted;
    }

    /// Is the underlying file currently open
    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open(_))
    }

    /// Reads every record of the file into a new collection, in file order
    ///
    /// A fresh handle is used, so the position of this reader does not change.
    /// The first row that fails to decode fails the whole read.
    pub fn materialize(&self) -> Result<Vec<T>, Error> {
        let mut reader = Self::new(
            self.archive.clone(),
            self.path.clone(),
            self.file,
            self.trim_fields,
            self.passes.clone(),
        );
        reader.factory = self.factory;
        self.passes.fetch_add(1, Ordering::Relaxed);

        let mut records = Vec::new();
        while let Some(record) = reader.next_record()? {
            records.push(record);
        }
        debug!("Read {} records from {}", records.len(), self.file);
        Ok(records)
    }
}

impl<T: FeedRecord> Iterator for FileReader<T> {
    type Item = Result<T, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
