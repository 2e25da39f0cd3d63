use std::io::{BufRead, Read};

use csv::StringRecord;

use crate::error::LineError;
use crate::Error;

const UTF8_BOM: [u8; 3] = [0xef, 0xbb, 0xbf];

/// The ordered field names read from the first line of a file
///
/// They label, by position, the values of every following row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header {
    record: StringRecord,
}

impl Header {
    /// Field names, in the order of the columns
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.record.iter()
    }

    /// Owned copy of the field names
    pub fn names(&self) -> Vec<String> {
        self.fields().map(String::from).collect()
    }

    /// Column of a field
    pub fn position(&self, field: &str) -> Option<usize> {
        self.fields().position(|f| f == field)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.record.len()
    }

    /// True when the file had an empty first line (or no line at all)
    pub fn is_empty(&self) -> bool {
        self.record.is_empty()
    }

    pub(crate) fn record(&self) -> &StringRecord {
        &self.record
    }
}

impl<'a> From<Vec<&'a str>> for Header {
    fn from(fields: Vec<&'a str>) -> Self {
        Self {
            record: StringRecord::from(fields),
        }
    }
}

/// Decodes the rows of one file, one at a time
///
/// Quoted fields may hold the delimiter, line breaks and doubled quotes.
/// Every row must have as many columns as the header.
pub(crate) struct RowDecoder<R: Read> {
    file_name: String,
    reader: csv::Reader<R>,
    header: Header,
    row: StringRecord,
}

impl<R: BufRead> RowDecoder<R> {
    /// Skips the byte order mark and reads the header line
    pub(crate) fn new(file_name: &str, mut source: R, trim_fields: bool) -> Result<Self, Error> {
        skip_bom(&mut source).map_err(|e| Error::NamedFileIO {
            file_name: file_name.to_owned(),
            source: Box::new(e),
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .flexible(false)
            .trim(if trim_fields {
                csv::Trim::Fields
            } else {
                csv::Trim::None
            })
            .from_reader(source);
        let record = reader
            .headers()
            .map_err(|e| Error::RowDecode {
                file_name: file_name.to_owned(),
                source: e,
                line_in_error: None,
            })?
            .clone();

        Ok(Self {
            file_name: file_name.to_owned(),
            reader,
            header: Header { record },
            row: StringRecord::new(),
        })
    }
}

impl<R: Read> RowDecoder<R> {
    pub(crate) fn header(&self) -> &Header {
        &self.header
    }

    /// Reads the next row into the internal buffer. Returns false at the end of the file
    pub(crate) fn advance(&mut self) -> Result<bool, Error> {
        let file_name = &self.file_name;
        self.reader
            .read_record(&mut self.row)
            .map_err(|e| Error::RowDecode {
                file_name: file_name.clone(),
                source: e,
                line_in_error: None,
            })
    }

    /// Builds a value out of the current row, labelled by the header
    pub(crate) fn decode<T, F>(&self, build: F) -> Result<T, Error>
    where
        F: FnOnce(&Header, &StringRecord) -> Result<T, csv::Error>,
    {
        build(&self.header, &self.row).map_err(|e| Error::RowDecode {
            file_name: self.file_name.clone(),
            source: e,
            line_in_error: Some(LineError {
                headers: self.header.names(),
                values: self.row.iter().map(String::from).collect(),
            }),
        })
    }
}

fn skip_bom<R: BufRead>(source: &mut R) -> std::io::Result<()> {
    if source.fill_buf()?.starts_with(&UTF8_BOM) {
        source.consume(UTF8_BOM.len());
    }
    Ok(())
}
