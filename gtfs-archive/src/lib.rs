/*! Reads [GTFS](https://gtfs.org/) feeds distributed as zip archives.

A feed is a collection of CSV files. Each file holds a collection of one type of object (stops, routes, trips…)
that reference each other through unique identifiers.

To get started, see [GtfsArchive].

## Streaming or materializing

Files such as `stop_times.txt` or `shapes.txt` can hold millions of rows. Every `*_file` accessor of
[GtfsArchive] returns a new [FileReader] that decodes one row at a time, so iterating a file never holds
more than one record in memory.

When a whole collection, or an index by identifier, is needed, the views of [GtfsArchive]
([GtfsArchive::stops], [GtfsArchive::stop], [GtfsArchive::shape]…) read the file once and keep the
result for the lifetime of the archive.

```no_run
let archive = gtfs_archive::GtfsArchive::open("https://example.com/gtfs.zip")?;
let stop_times = archive.stop_times_file()?.filter_map(Result::ok).count();
let stop = archive.stop("9021008004033000")?;
archive.cleanup()?;
# Ok::<(), gtfs_archive::Error>(())
```

## Design decisions

### Use of Enum

Many values are integers that are actually enumerations of certain values. We always use Rust enums, like [LocationType] to represent them, and not the integer value.

### Identifiers

Identifiers are kept as [String], even when a feed only uses numbers: they are opaque for the reference.

### Failures

A missing file fails when its reader is requested, with [Error::MissingFile].
A row that cannot be decoded fails the whole read with [Error::RowDecode]: no row is silently skipped.

### Extraction directory

Archives are extracted under [ArchiveConfig::temp_root]. The directory stays until [GtfsArchive::cleanup] is called.
*/
#![warn(missing_docs)]

#[macro_use]
extern crate derivative;
#[macro_use]
extern crate serde_derive;

mod archive;
mod cache;
mod config;
mod decoder;
mod enums;
pub mod error;
mod factory;
mod file_reader;
pub(crate) mod objects;
mod serde_helpers;
mod views;

#[cfg(test)]
mod tests;

pub use archive::GtfsArchive;
pub use config::ArchiveConfig;
pub use decoder::Header;
pub use error::Error;
pub use factory::{build_record, FeedRecord, GtfsFile, RecordFactory};
pub use file_reader::FileReader;
pub use objects::*;
pub use serde_helpers::{parse_color, parse_time};
pub use views::{Groups, Index, KeyFn};
