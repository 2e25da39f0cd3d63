//! Collections and indexes computed from whole files, kept for the lifetime of the archive
//!
//! Each view is computed by one [crate::FileReader::materialize] pass on its first request.
//! Later requests are served from memory without reading the file again.
use std::sync::Arc;

use log::debug;
use rustc_hash::FxHashMap;

use crate::cache::{ViewKey, ViewKind};
use crate::factory::FeedRecord;
use crate::objects::*;
use crate::{Error, GtfsArchive};

/// Records by the value of a field. When several records share a value, the last one of the file is kept
pub type Index<T> = FxHashMap<String, T>;

/// Records grouped by the value of a field, in the order of the file inside each group
pub type Groups<T> = FxHashMap<String, Vec<T>>;

/// Extracts the value a view is keyed on
pub type KeyFn<T> = fn(&T) -> &str;

fn agency_key(agency: &Agency) -> &str {
    agency.id.as_deref().unwrap_or("")
}

impl GtfsArchive {
    /// Every record of the file holding `T`, in file order
    pub fn all<T: FeedRecord>(&self) -> Result<Arc<Vec<T>>, Error> {
        self.views()
            .get_or_compute(ViewKey::new(T::FILE, ViewKind::All), || {
                self.file::<T>()?.materialize()
            })
    }

    /// The records of `T` indexed by `field`, whose value is given by `key`
    ///
    /// The view is cached under `T` and `field` only. `key` is used on the first call, later
    /// calls with the same `field` get that index whatever their `key`: a field name must
    /// always be paired with the same key function.
    pub fn index_by<T: FeedRecord>(
        &self,
        field: &'static str,
        key: KeyFn<T>,
    ) -> Result<Arc<Index<T>>, Error> {
        self.views()
            .get_or_compute(ViewKey::new(T::FILE, ViewKind::ByKey(field)), || {
                let mut index = Index::default();
                for record in self.file::<T>()?.materialize()? {
                    index.insert(key(&record).to_owned(), record);
                }
                debug!("Indexed {} records of {} by {}", index.len(), T::FILE, field);
                Ok(index)
            })
    }

    /// The records of `T` grouped by `field`, whose value is given by `key`
    ///
    /// Cached under `T` and `field` like [GtfsArchive::index_by], with the same pairing rule
    pub fn group_by<T: FeedRecord>(
        &self,
        field: &'static str,
        key: KeyFn<T>,
    ) -> Result<Arc<Groups<T>>, Error> {
        self.views()
            .get_or_compute(ViewKey::new(T::FILE, ViewKind::Grouped(field)), || {
                let mut groups = Groups::<T>::default();
                for record in self.file::<T>()?.materialize()? {
                    groups
                        .entry(key(&record).to_owned())
                        .or_default()
                        .push(record);
                }
                debug!("Grouped {} by {} into {} groups", T::FILE, field, groups.len());
                Ok(groups)
            })
    }

    fn lookup<T: FeedRecord>(
        &self,
        field: &'static str,
        key: KeyFn<T>,
        value: &str,
    ) -> Result<Option<T>, Error> {
        Ok(self.index_by(field, key)?.get(value).cloned())
    }

    fn group<T: FeedRecord>(
        &self,
        field: &'static str,
        key: KeyFn<T>,
        value: &str,
    ) -> Result<Vec<T>, Error> {
        Ok(self
            .group_by(field, key)?
            .get(value)
            .cloned()
            .unwrap_or_default())
    }

    /// All the [Agency] of `agency.txt`
    pub fn agencies(&self) -> Result<Arc<Vec<Agency>>, Error> {
        self.all()
    }

    /// All the [Stop] of `stops.txt`
    pub fn stops(&self) -> Result<Arc<Vec<Stop>>, Error> {
        self.all()
    }

    /// All the [Route] of `routes.txt`
    pub fn routes(&self) -> Result<Arc<Vec<Route>>, Error> {
        self.all()
    }

    /// All the [Trip] of `trips.txt`
    pub fn trips(&self) -> Result<Arc<Vec<Trip>>, Error> {
        self.all()
    }

    /// Every stop time of the feed. Usually the largest file, prefer [GtfsArchive::stop_times_file] to stream it
    pub fn stop_times(&self) -> Result<Arc<Vec<StopTime>>, Error> {
        self.all()
    }

    /// All the [CalendarEntry] of `calendar.txt`
    pub fn calendar_entries(&self) -> Result<Arc<Vec<CalendarEntry>>, Error> {
        self.all()
    }

    /// All the [CalendarDate] of `calendar_dates.txt`
    pub fn calendar_dates(&self) -> Result<Arc<Vec<CalendarDate>>, Error> {
        self.all()
    }

    /// Every [ShapePoint] of every shape
    pub fn shape_points(&self) -> Result<Arc<Vec<ShapePoint>>, Error> {
        self.all()
    }

    /// All the [Transfer] of `transfers.txt`
    pub fn transfers(&self) -> Result<Arc<Vec<Transfer>>, Error> {
        self.all()
    }

    /// Content of `feed_info.txt`, usually a single row
    pub fn feed_info(&self) -> Result<Arc<Vec<FeedInfo>>, Error> {
        self.all()
    }

    /// All the [Frequency] of `frequencies.txt`
    pub fn frequencies(&self) -> Result<Arc<Vec<Frequency>>, Error> {
        self.all()
    }

    /// Gets a [Stop] by its `stop_id`
    pub fn stop(&self, id: &str) -> Result<Option<Stop>, Error> {
        self.lookup("stop_id", <Stop as Id>::id, id)
    }

    /// Gets a [Route] by its `route_id`
    pub fn route(&self, id: &str) -> Result<Option<Route>, Error> {
        self.lookup("route_id", <Route as Id>::id, id)
    }

    /// Gets a [Trip] by its `trip_id`
    pub fn trip(&self, id: &str) -> Result<Option<Trip>, Error> {
        self.lookup("trip_id", <Trip as Id>::id, id)
    }

    /// Gets a [CalendarEntry] by its `service_id`
    pub fn calendar_entry(&self, service_id: &str) -> Result<Option<CalendarEntry>, Error> {
        self.lookup("service_id", <CalendarEntry as Id>::id, service_id)
    }

    /// Gets an [Agency] by its `agency_id`. A feed with a single agency may omit it: use `""`
    pub fn agency(&self, agency_id: &str) -> Result<Option<Agency>, Error> {
        self.lookup("agency_id", agency_key, agency_id)
    }

    /// Points of a shape, in file order. Empty if the shape is unknown
    pub fn shape(&self, shape_id: &str) -> Result<Vec<ShapePoint>, Error> {
        self.group("shape_id", <ShapePoint as Id>::id, shape_id)
    }

    /// Exceptions to the [CalendarEntry] of a service, in file order
    pub fn calendar_dates_for_service(&self, service_id: &str) -> Result<Vec<CalendarDate>, Error> {
        self.group("service_id", |d: &CalendarDate| d.service_id.as_str(), service_id)
    }

    /// The [StopTime] of a trip, in file order
    pub fn stop_times_for_trip(&self, trip_id: &str) -> Result<Vec<StopTime>, Error> {
        self.group("trip_id", |st: &StopTime| st.trip_id.as_str(), trip_id)
    }

    /// The [Trip] of a route
    pub fn trips_for_route(&self, route_id: &str) -> Result<Vec<Trip>, Error> {
        self.group("route_id", |t: &Trip| t.route_id.as_str(), route_id)
    }

    /// The headway periods of a frequency-based trip
    pub fn frequencies_for_trip(&self, trip_id: &str) -> Result<Vec<Frequency>, Error> {
        self.group("trip_id", |f: &Frequency| f.trip_id.as_str(), trip_id)
    }
}
