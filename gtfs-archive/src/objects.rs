pub use crate::archive::ArchiveRef;
pub use crate::enums::*;
use crate::serde_helpers::*;
use chrono::{Datelike, NaiveDate, Weekday};
use rgb::RGB8;

use std::fmt;

/// Records of a file with an identifier column
///
/// The identifier links records across files and is not meant for display
pub trait Id {
    /// Value of the identifier column
    fn id(&self) -> &str;
}

/// One row of `calendar.txt`: the weekdays a service runs on, between two dates
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CalendarEntry {
    /// `service_id`
    #[serde(rename = "service_id")]
    pub id: String,
    /// Runs on mondays
    #[serde(
        deserialize_with = "deserialize_bool",
        serialize_with = "serialize_bool"
    )]
    pub monday: bool,
    /// Runs on tuesdays
    #[serde(
        deserialize_with = "deserialize_bool",
        serialize_with = "serialize_bool"
    )]
    pub tuesday: bool,
    /// Runs on wednesdays
    #[serde(
        deserialize_with = "deserialize_bool",
        serialize_with = "serialize_bool"
    )]
    pub wednesday: bool,
    /// Runs on thursdays
    #[serde(
        deserialize_with = "deserialize_bool",
        serialize_with = "serialize_bool"
    )]
    pub thursday: bool,
    /// Runs on fridays
    #[serde(
        deserialize_with = "deserialize_bool",
        serialize_with = "serialize_bool"
    )]
    pub friday: bool,
    /// Runs on saturdays
    #[serde(
        deserialize_with = "deserialize_bool",
        serialize_with = "serialize_bool"
    )]
    pub saturday: bool,
    /// Runs on sundays
    #[serde(
        deserialize_with = "deserialize_bool",
        serialize_with = "serialize_bool"
    )]
    pub sunday: bool,
    /// First day of the service
    #[serde(
        deserialize_with = "deserialize_date",
        serialize_with = "serialize_date"
    )]
    pub start_date: NaiveDate,
    /// Last day of the service, included
    #[serde(
        deserialize_with = "deserialize_date",
        serialize_with = "serialize_date"
    )]
    pub end_date: NaiveDate,
    #[serde(skip)]
    pub(crate) archive: ArchiveRef,
}

impl Id for CalendarEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for CalendarEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} to {}", self.start_date, self.end_date)
    }
}

impl CalendarEntry {
    /// Does the service run on the weekday of `date`
    ///
    /// `start_date` and `end_date` are not checked
    pub fn valid_weekday(&self, date: NaiveDate) -> bool {
        match date.weekday() {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }
}

/// One row of `calendar_dates.txt`: a service added or removed on a single day
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CalendarDate {
    /// The modified service
    pub service_id: String,
    #[serde(
        deserialize_with = "deserialize_date",
        serialize_with = "serialize_date"
    )]
    pub date: NaiveDate,
    /// Added or removed on [CalendarDate::date]
    pub exception_type: Exception,
    #[serde(skip)]
    pub(crate) archive: ArchiveRef,
}

/// One row of `stops.txt`
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Stop {
    /// `stop_id`
    #[serde(rename = "stop_id")]
    pub id: String,
    /// Code shown to riders
    #[serde(rename = "stop_code")]
    pub code: Option<String>,
    /// Empty when the column is absent
    #[serde(rename = "stop_name", default)]
    pub name: String,
    /// `stop_desc`, empty when absent
    #[serde(default, rename = "stop_desc")]
    pub description: String,
    /// Stop point when empty
    #[serde(default)]
    pub location_type: LocationType,
    /// `stop_id` of the parent station, kept as written
    pub parent_station: Option<String>,
    /// Fare zone
    pub zone_id: Option<String>,
    /// `stop_url`
    #[serde(rename = "stop_url")]
    pub url: Option<String>,
    /// `stop_lon`, `None` when empty
    #[serde(deserialize_with = "de_with_optional_float")]
    #[serde(serialize_with = "serialize_float_as_str")]
    #[serde(rename = "stop_lon", default)]
    pub longitude: Option<f64>,
    /// `stop_lat`, `None` when empty
    #[serde(deserialize_with = "de_with_optional_float")]
    #[serde(serialize_with = "serialize_float_as_str")]
    #[serde(rename = "stop_lat", default)]
    pub latitude: Option<f64>,
    /// `stop_timezone`
    #[serde(rename = "stop_timezone")]
    pub timezone: Option<String>,
    /// Wheelchair boarding, unknown when empty
    #[serde(deserialize_with = "de_with_empty_default", default)]
    pub wheelchair_boarding: Availability,
    /// `level_id`
    pub level_id: Option<String>,
    /// Platform shown to riders
    pub platform_code: Option<String>,
    #[serde(skip)]
    pub(crate) archive: ArchiveRef,
}

impl Id for Stop {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One row of `stop_times.txt`
///
/// `trip_id` and `stop_id` are not checked against the other files
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct StopTime {
    /// The [Trip] served
    pub trip_id: String,
    /// Seconds after the start of the service day, may pass 24h. `None` when empty
    #[serde(
        deserialize_with = "deserialize_optional_time",
        serialize_with = "serialize_optional_time",
        default
    )]
    pub arrival_time: Option<u32>,
    /// Same encoding as [StopTime::arrival_time]
    #[serde(
        deserialize_with = "deserialize_optional_time",
        serialize_with = "serialize_optional_time",
        default
    )]
    pub departure_time: Option<u32>,
    /// The [Stop] served
    pub stop_id: String,
    /// Position along the trip, increasing with gaps allowed
    pub stop_sequence: u32,
    /// Headsign overriding the one of the trip from this stop
    pub stop_headsign: Option<String>,
    /// Regular when empty
    #[serde(default)]
    pub pickup_type: PickupDropOffType,
    /// Regular when empty
    #[serde(default)]
    pub drop_off_type: PickupDropOffType,
    /// `continuous_pickup`
    #[serde(default)]
    pub continuous_pickup: ContinuousPickupDropOff,
    /// `continuous_drop_off`
    #[serde(default)]
    pub continuous_drop_off: ContinuousPickupDropOff,
    /// Distance along the shape of the trip, in the unit of `shapes.txt`
    pub shape_dist_traveled: Option<f64>,
    /// Exact when empty
    #[serde(default)]
    pub timepoint: TimepointType,
    #[serde(skip)]
    pub(crate) archive: ArchiveRef,
}

/// One row of `routes.txt`
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Route {
    /// `route_id`
    #[serde(rename = "route_id")]
    pub id: String,
    /// Line number or short label, empty when absent
    #[serde(rename = "route_short_name", default)]
    pub short_name: String,
    /// Empty when absent
    #[serde(rename = "route_long_name", default)]
    pub long_name: String,
    /// `route_desc`
    #[serde(rename = "route_desc")]
    pub desc: Option<String>,
    /// Mandatory
    pub route_type: RouteType,
    /// `route_url`
    #[serde(rename = "route_url")]
    pub url: Option<String>,
    /// May be omitted when the feed has a single agency
    pub agency_id: Option<String>,
    /// `route_sort_order`
    #[serde(rename = "route_sort_order")]
    pub order: Option<u32>,
    /// White when empty
    #[serde(
        deserialize_with = "deserialize_route_color",
        serialize_with = "serialize_color",
        rename = "route_color",
        default = "default_route_color"
    )]
    pub color: RGB8,
    /// Black when empty
    #[serde(
        deserialize_with = "deserialize_route_text_color",
        serialize_with = "serialize_color",
        rename = "route_text_color",
        default
    )]
    pub text_color: RGB8,
    /// Default of the stop times of the route
    #[serde(default)]
    pub continuous_pickup: ContinuousPickupDropOff,
    /// Default of the stop times of the route
    #[serde(default)]
    pub continuous_drop_off: ContinuousPickupDropOff,
    #[serde(skip)]
    pub(crate) archive: ArchiveRef,
}

impl Id for Route {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.long_name.is_empty() {
            write!(f, "{}", self.long_name)
        } else {
            write!(f, "{}", self.short_name)
        }
    }
}

/// One row of `trips.txt`
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Trip {
    /// `trip_id`
    #[serde(rename = "trip_id")]
    pub id: String,
    /// Days of operation, from `calendar.txt` or `calendar_dates.txt`
    pub service_id: String,
    /// The [Route]
    pub route_id: String,
    /// Points in `shapes.txt`, see [crate::GtfsArchive::shape]
    pub shape_id: Option<String>,
    /// Destination shown to riders
    pub trip_headsign: Option<String>,
    /// Train number or similar
    pub trip_short_name: Option<String>,
    /// `direction_id`
    pub direction_id: Option<DirectionType>,
    /// `block_id`
    pub block_id: Option<String>,
    /// Unknown when empty
    #[serde(default)]
    pub wheelchair_accessible: Availability,
    /// Unknown when empty
    #[serde(default)]
    pub bikes_allowed: BikesAllowedType,
    #[serde(skip)]
    pub(crate) archive: ArchiveRef,
}

impl Id for Trip {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "route id: {}, service id: {}",
            self.route_id, self.service_id
        )
    }
}

/// One row of `agency.txt`
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Agency {
    /// Optional when the feed has a single agency
    #[serde(rename = "agency_id")]
    pub id: Option<String>,
    /// `agency_name`
    #[serde(rename = "agency_name")]
    pub name: String,
    /// `agency_url`
    #[serde(rename = "agency_url")]
    pub url: String,
    /// `agency_timezone`
    #[serde(rename = "agency_timezone")]
    pub timezone: String,
    /// `agency_lang`
    #[serde(rename = "agency_lang")]
    pub lang: Option<String>,
    /// `agency_phone`
    #[serde(rename = "agency_phone")]
    pub phone: Option<String>,
    /// `agency_fare_url`
    #[serde(rename = "agency_fare_url")]
    pub fare_url: Option<String>,
    /// `agency_email`
    #[serde(rename = "agency_email")]
    pub email: Option<String>,
    #[serde(skip)]
    pub(crate) archive: ArchiveRef,
}

impl Id for Agency {
    fn id(&self) -> &str {
        match &self.id {
            None => "",
            Some(id) => id,
        }
    }
}

impl fmt::Display for Agency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One row of `shapes.txt`. A shape is the sequence of the points sharing a `shape_id`
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct ShapePoint {
    /// `shape_id`
    #[serde(rename = "shape_id")]
    pub id: String,
    /// `shape_pt_lat`
    #[serde(rename = "shape_pt_lat", default)]
    pub latitude: f64,
    /// `shape_pt_lon`
    #[serde(rename = "shape_pt_lon", default)]
    pub longitude: f64,
    /// Position in the shape, increasing with gaps allowed
    #[serde(rename = "shape_pt_sequence")]
    pub sequence: usize,
    /// Distance from the first point, in the unit chosen by the feed
    #[serde(rename = "shape_dist_traveled")]
    pub dist_traveled: Option<f64>,
    #[serde(skip)]
    pub(crate) archive: ArchiveRef,
}

impl Id for ShapePoint {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One row of `frequencies.txt`: a trip repeated every `headway_secs` between two times
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Frequency {
    /// The repeated [Trip]
    pub trip_id: String,
    /// Start of the period, in seconds
    #[serde(
        deserialize_with = "deserialize_time",
        serialize_with = "serialize_time"
    )]
    pub start_time: u32,
    /// End of the period, in seconds
    #[serde(
        deserialize_with = "deserialize_time",
        serialize_with = "serialize_time"
    )]
    pub end_time: u32,
    /// Seconds between two departures
    pub headway_secs: u32,
    /// `exact_times`
    pub exact_times: Option<ExactTimes>,
    #[serde(skip)]
    pub(crate) archive: ArchiveRef,
}

/// One row of `transfers.txt`
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Transfer {
    /// Stop from which to leave
    pub from_stop_id: String,
    /// Stop which to transfer to
    pub to_stop_id: String,
    /// Route from which to leave, when the rule only applies to it
    pub from_route_id: Option<String>,
    /// Route which to transfer to, when the rule only applies to it
    pub to_route_id: Option<String>,
    /// Trip from which to leave, when the rule only applies to it
    pub from_trip_id: Option<String>,
    /// Trip which to transfer to, when the rule only applies to it
    pub to_trip_id: Option<String>,
    /// Type of the transfer
    #[serde(default)]
    pub transfer_type: TransferType,
    /// Minimum time needed to make the transfer in seconds
    pub min_transfer_time: Option<u32>,
    #[serde(skip)]
    pub(crate) archive: ArchiveRef,
}

/// One row of `feed_info.txt`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FeedInfo {
    /// `feed_publisher_name`
    #[serde(rename = "feed_publisher_name")]
    pub name: String,
    /// `feed_publisher_url`
    #[serde(rename = "feed_publisher_url")]
    pub url: String,
    /// `feed_lang`
    #[serde(rename = "feed_lang")]
    pub lang: String,
    /// `default_lang`
    pub default_lang: Option<String>,
    /// First day covered by the feed
    #[serde(
        deserialize_with = "deserialize_option_date",
        serialize_with = "serialize_option_date",
        rename = "feed_start_date",
        default
    )]
    pub start_date: Option<NaiveDate>,
    /// Last day covered by the feed
    #[serde(
        deserialize_with = "deserialize_option_date",
        serialize_with = "serialize_option_date",
        rename = "feed_end_date",
        default
    )]
    pub end_date: Option<NaiveDate>,
    /// `feed_version`
    #[serde(rename = "feed_version")]
    pub version: Option<String>,
    /// `feed_contact_email`
    #[serde(rename = "feed_contact_email")]
    pub contact_email: Option<String>,
    /// `feed_contact_url`
    #[serde(rename = "feed_contact_url")]
    pub contact_url: Option<String>,
    #[serde(skip)]
    pub(crate) archive: ArchiveRef,
}

impl fmt::Display for FeedInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
