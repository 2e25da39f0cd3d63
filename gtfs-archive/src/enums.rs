use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Reads an enumerated field as its integer code. An empty field gives `None`
fn deserialize_code<'de, D>(deserializer: D, name: &str) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        return Ok(None);
    }
    s.parse().map(Some).map_err(|_| {
        de::Error::custom(format!(
            "invalid value for {}, must be an integer: {}",
            name, s
        ))
    })
}

fn serialize_code_as_str<S: Serializer>(s: S, value: i32) -> Result<S::Ok, S::Error> {
    s.serialize_str(&value.to_string())
}

/// `location_type` of a [crate::Stop]
#[derive(Derivative, Debug, Copy, Clone, PartialEq, Eq)]
#[derivative(Default(bound = ""))]
pub enum LocationType {
    /// `0` or empty: a stop, or a platform when it has a parent station
    #[derivative(Default)]
    StopPoint,
    /// `1`: a station
    StopArea,
    /// `2`: a station entrance or exit
    StationEntrance,
    /// `3`: a node inside a station
    GenericNode,
    /// `4`: a boarding area on a platform
    BoardingArea,
    /// Any other code, kept as read
    Unknown(i32),
}

impl From<LocationType> for i32 {
    fn from(value: LocationType) -> i32 {
        match value {
            LocationType::StopPoint => 0,
            LocationType::StopArea => 1,
            LocationType::StationEntrance => 2,
            LocationType::GenericNode => 3,
            LocationType::BoardingArea => 4,
            LocationType::Unknown(i) => i,
        }
    }
}

impl<'de> Deserialize<'de> for LocationType {
    fn deserialize<D>(deserializer: D) -> Result<LocationType, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match deserialize_code(deserializer, "LocationType")? {
            None | Some(0) => LocationType::StopPoint,
            Some(1) => LocationType::StopArea,
            Some(2) => LocationType::StationEntrance,
            Some(3) => LocationType::GenericNode,
            Some(4) => LocationType::BoardingArea,
            Some(i) => LocationType::Unknown(i),
        })
    }
}

impl Serialize for LocationType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_code_as_str(serializer, i32::from(*self))
    }
}

/// `route_type` of a [crate::Route]
///
/// Extended codes (`100` to `1599`) are read into the family they belong to
#[derive(Debug, Derivative, Copy, Clone, PartialEq, Eq, Hash)]
#[derivative(Default(bound = ""))]
pub enum RouteType {
    /// `0`, extended `9xx`
    Tramway,
    /// `1`, extended `4xx`
    Subway,
    /// `2`, extended `1xx`
    Rail,
    /// `3`, extended `7xx` and `8xx`
    #[derivative(Default)]
    Bus,
    /// `4`, extended `10xx` and `12xx`
    Ferry,
    /// `5`
    CableCar,
    /// `6`, extended `13xx`
    Gondola,
    /// `7`, extended `14xx`
    Funicular,
    /// Extended `2xx`
    Coach,
    /// Extended `11xx`
    Air,
    /// Extended `15xx`
    Taxi,
    /// Any other code
    Other(i32),
}

impl From<i32> for RouteType {
    fn from(i: i32) -> RouteType {
        match (i, i / 100) {
            (0, _) | (_, 9) => RouteType::Tramway,
            (1, _) | (_, 4) => RouteType::Subway,
            (2, _) | (_, 1) => RouteType::Rail,
            (3, _) | (_, 7) | (_, 8) => RouteType::Bus,
            (4, _) | (_, 10) | (_, 12) => RouteType::Ferry,
            (5, _) => RouteType::CableCar,
            (6, _) | (_, 13) => RouteType::Gondola,
            (7, _) | (_, 14) => RouteType::Funicular,
            (_, 2) => RouteType::Coach,
            (_, 11) => RouteType::Air,
            (_, 15) => RouteType::Taxi,
            _ => RouteType::Other(i),
        }
    }
}

impl From<RouteType> for i32 {
    // Extended route types are folded into their family, the precise code is lost
    fn from(value: RouteType) -> i32 {
        match value {
            RouteType::Tramway => 0,
            RouteType::Subway => 1,
            RouteType::Rail => 2,
            RouteType::Bus => 3,
            RouteType::Ferry => 4,
            RouteType::CableCar => 5,
            RouteType::Gondola => 6,
            RouteType::Funicular => 7,
            RouteType::Coach => 200,
            RouteType::Air => 1100,
            RouteType::Taxi => 1500,
            RouteType::Other(i) => i,
        }
    }
}

impl<'de> Deserialize<'de> for RouteType {
    fn deserialize<D>(deserializer: D) -> Result<RouteType, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_code(deserializer, "RouteType")?
            .map(RouteType::from)
            .ok_or_else(|| de::Error::custom("route_type is mandatory"))
    }
}

impl Serialize for RouteType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_code_as_str(serializer, i32::from(*self))
    }
}

/// `pickup_type` and `drop_off_type` of a [crate::StopTime]
#[derive(Debug, Derivative, Copy, Clone, PartialEq, Eq)]
#[derivative(Default(bound = ""))]
pub enum PickupDropOffType {
    /// `0` or empty
    #[derivative(Default)]
    Regular,
    /// `1`
    NotAvailable,
    /// `2`
    ArrangeByPhone,
    /// `3`
    CoordinateWithDriver,
    /// Any other code, kept as read
    Unknown(i32),
}

impl From<PickupDropOffType> for i32 {
    fn from(value: PickupDropOffType) -> i32 {
        match value {
            PickupDropOffType::Regular => 0,
            PickupDropOffType::NotAvailable => 1,
            PickupDropOffType::ArrangeByPhone => 2,
            PickupDropOffType::CoordinateWithDriver => 3,
            PickupDropOffType::Unknown(i) => i,
        }
    }
}

impl<'de> Deserialize<'de> for PickupDropOffType {
    fn deserialize<D>(deserializer: D) -> Result<PickupDropOffType, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match deserialize_code(deserializer, "PickupDropOffType")? {
            None | Some(0) => PickupDropOffType::Regular,
            Some(1) => PickupDropOffType::NotAvailable,
            Some(2) => PickupDropOffType::ArrangeByPhone,
            Some(3) => PickupDropOffType::CoordinateWithDriver,
            Some(i) => PickupDropOffType::Unknown(i),
        })
    }
}

impl Serialize for PickupDropOffType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_code_as_str(serializer, i32::from(*self))
    }
}

/// `continuous_pickup` and `continuous_drop_off` of routes and stop times
#[derive(Debug, Derivative, Copy, Clone, PartialEq, Eq)]
#[derivative(Default(bound = ""))]
pub enum ContinuousPickupDropOff {
    /// `0`
    Continuous,
    /// `1` or empty
    #[derivative(Default)]
    NotAvailable,
    /// `2`
    ArrangeByPhone,
    /// `3`
    CoordinateWithDriver,
    /// Any other code, kept as read
    Unknown(i32),
}

impl From<ContinuousPickupDropOff> for i32 {
    fn from(value: ContinuousPickupDropOff) -> i32 {
        match value {
            ContinuousPickupDropOff::Continuous => 0,
            ContinuousPickupDropOff::NotAvailable => 1,
            ContinuousPickupDropOff::ArrangeByPhone => 2,
            ContinuousPickupDropOff::CoordinateWithDriver => 3,
            ContinuousPickupDropOff::Unknown(i) => i,
        }
    }
}

impl<'de> Deserialize<'de> for ContinuousPickupDropOff {
    fn deserialize<D>(deserializer: D) -> Result<ContinuousPickupDropOff, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(
            match deserialize_code(deserializer, "ContinuousPickupDropOff")? {
                Some(0) => ContinuousPickupDropOff::Continuous,
                None | Some(1) => ContinuousPickupDropOff::NotAvailable,
                Some(2) => ContinuousPickupDropOff::ArrangeByPhone,
                Some(3) => ContinuousPickupDropOff::CoordinateWithDriver,
                Some(i) => ContinuousPickupDropOff::Unknown(i),
            },
        )
    }
}

impl Serialize for ContinuousPickupDropOff {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_code_as_str(serializer, i32::from(*self))
    }
}

/// `timepoint` of a [crate::StopTime]
#[derive(Debug, Derivative, Serialize, Copy, Clone, PartialEq, Eq)]
#[derivative(Default)]
pub enum TimepointType {
    /// `0`
    #[serde(rename = "0")]
    Approximate = 0,
    /// `1` or empty
    #[derivative(Default)]
    #[serde(rename = "1")]
    Exact = 1,
}

impl<'de> Deserialize<'de> for TimepointType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match deserialize_code(deserializer, "TimepointType")? {
            None | Some(1) => Ok(Self::Exact),
            Some(0) => Ok(Self::Approximate),
            Some(v) => Err(de::Error::custom(format!(
                "invalid value for timepoint: {}",
                v
            ))),
        }
    }
}

/// Accessibility fields such as `wheelchair_boarding`
#[derive(Debug, Derivative, PartialEq, Eq, Hash, Clone, Copy)]
#[derivative(Default)]
pub enum Availability {
    /// `0` or empty
    #[derivative(Default)]
    InformationNotAvailable,
    /// `1`
    Available,
    /// `2`
    NotAvailable,
    /// Any other code, kept as read
    Unknown(i32),
}

impl From<Availability> for i32 {
    fn from(value: Availability) -> i32 {
        match value {
            Availability::InformationNotAvailable => 0,
            Availability::Available => 1,
            Availability::NotAvailable => 2,
            Availability::Unknown(i) => i,
        }
    }
}

impl<'de> Deserialize<'de> for Availability {
    fn deserialize<D>(deserializer: D) -> Result<Availability, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match deserialize_code(deserializer, "Availability")? {
            None | Some(0) => Availability::InformationNotAvailable,
            Some(1) => Availability::Available,
            Some(2) => Availability::NotAvailable,
            Some(i) => Availability::Unknown(i),
        })
    }
}

impl Serialize for Availability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_code_as_str(serializer, i32::from(*self))
    }
}

/// `exception_type` of a [crate::CalendarDate]
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Exception {
    /// `1`
    #[serde(rename = "1")]
    Added,
    /// `2`
    #[serde(rename = "2")]
    Deleted,
}

impl From<Exception> for i32 {
    fn from(value: Exception) -> i32 {
        match value {
            Exception::Added => 1,
            Exception::Deleted => 2,
        }
    }
}

/// `direction_id` of a [crate::Trip]
#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq, Eq)]
pub enum DirectionType {
    /// `0`
    #[serde(rename = "0")]
    Outbound,
    /// `1`
    #[serde(rename = "1")]
    Inbound,
}

/// `bikes_allowed` of a [crate::Trip]
#[derive(Debug, Derivative, Copy, Clone, PartialEq, Eq)]
#[derivative(Default())]
pub enum BikesAllowedType {
    /// `0` or empty
    #[derivative(Default)]
    NoBikeInfo,
    /// `1`
    AtLeastOneBike,
    /// `2`
    NoBikesAllowed,
    /// Any other code, kept as read
    Unknown(i32),
}

impl From<BikesAllowedType> for i32 {
    fn from(value: BikesAllowedType) -> i32 {
        match value {
            BikesAllowedType::NoBikeInfo => 0,
            BikesAllowedType::AtLeastOneBike => 1,
            BikesAllowedType::NoBikesAllowed => 2,
            BikesAllowedType::Unknown(i) => i,
        }
    }
}

impl<'de> Deserialize<'de> for BikesAllowedType {
    fn deserialize<D>(deserializer: D) -> Result<BikesAllowedType, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match deserialize_code(deserializer, "BikesAllowedType")? {
            None | Some(0) => BikesAllowedType::NoBikeInfo,
            Some(1) => BikesAllowedType::AtLeastOneBike,
            Some(2) => BikesAllowedType::NoBikesAllowed,
            Some(i) => BikesAllowedType::Unknown(i),
        })
    }
}

impl Serialize for BikesAllowedType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_code_as_str(serializer, i32::from(*self))
    }
}

/// `exact_times` of a [crate::Frequency]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExactTimes {
    /// `0` or empty
    FrequencyBased = 0,
    /// `1`
    ScheduleBased = 1,
}

impl<'de> Deserialize<'de> for ExactTimes {
    fn deserialize<D>(deserializer: D) -> Result<ExactTimes, D::Error>
    where
        D: Deserializer<'de>,
    {
        match deserialize_code(deserializer, "ExactTimes")? {
            None | Some(0) => Ok(ExactTimes::FrequencyBased),
            Some(1) => Ok(ExactTimes::ScheduleBased),
            Some(v) => Err(de::Error::custom(format!(
                "Invalid value `{}`, expected 0 or 1",
                v
            ))),
        }
    }
}

impl Serialize for ExactTimes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_code_as_str(serializer, *self as i32)
    }
}

/// `transfer_type` of a [crate::Transfer]
#[derive(Debug, Derivative, Copy, Clone, PartialEq, Eq)]
#[derivative(Default)]
pub enum TransferType {
    /// `0` or empty
    #[derivative(Default)]
    Recommended,
    /// `1`
    Timed,
    /// `2`, see [crate::Transfer::min_transfer_time]
    MinTime,
    /// `3`
    Impossible,
    /// Any other code, kept as read
    Unknown(i32),
}

impl From<TransferType> for i32 {
    fn from(value: TransferType) -> i32 {
        match value {
            TransferType::Recommended => 0,
            TransferType::Timed => 1,
            TransferType::MinTime => 2,
            TransferType::Impossible => 3,
            TransferType::Unknown(i) => i,
        }
    }
}

impl<'de> Deserialize<'de> for TransferType {
    fn deserialize<D>(deserializer: D) -> Result<TransferType, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match deserialize_code(deserializer, "TransferType")? {
            None | Some(0) => TransferType::Recommended,
            Some(1) => TransferType::Timed,
            Some(2) => TransferType::MinTime,
            Some(3) => TransferType::Impossible,
            Some(i) => TransferType::Unknown(i),
        })
    }
}

impl Serialize for TransferType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_code_as_str(serializer, i32::from(*self))
    }
}
