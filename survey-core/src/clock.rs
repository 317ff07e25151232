//! Civil wall-clock time.
//!
//! All timestamps of the service are expressed in a single civil
//! time zone. The zone is resolved by name from the time zone
//! database of the platform. Names are tried in order and if none
//! of them can be resolved a fixed UTC offset is applied instead.
//! Daylight saving time is lost in this case which is acceptable
//! for zones that do not observe it.

use std::fmt;

use thiserror::Error;
use time::{macros::format_description, macros::offset, OffsetDateTime, UtcOffset};

use crate::entities::Timestamp;

/// Windows time zone id
pub const SINGAPORE_ZONE_WINDOWS: &str = "Singapore Standard Time";

/// IANA time zone id
pub const SINGAPORE_ZONE_IANA: &str = "Asia/Singapore";

pub const SINGAPORE_UTC_OFFSET: UtcOffset = offset!(+8);

pub trait Clock {
    fn now(&self) -> Timestamp;
}

#[derive(Debug, Error)]
pub enum ZoneError {
    #[error(transparent)]
    TimeZone(#[from] jiff::Error),
    #[error(transparent)]
    Offset(#[from] time::error::ComponentRange),
}

/// A time zone that is looked up by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedZone(String);

impl NamedZone {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The UTC offset of this zone at the given instant.
    pub fn offset_at(&self, instant: OffsetDateTime) -> Result<UtcOffset, ZoneError> {
        let tz = jiff::tz::TimeZone::get(&self.0)?;
        let timestamp = jiff::Timestamp::from_nanosecond(instant.unix_timestamp_nanos())?;
        let offset = tz.to_offset(timestamp);
        Ok(UtcOffset::from_whole_seconds(offset.seconds())?)
    }
}

impl fmt::Display for NamedZone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolution strategies for the civil UTC offset, tried in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CivilClock {
    zones: Vec<NamedZone>,
    // Applied if none of the zones could be resolved
    fallback: UtcOffset,
}

impl CivilClock {
    pub fn new<I, S>(zone_names: I, fallback: UtcOffset) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let zones = zone_names.into_iter().map(NamedZone::new).collect();
        Self { zones, fallback }
    }

    pub fn singapore() -> Self {
        Self::new(
            [SINGAPORE_ZONE_WINDOWS, SINGAPORE_ZONE_IANA],
            SINGAPORE_UTC_OFFSET,
        )
    }

    pub fn offset_at(&self, instant: OffsetDateTime) -> UtcOffset {
        self.zones
            .iter()
            .find_map(|zone| {
                zone.offset_at(instant)
                    .map_err(|err| {
                        log::trace!("Unable to resolve time zone '{zone}': {err}");
                    })
                    .ok()
            })
            .unwrap_or(self.fallback)
    }

    pub fn civil_time_at(&self, instant: OffsetDateTime) -> Timestamp {
        let offset = self.offset_at(instant);
        Timestamp::from_offset_date_time(instant.to_offset(offset))
    }
}

impl Default for CivilClock {
    fn default() -> Self {
        Self::singapore()
    }
}

impl Clock for CivilClock {
    fn now(&self) -> Timestamp {
        self.civil_time_at(OffsetDateTime::now_utc())
    }
}

#[derive(Debug, Error)]
#[error("Invalid UTC offset '{0}', expected [+-]HH:MM")]
pub struct UtcOffsetParseError(String);

/// Parses offsets like `+08:00` or `-03:30`.
pub fn parse_utc_offset(s: &str) -> Result<UtcOffset, UtcOffsetParseError> {
    let format = format_description!("[offset_hour sign:mandatory]:[offset_minute]");
    UtcOffset::parse(s.trim(), &format).map_err(|_| UtcOffsetParseError(s.to_string()))
}
