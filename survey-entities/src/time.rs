use std::fmt;

use ::time::{
    error::ComponentRange, format_description::well_known::Rfc3339, OffsetDateTime, UtcOffset,
};

const NANOS_PER_MILLI: i128 = 1_000_000;

/// A point in time together with the civil UTC offset it
/// has been observed in.
///
/// The precision is limited to milliseconds, i.e. values survive
/// a round trip through the database unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    /// Truncates the given date/time to millisecond precision.
    pub fn from_offset_date_time(from: OffsetDateTime) -> Self {
        let nanos = from.unix_timestamp_nanos();
        let truncated = nanos - nanos.rem_euclid(NANOS_PER_MILLI);
        let utc = OffsetDateTime::from_unix_timestamp_nanos(truncated)
            // Truncation never leaves the valid range
            .unwrap_or(from);
        Self(utc.to_offset(from.offset()))
    }

    pub fn now_utc() -> Self {
        Self::from_offset_date_time(OffsetDateTime::now_utc())
    }

    pub fn from_millis(millis: i64, offset_seconds: i32) -> Result<Self, ComponentRange> {
        let offset = UtcOffset::from_whole_seconds(offset_seconds)?;
        let utc = OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * NANOS_PER_MILLI)?;
        Ok(Self(utc.to_offset(offset)))
    }

    pub fn as_millis(&self) -> i64 {
        (self.0.unix_timestamp_nanos() / NANOS_PER_MILLI) as i64
    }

    pub fn offset_seconds(&self) -> i32 {
        self.0.offset().whole_seconds()
    }

    pub fn offset(&self) -> UtcOffset {
        self.0.offset()
    }

    pub const fn into_inner(self) -> OffsetDateTime {
        self.0
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self::from_offset_date_time(from)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let formatted = self.0.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}
