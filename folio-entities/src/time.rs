use std::fmt;

use time::{macros::format_description, OffsetDateTime};

/// A UTC timestamp with second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc().unix_timestamp())
    }

    pub const fn from_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    pub const fn as_secs(self) -> i64 {
        self.0
    }

    fn to_offset_date_time(self) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(self.0).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }

    /// Calendar date in the `YYYY-MM-DD` form.
    pub fn format_date(self) -> String {
        let format = format_description!("[year]-[month]-[day]");
        self.to_offset_date_time()
            .format(&format)
            .unwrap_or_default()
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from.unix_timestamp())
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.to_offset_date_time()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_offset_date_time())
    }
}
