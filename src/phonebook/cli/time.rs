use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use phonebook::error::{PhonebookError, Result};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which end of a time frame a user-supplied value describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bound {
    Start,
    End,
}

/// Parses `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD` in local time, or RFC 3339.
/// A bare date covers the whole day: midnight for a start bound, the last
/// instant of the day for an end bound.
pub(crate) fn parse_time_bound(input: &str, bound: Bound) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = if let Ok(dt) = NaiveDateTime::parse_from_str(input, DATETIME_FORMAT) {
        dt
    } else if let Ok(date) = NaiveDate::parse_from_str(input, DATE_FORMAT) {
        let time = match bound {
            Bound::Start => NaiveTime::MIN,
            Bound::End => NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)
                .unwrap_or(NaiveTime::MIN),
        };
        date.and_time(time)
    } else {
        return Err(PhonebookError::Api(format!(
            "Invalid time {:?}: use YYYY-MM-DD HH:MM:SS, YYYY-MM-DD or RFC 3339",
            input
        )));
    };

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| PhonebookError::Api(format!("Time {:?} does not exist locally", input)))
}
