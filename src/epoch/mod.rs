//! Sentence timestamps.
//!
//! NMEA sentences describe time as `HHMMSS.sss` (time of day, UTC)
//! and, for some of them, `DDMMYY` (date). Both are turned into [Epoch]s.
use crate::error::ParsingError;
use hifitime::Epoch;

/// Time of day as described by any NMEA sentence
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub nanos: u32,
}

/// Calendar date (year, month, day)
pub type Date = (i32, u8, u8);

/*
 * Infaillible `Epoch::now()` call.
 */
pub(crate) fn now() -> Epoch {
    Epoch::now().unwrap_or(Epoch::from_gregorian_utc_at_midnight(2000, 1, 1))
}

/// Current UTC date: implicit date of date-less sentences
pub(crate) fn today() -> Date {
    let (y, m, d, _, _, _, _) = now().to_gregorian_utc();
    (y, m, d)
}

fn two_digits(content: &str, offset: usize) -> Option<u8> {
    content.get(offset..offset + 2)?.parse::<u8>().ok()
}

/// Parses `HHMMSS` with optional fractional seconds of any length.
/// Sub nanosecond digits are dropped.
pub(crate) fn parse_time_of_day(content: &str) -> Result<TimeOfDay, ParsingError> {
    let error = || ParsingError::TimeOfDay(content.to_string());

    let (hhmmss, fraction) = match content.find('.') {
        Some(dot) => (&content[..dot], Some(&content[dot + 1..])),
        None => (content, None),
    };

    if hhmmss.len() != 6 || !hhmmss.bytes().all(|b| b.is_ascii_digit()) {
        return Err(error());
    }

    let hours = two_digits(hhmmss, 0).ok_or_else(error)?;
    let minutes = two_digits(hhmmss, 2).ok_or_else(error)?;
    let seconds = two_digits(hhmmss, 4).ok_or_else(error)?;

    if hours > 23 || minutes > 59 || seconds > 59 {
        return Err(error());
    }

    let nanos = match fraction {
        None => 0,
        Some(fraction) => {
            if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return Err(error());
            }
            let digits = &fraction[..fraction.len().min(9)];
            let value = digits.parse::<u32>().map_err(|_| error())?;
            value * 10_u32.pow(9 - digits.len() as u32)
        },
    };

    Ok(TimeOfDay {
        hours,
        minutes,
        seconds,
        nanos,
    })
}

/// Parses `DDMMYY`. Two digit years follow the usual pivot:
/// 69..=99 is 19YY, 00..=68 is 20YY.
pub(crate) fn parse_date(content: &str) -> Result<Date, ParsingError> {
    let error = || ParsingError::Date(content.to_string());

    if content.len() != 6 || !content.bytes().all(|b| b.is_ascii_digit()) {
        return Err(error());
    }

    let day = two_digits(content, 0).ok_or_else(error)?;
    let month = two_digits(content, 2).ok_or_else(error)?;
    let yy = two_digits(content, 4).ok_or_else(error)? as i32;

    let year = if yy >= 69 { 1900 + yy } else { 2000 + yy };
    Ok((year, month, day))
}

/// Builds the UTC [Epoch] described by given date and time of day.
pub(crate) fn from_date_time(date: Date, time: TimeOfDay) -> Result<Epoch, ParsingError> {
    let (y, m, d) = date;
    if !(1..=12).contains(&m) || !(1..=31).contains(&d) {
        return Err(ParsingError::Calendar(y, m, d));
    }
    Epoch::maybe_from_gregorian_utc(y, m, d, time.hours, time.minutes, time.seconds, time.nanos)
        .map_err(|_| ParsingError::Calendar(y, m, d))
}

/// Returns (hours, minutes, seconds): the correlation key
pub(crate) fn hms(epoch: Epoch) -> (u8, u8, u8) {
    let (_, _, _, hh, mm, ss, _) = epoch.to_gregorian_utc();
    (hh, mm, ss)
}

/*
 * RFC3339 formatting, as expected in GPX documents.
 * Fractional seconds are only printed when non zero.
 */
pub(crate) fn format_rfc3339(epoch: Epoch) -> String {
    let (y, m, d, hh, mm, ss, nanos) = epoch.to_gregorian_utc();
    if nanos == 0 {
        format!("{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z", y, m, d, hh, mm, ss)
    } else {
        let fraction = format!("{:09}", nanos);
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{}Z",
            y,
            m,
            d,
            hh,
            mm,
            ss,
            fraction.trim_end_matches('0')
        )
    }
}

/// RFC3339 formatting, truncated to whole seconds
pub(crate) fn format_rfc3339_seconds(epoch: Epoch) -> String {
    let (y, m, d, hh, mm, ss, _) = epoch.to_gregorian_utc();
    format!("{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z", y, m, d, hh, mm, ss)
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn time_of_day_parsing() {
        let t = parse_time_of_day("123456.789").unwrap();
        assert_eq!(t.hours, 12);
        assert_eq!(t.minutes, 34);
        assert_eq!(t.seconds, 56);
        assert_eq!(t.nanos, 789_000_000);

        let t = parse_time_of_day("235959").unwrap();
        assert_eq!((t.hours, t.minutes, t.seconds, t.nanos), (23, 59, 59, 0));

        let t = parse_time_of_day("000000.1234567891").unwrap();
        assert_eq!(t.nanos, 123_456_789);

        for invalid in ["", "12345", "1234567", "12a456.000", "246000.000", "126000", "123460", "123456.", "123456.x"] {
            assert!(
                parse_time_of_day(invalid).is_err(),
                "\"{}\" should not be a valid time of day",
                invalid
            );
        }
    }
    #[test]
    fn date_parsing() {
        assert_eq!(parse_date("020516").unwrap(), (2016, 5, 2));
        assert_eq!(parse_date("311299").unwrap(), (1999, 12, 31));
        assert_eq!(parse_date("010168").unwrap(), (2068, 1, 1));
        assert_eq!(parse_date("010169").unwrap(), (1969, 1, 1));
        assert!(parse_date("02051").is_err());
        assert!(parse_date("0205166").is_err());
        assert!(parse_date("02-516").is_err());
    }
    #[test]
    fn calendar_validation() {
        let noon = TimeOfDay {
            hours: 12,
            ..Default::default()
        };
        assert!(from_date_time((2016, 2, 29), noon).is_ok());
        assert!(from_date_time((2015, 2, 29), noon).is_err());
        assert!(from_date_time((2016, 13, 1), noon).is_err());
        assert!(from_date_time((2016, 0, 1), noon).is_err());
    }
    #[test]
    fn rfc3339_formatting() {
        let time = parse_time_of_day("123456.789").unwrap();
        let epoch = from_date_time((2016, 5, 2), time).unwrap();
        assert_eq!(hms(epoch), (12, 34, 56));
        assert_eq!(format_rfc3339(epoch), "2016-05-02T12:34:56.789Z");
        assert_eq!(format_rfc3339_seconds(epoch), "2016-05-02T12:34:56Z");

        let epoch = Epoch::from_gregorian_utc_hms(2021, 1, 1, 0, 0, 0);
        assert_eq!(format_rfc3339(epoch), "2021-01-01T00:00:00Z");
    }
}
