//! `$GPRMC`: Recommended Minimum sentence.
//!
//! `$GPRMC,hhmmss.sss,A,DDMM.mmmm,N,DDDMM.mmmm,E,speed,course,DDMMYY,...`
use crate::{
    coordinates::{lat_to_decimal, lon_to_decimal, HemispherePolicy},
    epoch::{from_date_time, parse_date, parse_time_of_day},
    error::ParsingError,
    sentence::field,
    track_point::TrackPoint,
};

pub const TAG: &str = "$GPRMC";

const TIME_FIELD: usize = 1;
const LATITUDE_FIELD: usize = 3;
const NORTH_SOUTH_FIELD: usize = 4;
const LONGITUDE_FIELD: usize = 5;
const EAST_WEST_FIELD: usize = 6;
const DATE_FIELD: usize = 9;

/// Parses a `$GPRMC` line into a partial [TrackPoint]
/// (complete timestamp and position, no elevation nor satellites).
pub fn parse(line: &str, policy: HemispherePolicy) -> Result<TrackPoint, ParsingError> {
    let fields = line.split(',').collect::<Vec<_>>();

    let time = parse_time_of_day(field(&fields, TIME_FIELD)?)?;
    let date = parse_date(field(&fields, DATE_FIELD)?)?;
    let timestamp = from_date_time(date, time)?;

    let latitude = policy.apply(
        lat_to_decimal(field(&fields, LATITUDE_FIELD)?),
        fields.get(NORTH_SOUTH_FIELD).copied(),
    );
    let longitude = policy.apply(
        lon_to_decimal(field(&fields, LONGITUDE_FIELD)?),
        fields.get(EAST_WEST_FIELD).copied(),
    );

    Ok(TrackPoint::new(timestamp, latitude, longitude))
}
