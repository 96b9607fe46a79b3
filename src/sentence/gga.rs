//! `$GPGGA`: Fix data sentence.
//!
//! `$GPGGA,hhmmss.sss,DDMM.mmmm,N,DDDMM.mmmm,E,quality,satellites,hdop,altitude,M,...`
//!
//! This sentence has no date field: the current UTC date is used.
//! Only its time of day is meaningful.
use crate::{
    coordinates::{lat_to_decimal, lon_to_decimal, HemispherePolicy},
    epoch::{from_date_time, parse_time_of_day, today},
    error::ParsingError,
    sentence::field,
    track_point::TrackPoint,
};

pub const TAG: &str = "$GPGGA";

const TIME_FIELD: usize = 1;
const LATITUDE_FIELD: usize = 2;
const NORTH_SOUTH_FIELD: usize = 3;
const LONGITUDE_FIELD: usize = 4;
const EAST_WEST_FIELD: usize = 5;
// unsigned: a negative satellite count is a malformed sentence
const SATELLITES_FIELD: usize = 7;
const ELEVATION_FIELD: usize = 9;

/// Parses a `$GPGGA` line into a partial [TrackPoint]
/// (time of day, position, elevation and satellites).
pub fn parse(line: &str, policy: HemispherePolicy) -> Result<TrackPoint, ParsingError> {
    let fields = line.split(',').collect::<Vec<_>>();

    let time = parse_time_of_day(field(&fields, TIME_FIELD)?)?;
    let timestamp = from_date_time(today(), time)?;

    let latitude = policy.apply(
        lat_to_decimal(field(&fields, LATITUDE_FIELD)?),
        fields.get(NORTH_SOUTH_FIELD).copied(),
    );
    let longitude = policy.apply(
        lon_to_decimal(field(&fields, LONGITUDE_FIELD)?),
        fields.get(EAST_WEST_FIELD).copied(),
    );

    let elevation = field(&fields, ELEVATION_FIELD)?
        .parse::<f64>()
        .map_err(ParsingError::Elevation)?;

    let satellites = field(&fields, SATELLITES_FIELD)?
        .parse::<u32>()
        .map_err(ParsingError::Satellites)?;

    Ok(TrackPoint::new(timestamp, latitude, longitude)
        .with_elevation(elevation)
        .with_satellites(satellites))
}
