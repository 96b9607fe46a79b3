//! Reconstructs complete [TrackPoint]s from partial records.
use crate::{epoch::hms, error::MergeError, track_point::TrackPoint};

/// Coordinates are rounded to 1E-6 degree (about 0.11 m)
const COORDINATE_PRECISION: f64 = 1.0E6;

/// Rounds a decimal degree value to 6 decimal places
pub fn round_coordinate(value: f64) -> f64 {
    (value * COORDINATE_PRECISION).round() / COORDINATE_PRECISION
}

/// Merges the latest `position_date` record (`$GPRMC`) with the latest
/// `fix_quality` record (`$GPGGA`). Arguments are not interchangeable:
/// - the timestamp comes from `position_date`, the only one with a date,
/// - position, elevation and satellites come from `fix_quality`.
///
/// Records must describe the same fix: identical hours, minutes and seconds.
/// A position rounding to exactly (0, 0) means the receiver has no fix.
pub fn merge(position_date: &TrackPoint, fix_quality: &TrackPoint) -> Result<TrackPoint, MergeError> {
    if hms(position_date.timestamp) != hms(fix_quality.timestamp) {
        return Err(MergeError::Uncorrelated);
    }

    let latitude = round_coordinate(fix_quality.latitude);
    let longitude = round_coordinate(fix_quality.longitude);

    if latitude == 0.0 && longitude == 0.0 {
        return Err(MergeError::NoFix);
    }

    Ok(TrackPoint {
        timestamp: position_date.timestamp,
        latitude,
        longitude,
        elevation: fix_quality.elevation,
        satellites: fix_quality.satellites,
    })
}
