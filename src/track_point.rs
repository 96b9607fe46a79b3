use hifitime::Epoch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [TrackPoint] is one sample of the produced track.
/// Each sentence kind only fills part of it: fields
/// a sentence cannot provide hold their default value.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackPoint {
    /// Sampling instant (UTC)
    pub timestamp: Epoch,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Elevation in meters, 0 when unknown
    pub elevation: f64,
    /// Number of satellites in use, 0 when unknown
    pub satellites: u32,
}

impl Default for TrackPoint {
    /// Zero valued record: 1900-01-01T00:00:00 UTC, null position,
    /// no elevation, no satellites. Stands for a record not received yet.
    fn default() -> Self {
        Self::new(Epoch::from_gregorian_utc_at_midnight(1900, 1, 1), 0.0, 0.0)
    }
}

impl TrackPoint {
    /// Builds a partial [TrackPoint] from timestamp and position only
    pub fn new(timestamp: Epoch, latitude: f64, longitude: f64) -> Self {
        Self {
            timestamp,
            latitude,
            longitude,
            elevation: 0.0,
            satellites: 0,
        }
    }
    /// Copies and returns [TrackPoint] with desired elevation
    pub fn with_elevation(&self, elevation: f64) -> Self {
        let mut s = *self;
        s.elevation = elevation;
        s
    }
    /// Copies and returns [TrackPoint] with desired number of satellites
    pub fn with_satellites(&self, satellites: u32) -> Self {
        let mut s = *self;
        s.satellites = satellites;
        s
    }
}

impl std::fmt::Display for TrackPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} ({:.6}°, {:.6}°) {:.1}m ({} SV)",
            self.timestamp, self.latitude, self.longitude, self.elevation, self.satellites
        )
    }
}
