//! Degrees + decimal minutes (`DDMM.mmmm`, `DDDMM.mmmm`) conversion.
//!
//! Conversion is permissive and never fails: unreadable degrees or
//! minutes count as zero, so one bad coordinate never discards
//! an entire sentence.

/// Number of degree digits in a latitude field
pub const LATITUDE_DEGREE_DIGITS: usize = 2;

/// Number of degree digits in a longitude field
pub const LONGITUDE_DEGREE_DIGITS: usize = 3;

const MINUTES_PER_DEGREE: f64 = 60.0;

/// Hemisphere indicator, sent next to each coordinate field
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Parses the indicator field. Anything unknown returns None.
    pub fn from_field(field: &str) -> Option<Self> {
        match field.trim() {
            "N" => Some(Self::North),
            "S" => Some(Self::South),
            "E" => Some(Self::East),
            "W" => Some(Self::West),
            _ => None,
        }
    }
    /// Returns true for hemispheres counted negatively
    pub fn is_negative(&self) -> bool {
        matches!(self, Self::South | Self::West)
    }
}

/// Defines how hemisphere indicators are treated
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum HemispherePolicy {
    /// Indicators are not consulted: all coordinates are magnitudes.
    #[default]
    Ignore,
    /// South latitudes and West longitudes are negated.
    Apply,
}

impl HemispherePolicy {
    /// Applies self to given magnitude, using the indicator field
    pub fn apply(&self, magnitude: f64, indicator: Option<&str>) -> f64 {
        match self {
            Self::Ignore => magnitude,
            Self::Apply => match indicator.and_then(Hemisphere::from_field) {
                Some(hemisphere) if hemisphere.is_negative() => -magnitude,
                _ => magnitude,
            },
        }
    }
}

/// Splits `field` into (degrees, minutes), the first `degree_digits`
/// characters being the degrees. Unreadable parts are 0.
pub fn split_degrees_minutes(field: &str, degree_digits: usize) -> (i32, f64) {
    let (degrees, minutes) = match (field.get(..degree_digits), field.get(degree_digits..)) {
        (Some(degrees), Some(minutes)) => (degrees, minutes),
        _ => return (0, 0.0),
    };
    let degrees = degrees.parse::<i32>().unwrap_or(0);
    let minutes = minutes.parse::<f64>().unwrap_or(0.0);
    (degrees, minutes)
}

/// Converts a degrees + decimal minutes field to decimal degrees
pub fn to_decimal(field: &str, degree_digits: usize) -> f64 {
    let (degrees, minutes) = split_degrees_minutes(field, degree_digits);
    degrees as f64 + minutes / MINUTES_PER_DEGREE
}

/// Converts a `DDMM.mmmm` latitude field to decimal degrees
pub fn lat_to_decimal(field: &str) -> f64 {
    to_decimal(field, LATITUDE_DEGREE_DIGITS)
}

/// Converts a `DDDMM.mmmm` longitude field to decimal degrees
pub fn lon_to_decimal(field: &str) -> f64 {
    to_decimal(field, LONGITUDE_DEGREE_DIGITS)
}
