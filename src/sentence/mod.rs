//! NMEA sentence recognition and parsing.
//!
//! Sentences are comma separated, with fixed field positions.
//! Parsers are stateless: they turn one line into a partial
//! [TrackPoint], or fail.
use crate::{coordinates::HemispherePolicy, error::ParsingError, track_point::TrackPoint};

pub mod gga;
pub mod rmc;

/// Kinds of sentences we know how to use
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SentenceKind {
    /// Recommended Minimum (RMC): date, time and position
    PositionDate,
    /// Fix data (GGA): time of day, position, elevation and satellites
    PositionFixQuality,
}

impl SentenceKind {
    /// Literal tag identifying this kind of sentence
    pub fn tag(&self) -> &'static str {
        match self {
            Self::PositionDate => rmc::TAG,
            Self::PositionFixQuality => gga::TAG,
        }
    }
    /// Identifies given line from its leading tag.
    /// Returns None for all other lines, which we simply ignore.
    pub fn from_line(line: &str) -> Option<Self> {
        if line.starts_with(rmc::TAG) {
            Some(Self::PositionDate)
        } else if line.starts_with(gga::TAG) {
            Some(Self::PositionFixQuality)
        } else {
            None
        }
    }
    /// Parses given line, which should be of this kind
    pub fn parse(&self, line: &str, policy: HemispherePolicy) -> Result<TrackPoint, ParsingError> {
        match self {
            Self::PositionDate => rmc::parse(line, policy),
            Self::PositionFixQuality => gga::parse(line, policy),
        }
    }
}

impl std::fmt::Display for SentenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.tag()[1..])
    }
}

/*
 * Returns field at given position
 */
pub(crate) fn field<'a>(fields: &[&'a str], index: usize) -> Result<&'a str, ParsingError> {
    fields
        .get(index)
        .copied()
        .ok_or(ParsingError::MissingField(index))
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn sentence_identification() {
        assert_eq!(
            SentenceKind::from_line("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A"),
            Some(SentenceKind::PositionDate)
        );
        assert_eq!(
            SentenceKind::from_line("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47"),
            Some(SentenceKind::PositionFixQuality)
        );
        for line in [
            "",
            "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39",
            "$GNRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A",
            " $GPRMC,123519",
            "GPGGA,123519",
        ] {
            assert_eq!(SentenceKind::from_line(line), None, "\"{}\"", line);
        }
    }
    #[test]
    fn sentence_display() {
        assert_eq!(SentenceKind::PositionDate.to_string(), "GPRMC");
        assert_eq!(SentenceKind::PositionFixQuality.to_string(), "GPGGA");
    }
}
