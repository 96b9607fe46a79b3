//! Streaming correlation of `$GPRMC` and `$GPGGA` sentences.
//!
//! Sentences arrive on separate lines, in transmission order. The
//! [Correlator] holds the latest record of each kind and attempts a
//! merge after every single line, whatever that line was.
use std::io::BufRead;

use log::{debug, trace};

use crate::{
    coordinates::HemispherePolicy,
    error::{Error, MergeError},
    merge::merge,
    sentence::SentenceKind,
    track_point::TrackPoint,
};

/// [TrackSink] receives the produced [TrackPoint]s, in emission order.
pub trait TrackSink {
    /// Appends one point. Any error aborts the whole stream.
    fn push(&mut self, point: &TrackPoint) -> Result<(), Error>;
}

impl TrackSink for Vec<TrackPoint> {
    fn push(&mut self, point: &TrackPoint) -> Result<(), Error> {
        Vec::push(self, *point);
        Ok(())
    }
}

/// Running counters, for reporting purposes
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Statistics {
    /// Total number of lines
    pub lines: usize,
    /// Successfully parsed `$GPRMC` sentences
    pub position_date: usize,
    /// Successfully parsed `$GPGGA` sentences
    pub fix_quality: usize,
    /// Recognized sentences we could not parse
    pub malformed: usize,
    /// Merge attempts declined because records were not correlated
    pub uncorrelated: usize,
    /// Merge attempts declined because receiver had no fix
    pub no_fix: usize,
    /// Emitted points
    pub points: usize,
}

impl std::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} lines: {} RMC, {} GGA, {} malformed | {} points, {} uncorrelated, {} without fix",
            self.lines,
            self.position_date,
            self.fix_quality,
            self.malformed,
            self.points,
            self.uncorrelated,
            self.no_fix
        )
    }
}

/// [Correlator] holds the most recent record of each sentence kind.
/// Both slots start zero valued ([TrackPoint::default]) and are only
/// ever replaced by a successfully parsed sentence.
#[derive(Debug, Default, Clone)]
pub struct Correlator {
    /// Latest `$GPRMC` record
    position_date: TrackPoint,
    /// Latest `$GPGGA` record
    fix_quality: TrackPoint,
    /// Hemisphere indicators treatment
    policy: HemispherePolicy,
    /// Counters
    statistics: Statistics,
}

impl Correlator {
    /// Builds a new [Correlator], with both slots zero valued
    pub fn new(policy: HemispherePolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }
    /// Latest `$GPRMC` record
    pub fn position_date(&self) -> &TrackPoint {
        &self.position_date
    }
    /// Latest `$GPGGA` record
    pub fn fix_quality(&self) -> &TrackPoint {
        &self.fix_quality
    }
    /// Counters so far
    pub fn statistics(&self) -> Statistics {
        self.statistics
    }
    /// Processes one line: updates the matching slot when the line is
    /// a valid sentence, then attempts to merge both slots.
    /// The merge is attempted on every line, so a held pair keeps
    /// producing the same point until one of the slots changes.
    pub fn feed(&mut self, line: &str) -> Option<TrackPoint> {
        self.statistics.lines += 1;

        if let Some(kind) = SentenceKind::from_line(line) {
            match kind.parse(line, self.policy) {
                Ok(record) => match kind {
                    SentenceKind::PositionDate => {
                        self.statistics.position_date += 1;
                        self.position_date = record;
                    },
                    SentenceKind::PositionFixQuality => {
                        self.statistics.fix_quality += 1;
                        self.fix_quality = record;
                    },
                },
                Err(e) => {
                    self.statistics.malformed += 1;
                    debug!("{}: skipping \"{}\": {}", kind, line, e);
                },
            }
        }

        match merge(&self.position_date, &self.fix_quality) {
            Ok(point) => {
                self.statistics.points += 1;
                trace!("{}", point);
                Some(point)
            },
            Err(MergeError::Uncorrelated) => {
                self.statistics.uncorrelated += 1;
                None
            },
            Err(MergeError::NoFix) => {
                self.statistics.no_fix += 1;
                trace!("no fix at {}", self.position_date.timestamp);
                None
            },
        }
    }
}

/// Runs the whole stream: every line of `reader` goes through a
/// [Correlator] and each produced point is pushed into `sink`, in order.
/// Lines are decoded lossily: binary junk is just another ignored line.
/// Only i/o failures (reading or writing) interrupt the process.
pub fn process<R: BufRead, S: TrackSink>(
    mut reader: R,
    sink: &mut S,
    policy: HemispherePolicy,
) -> Result<Statistics, Error> {
    let mut correlator = Correlator::new(policy);
    let mut buf = Vec::<u8>::with_capacity(128);
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        let line = String::from_utf8_lossy(&buf);
        if let Some(point) = correlator.feed(&line) {
            sink.push(&point)?;
        }
    }
    Ok(correlator.statistics())
}
