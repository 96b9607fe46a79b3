//! NMEA-0183 to GPX conversion.
//!
//! `$GPRMC` and `$GPGGA` sentences each describe part of a fix:
//! the former has the date, the latter has elevation and satellites.
//! Both are correlated by time of day and merged into complete
//! [prelude::TrackPoint]s, streamed into a GPX document.
//!
//! ```no_run
//! use nmea2gpx::prelude::*;
//!
//! let reader = BufferedReader::new(std::path::Path::new("track.nmea")).unwrap();
//! let mut gpx = GpxWriter::new(std::io::stdout().lock(), &default_creator()).unwrap();
//! let statistics = process(reader, &mut gpx, HemispherePolicy::default()).unwrap();
//! gpx.finish().unwrap();
//! println!("{}", statistics);
//! ```
pub mod coordinates;
pub mod epoch;
pub mod error;
pub mod merge;
pub mod reader;
pub mod sentence;
pub mod stream;
pub mod track_point;
pub mod writer;

pub mod prelude {
    pub use crate::{
        coordinates::{lat_to_decimal, lon_to_decimal, Hemisphere, HemispherePolicy},
        error::{Error, MergeError, ParsingError},
        merge::merge,
        reader::BufferedReader,
        sentence::SentenceKind,
        stream::{process, Correlator, Statistics, TrackSink},
        track_point::TrackPoint,
        writer::{default_creator, GpxWriter},
    };
    // pub re-export
    pub use hifitime::Epoch;
}
