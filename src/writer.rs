//! Streamed GPX production.
//!
//! Points are written as soon as they are produced, the
//! document is only terminated by [GpxWriter::finish].
use std::io::Write;

use hifitime::Epoch;
use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Writer,
};

use crate::{
    epoch::{format_rfc3339, format_rfc3339_seconds, now},
    error::Error,
    stream::TrackSink,
    track_point::TrackPoint,
};

/// GPX revision we produce
pub const GPX_VERSION: &str = "1.0";

/// Default creator attribute
pub fn default_creator() -> String {
    format!("nmea2gpx v{}", env!("CARGO_PKG_VERSION"))
}

/// [GpxWriter] wraps the produced points in a single track segment
pub struct GpxWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> GpxWriter<W> {
    /// Starts a new document, timestamped with current UTC time
    pub fn new(w: W, creator: &str) -> Result<Self, Error> {
        Self::with_time(w, creator, now())
    }
    /// Starts a new document, timestamped with given instant
    /// (whole seconds)
    pub fn with_time(w: W, creator: &str, time: Epoch) -> Result<Self, Error> {
        let mut writer = Writer::new(w);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut gpx = BytesStart::new("gpx");
        gpx.push_attribute(("version", GPX_VERSION));
        gpx.push_attribute(("creator", creator));
        writer.write_event(Event::Start(gpx))?;

        Self::write_text_element(&mut writer, "time", &format_rfc3339_seconds(time))?;

        writer.write_event(Event::Start(BytesStart::new("trk")))?;
        writer.write_event(Event::Start(BytesStart::new("trkseg")))?;
        Ok(Self { writer })
    }
    fn write_text_element(writer: &mut Writer<W>, name: &str, text: &str) -> Result<(), Error> {
        writer.write_event(Event::Start(BytesStart::new(name)))?;
        writer.write_event(Event::Text(BytesText::new(text)))?;
        writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }
    /// Appends one track point
    pub fn write_point(&mut self, point: &TrackPoint) -> Result<(), Error> {
        let mut trkpt = BytesStart::new("trkpt");
        trkpt.push_attribute(("lat", point.latitude.to_string().as_str()));
        trkpt.push_attribute(("lon", point.longitude.to_string().as_str()));
        self.writer.write_event(Event::Start(trkpt))?;

        Self::write_text_element(&mut self.writer, "time", &format_rfc3339(point.timestamp))?;
        Self::write_text_element(&mut self.writer, "ele", &point.elevation.to_string())?;
        Self::write_text_element(&mut self.writer, "sat", &point.satellites.to_string())?;

        self.writer.write_event(Event::End(BytesEnd::new("trkpt")))?;
        Ok(())
    }
    /// Terminates the document and returns the inner writer, flushed.
    pub fn finish(mut self) -> Result<W, Error> {
        self.writer.write_event(Event::End(BytesEnd::new("trkseg")))?;
        self.writer.write_event(Event::End(BytesEnd::new("trk")))?;
        self.writer.write_event(Event::End(BytesEnd::new("gpx")))?;
        let mut w = self.writer.into_inner();
        w.write_all(b"\n")?;
        w.flush()?;
        Ok(w)
    }
}

impl<W: Write> TrackSink for GpxWriter<W> {
    fn push(&mut self, point: &TrackPoint) -> Result<(), Error> {
        self.write_point(point)
    }
}
