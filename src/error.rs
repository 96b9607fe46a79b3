use thiserror::Error;

/// Errors that may rise while parsing a single sentence.
/// The offending line is simply skipped.
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("missing field #{0}")]
    MissingField(usize),
    #[error("invalid time of day \"{0}\"")]
    TimeOfDay(String),
    #[error("invalid date \"{0}\"")]
    Date(String),
    #[error("non existing calendar date {0:04}-{1:02}-{2:02}")]
    Calendar(i32, u8, u8),
    #[error("failed to parse elevation")]
    Elevation(#[source] std::num::ParseFloatError),
    #[error("failed to parse number of satellites")]
    Satellites(#[source] std::num::ParseIntError),
}

/// Reasons for which two partial records did not produce a point.
/// Both are expected while streaming.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// Time of day (hh:mm:ss) differs between the two records
    #[error("records are not correlated")]
    Uncorrelated,
    /// Rounded position is exactly (0, 0): receiver has no fix yet
    #[error("no fix")]
    NoFix,
}

/// Fatal errors, at the stream boundary.
#[derive(Error, Debug)]
pub enum Error {
    #[error("i/o error")]
    IoError(#[from] std::io::Error),
    #[error("failed to format gpx content")]
    XmlError(#[from] quick_xml::Error),
}
