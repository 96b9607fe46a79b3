//! Generic Buffered Reader, with integrated optionnal .gz decompression
use std::io::{BufRead, BufReader, Read, Stdin};
use std::path::Path;

#[cfg(feature = "flate2")]
use flate2::read::GzDecoder;

/// [BufferedReader] is the input abstraction: plain files,
/// gzip compressed files and standard input are read line by line.
#[derive(Debug)]
pub enum BufferedReader {
    /// Readable file
    PlainFile(BufReader<std::fs::File>),
    /// gzip compressed file
    #[cfg(feature = "flate2")]
    GzFile(BufReader<GzDecoder<std::fs::File>>),
    /// Standard input
    Stdin(BufReader<Stdin>),
}

impl BufferedReader {
    /// Opens given file. Files terminated by `.gz` are decompressed
    /// on the fly, which requires the `flate2` feature.
    pub fn new(path: &Path) -> std::io::Result<Self> {
        let f = std::fs::File::open(path)?;
        let is_gzip = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("gz"))
            .unwrap_or(false);
        if is_gzip {
            #[cfg(feature = "flate2")]
            {
                Ok(Self::GzFile(BufReader::new(GzDecoder::new(f))))
            }
            #[cfg(not(feature = "flate2"))]
            {
                Err(std::io::Error::new(
                    std::io::ErrorKind::Unsupported,
                    "gzip compressed data requires the flate2 feature",
                ))
            }
        } else {
            Ok(Self::PlainFile(BufReader::new(f)))
        }
    }
    /// Reads from standard input
    pub fn stdin() -> Self {
        Self::Stdin(BufReader::new(std::io::stdin()))
    }
}

impl Read for BufferedReader {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, std::io::Error> {
        match self {
            Self::PlainFile(h) => h.read(buf),
            #[cfg(feature = "flate2")]
            Self::GzFile(h) => h.read(buf),
            Self::Stdin(h) => h.read(buf),
        }
    }
}

impl BufRead for BufferedReader {
    fn fill_buf(&mut self) -> Result<&[u8], std::io::Error> {
        match self {
            Self::PlainFile(h) => h.fill_buf(),
            #[cfg(feature = "flate2")]
            Self::GzFile(h) => h.fill_buf(),
            Self::Stdin(h) => h.fill_buf(),
        }
    }
    fn consume(&mut self, s: usize) {
        match self {
            Self::PlainFile(h) => h.consume(s),
            #[cfg(feature = "flate2")]
            Self::GzFile(h) => h.consume(s),
            Self::Stdin(h) => h.consume(s),
        }
    }
}
