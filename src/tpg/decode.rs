use super::consts::*;
use super::pstr::read_pstr;
use super::record::Record;
use super::transform::CoordinateTransformer;
use super::{ErrorKind, Options};
use crate::datum::{ConfigError, Datum};
use crate::{DatumConverter, Waypoint};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    Io(io::Error),
    #[error("unexpected end of file")]
    UnexpectedEof,
    #[error("input does not appear to be a valid TPG file: {0:02x?}")]
    InvalidHeader([u8; SIGNATURE_SIZE]),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<io::Error> for DecodeError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => DecodeError::UnexpectedEof,
            _ => DecodeError::Io(err),
        }
    }
}

impl DecodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::Io(_) => ErrorKind::Io,
            DecodeError::UnexpectedEof | DecodeError::InvalidHeader(_) => ErrorKind::Format,
            DecodeError::Config(_) => ErrorKind::Config,
        }
    }
}

/// Checks the 19 signature bytes following the record count.
pub fn validate_header(bytes: &[u8]) -> bool {
    bytes == SIGNATURE
}

pub fn decode_file(data: &[u8], options: &Options) -> Result<Vec<Waypoint>, DecodeError> {
    Reader::with_options(data, options)?.read_waypoints()
}

/// Reads all waypoints from the file at `path`.
///
/// The datum is resolved before the file is opened.
pub fn read_path<P: AsRef<Path>>(path: P, options: &Options) -> Result<Vec<Waypoint>, DecodeError> {
    let datum = options.resolve_datum()?;
    let file = File::open(path).map_err(DecodeError::Io)?;
    Reader::new(BufReader::new(file), datum).read_waypoints()
}

pub struct Reader<R, C = Datum> {
    reader: R,
    transformer: CoordinateTransformer<C>,
}

impl<R: Read> Reader<R> {
    pub fn with_options(inner: R, options: &Options) -> Result<Self, ConfigError> {
        Ok(Self::new(inner, options.resolve_datum()?))
    }
}

impl<R: Read, C: DatumConverter> Reader<R, C> {
    pub fn new(inner: R, converter: C) -> Self {
        Self {
            reader: inner,
            transformer: CoordinateTransformer::new(converter),
        }
    }

    /// Reads the header and returns the number of records that follow.
    pub fn read_header(&mut self) -> Result<u16, DecodeError> {
        let count = u16::from_le_bytes(self.read_array()?);

        let signature: [u8; SIGNATURE_SIZE] = self.read_array()?;
        if !validate_header(&signature) {
            return Err(DecodeError::InvalidHeader(signature));
        }

        Ok(count)
    }

    pub fn read_record(&mut self) -> Result<Record, DecodeError> {
        let short_name = read_pstr(&mut self.reader)?;
        let stored_lon = f64::from_le_bytes(self.read_array()?);
        let stored_lat = f64::from_le_bytes(self.read_array()?);
        let elevation_feet = i16::from_le_bytes(self.read_array()?);
        let reserved = self.read_array()?;
        let description = read_pstr(&mut self.reader)?;
        let terminator = self.read_array()?;

        Ok(Record {
            short_name,
            stored_lon,
            stored_lat,
            elevation_feet,
            reserved,
            description,
            terminator,
        })
    }

    pub fn read_waypoints(&mut self) -> Result<Vec<Waypoint>, DecodeError> {
        let count = self.read_header()?;
        debug!(count, "reading TPG waypoints");

        let mut waypoints = Vec::with_capacity(count as usize);
        for index in 0..count {
            let record = self.read_record()?;
            trace!(index, short_name = %record.short_name, "decoded record");
            waypoints.push(record.to_waypoint(&self.transformer));
        }

        Ok(waypoints)
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_array<const N: usize>(&mut self) -> io::Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.reader.read_exact(&mut buf)?;
        Ok(buf)
    }
}
