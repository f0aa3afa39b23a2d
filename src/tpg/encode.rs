use super::consts::*;
use super::pstr::{encode_string, write_pstr};
use super::record::Record;
use super::sanitize::sanitize_short_name;
use super::transform::{CoordinateTransformer, meters_to_feet};
use super::{ErrorKind, Options};
use crate::datum::{ConfigError, Datum};
use crate::shortname::MakeShort;
use crate::{DatumConverter, ShortNameSynthesizer, Waypoint};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, trace, warn};

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("attempt to output too many waypoints ({0}), the maximum is 65535")]
    TooManyWaypoints(usize),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl EncodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EncodeError::Io(_) => ErrorKind::Io,
            EncodeError::TooManyWaypoints(_) => ErrorKind::LimitExceeded,
            EncodeError::Config(_) => ErrorKind::Config,
        }
    }
}

/// Returns the record count followed by the signature.
pub fn header_bytes(count: u16) -> [u8; HEADER_SIZE] {
    let mut header = [0u8; HEADER_SIZE];
    header[..COUNT_SIZE].copy_from_slice(&count.to_le_bytes());
    header[COUNT_SIZE..].copy_from_slice(&SIGNATURE);
    header
}

pub fn encode_file(waypoints: &[Waypoint], options: &Options) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::with_options(Vec::new(), options)?;
    writer.write(waypoints)?;
    Ok(writer.into_inner())
}

/// Writes `waypoints` to a new file at `path`.
///
/// The datum and the waypoint count are checked before the file is created.
pub fn write_path<P: AsRef<Path>>(
    path: P,
    waypoints: &[Waypoint],
    options: &Options,
) -> Result<(), EncodeError> {
    let datum = options.resolve_datum()?;
    check_count(waypoints.len())?;

    let file = File::create(path)?;
    let mut writer = Writer::new(
        BufWriter::new(file),
        datum,
        options.short_name_synthesizer(),
    )
    .synthesize_shortnames(options.synthesize_shortnames);
    writer.write(waypoints)?;
    writer.into_inner().flush()?;
    Ok(())
}

fn check_count(count: usize) -> Result<u16, EncodeError> {
    if count > MAX_WAYPOINTS {
        return Err(EncodeError::TooManyWaypoints(count));
    }
    u16::try_from(count).map_err(|_| EncodeError::TooManyWaypoints(count))
}

pub struct Writer<W: Write, C = Datum, S = MakeShort> {
    writer: W,
    transformer: CoordinateTransformer<C>,
    synthesizer: S,
    synthesize_shortnames: bool,
}

impl<W: Write> Writer<W> {
    pub fn with_options(inner: W, options: &Options) -> Result<Self, ConfigError> {
        let writer = Self::new(
            inner,
            options.resolve_datum()?,
            options.short_name_synthesizer(),
        );
        Ok(writer.synthesize_shortnames(options.synthesize_shortnames))
    }
}

impl<W: Write, C: DatumConverter, S: ShortNameSynthesizer> Writer<W, C, S> {
    pub fn new(inner: W, converter: C, synthesizer: S) -> Self {
        Self {
            writer: inner,
            transformer: CoordinateTransformer::new(converter),
            synthesizer,
            synthesize_shortnames: false,
        }
    }

    /// Derive every short name from the waypoint description, ignoring any
    /// stored short name.
    pub fn synthesize_shortnames(mut self, enabled: bool) -> Self {
        self.synthesize_shortnames = enabled;
        self
    }

    pub fn write(&mut self, waypoints: &[Waypoint]) -> Result<(), EncodeError> {
        let count = check_count(waypoints.len())?;
        debug!(
            count,
            synthesize_shortnames = self.synthesize_shortnames,
            "writing TPG waypoints"
        );

        self.write_header(count)?;

        for (index, waypoint) in waypoints.iter().enumerate() {
            let is_last = index + 1 == waypoints.len();
            let record = self.make_record(waypoint, is_last);
            trace!(index, short_name = %record.short_name, "encoding record");
            self.write_record(&record)?;
        }

        Ok(())
    }

    pub fn write_header(&mut self, count: u16) -> Result<(), EncodeError> {
        self.writer.write_all(&header_bytes(count))?;
        Ok(())
    }

    /// Writes a single record. The short name is sanitized on the way out.
    pub fn write_record(&mut self, record: &Record) -> Result<(), EncodeError> {
        let short_name = sanitize_short_name(&record.short_name);
        if short_name != record.short_name {
            warn!(
                original = %record.short_name,
                sanitized = %short_name,
                "short name contains characters TPG does not support"
            );
        }
        write_pstr(&mut self.writer, short_name.as_bytes())?;

        self.writer.write_all(&record.stored_lon.to_le_bytes())?;
        self.writer.write_all(&record.stored_lat.to_le_bytes())?;
        self.writer.write_all(&record.elevation_feet.to_le_bytes())?;
        self.writer.write_all(&record.reserved)?;

        let description = encode_string(&record.description);
        if description.len() > MAX_STRING_SIZE {
            warn!(
                len = description.len(),
                max = MAX_STRING_SIZE,
                "description truncated"
            );
        }
        write_pstr(&mut self.writer, &description)?;

        self.writer.write_all(&record.terminator)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn make_record(&mut self, waypoint: &Waypoint, is_last: bool) -> Record {
        let short_name = self.resolve_short_name(waypoint);
        let description = if waypoint.description.is_empty() {
            short_name.clone()
        } else {
            waypoint.description.clone()
        };

        let (stored_lon, stored_lat) = self
            .transformer
            .to_file_datum(waypoint.latitude, waypoint.longitude);

        Record {
            short_name,
            stored_lon,
            stored_lat,
            elevation_feet: meters_to_feet(waypoint.altitude),
            reserved: RESERVED,
            description,
            terminator: if is_last { LAST_TERMINATOR } else { TERMINATOR },
        }
    }

    fn resolve_short_name(&mut self, waypoint: &Waypoint) -> String {
        if !waypoint.short_name.is_empty() && !self.synthesize_shortnames {
            return waypoint.short_name.clone();
        }

        if waypoint.description.is_empty() {
            String::new()
        } else if self.synthesize_shortnames {
            self.synthesizer.synthesize(waypoint)
        } else {
            waypoint.description.clone()
        }
    }
}
