//! Decoder/Encoder for National Geographic Topo! TPG waypoint files.
//!
//! The [tpg] module reads and writes the binary waypoint format. Datum
//! conversion and short name synthesis are pluggable through the
//! [DatumConverter] and [ShortNameSynthesizer] traits; the crate ships a
//! Molodensky based [datum::Datum] table and the [shortname::MakeShort]
//! synthesizer as defaults.

pub mod datum;
pub mod shortname;
#[cfg(feature = "tpg")]
pub mod tpg;

pub use datum::{ConfigError, DatumConverter};
pub use shortname::ShortNameSynthesizer;

/// A single waypoint in WGS84 coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Waypoint {
    /// Latitude in degrees (WGS84)
    pub latitude: f64,
    /// Longitude in degrees (WGS84)
    pub longitude: f64,
    /// Altitude in meters
    pub altitude: f64,
    pub short_name: String,
    pub description: String,
}
