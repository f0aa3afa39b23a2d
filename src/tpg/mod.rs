//! Decoder/Encoder for National Geographic Topo! TPG waypoint files.
//!
//! The [decode_file] function can be used to decode TPG files and
//! [encode_file] to produce them. Coordinates are stored in a configurable
//! datum (see [Options]), with the longitude sign inverted.
//!
//! Only waypoints are supported; routes are not.

mod consts;
mod decode;
mod encode;
mod options;
mod pstr;
mod record;
mod sanitize;
mod transform;

pub use consts::{DEFAULT_DATUM, MAX_WAYPOINTS, SIGNATURE};
pub use decode::*;
pub use encode::*;
pub use options::Options;
pub use record::Record;
pub use sanitize::sanitize_short_name;
pub use transform::{CoordinateTransformer, feet_to_meters, meters_to_feet};

/// Broad classification of codec failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad signature or truncated data
    Format,
    /// Unknown datum name
    Config,
    /// More waypoints than the format can hold
    LimitExceeded,
    Io,
}
