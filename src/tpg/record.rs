use super::consts::{RESERVED_SIZE, TERMINATOR_SIZE};
use super::transform::{CoordinateTransformer, feet_to_meters};
use crate::{DatumConverter, Waypoint};

/// One waypoint record as laid out on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub short_name: String,
    /// Longitude in the file datum, sign inverted
    pub stored_lon: f64,
    /// Latitude in the file datum
    pub stored_lat: f64,
    pub elevation_feet: i16,
    /// Not interpreted; probably point properties like color or icon
    pub reserved: [u8; RESERVED_SIZE],
    pub description: String,
    /// `01 80` between records, `00 00` after the last one
    pub terminator: [u8; TERMINATOR_SIZE],
}

impl Record {
    pub fn to_waypoint<C: DatumConverter>(
        &self,
        transformer: &CoordinateTransformer<C>,
    ) -> Waypoint {
        let (latitude, longitude) = transformer.to_wgs84(self.stored_lon, self.stored_lat);
        Waypoint {
            latitude,
            longitude,
            altitude: feet_to_meters(self.elevation_feet),
            short_name: self.short_name.clone(),
            description: self.description.clone(),
        }
    }
}
