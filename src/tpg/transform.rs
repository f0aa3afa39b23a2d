use super::consts::{FEET_TO_METERS, METERS_TO_FEET};
use crate::DatumConverter;

/// Maps between WGS84 waypoint coordinates and the values stored in a file.
///
/// Files store coordinates in a configured datum with the sign of the
/// longitude inverted. The inversion is applied on the file side of the
/// datum conversion in both directions.
#[derive(Debug, Clone)]
pub struct CoordinateTransformer<C> {
    converter: C,
}

impl<C: DatumConverter> CoordinateTransformer<C> {
    pub fn new(converter: C) -> Self {
        Self { converter }
    }

    /// Returns `(stored_lon, stored_lat)` for a WGS84 position.
    pub fn to_file_datum(&self, lat: f64, lon: f64) -> (f64, f64) {
        let (lat, lon) = self.converter.from_wgs84(lat, lon);
        (-lon, lat)
    }

    /// Returns the WGS84 `(lat, lon)` for stored file values.
    pub fn to_wgs84(&self, stored_lon: f64, stored_lat: f64) -> (f64, f64) {
        self.converter.to_wgs84(stored_lat, -stored_lon)
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }
}

pub fn feet_to_meters(feet: i16) -> f64 {
    f64::from(feet) * FEET_TO_METERS
}

/// Truncates toward zero; values outside the `i16` range saturate.
pub fn meters_to_feet(meters: f64) -> i16 {
    (meters * METERS_TO_FEET) as i16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datum::Datum;

    #[test]
    fn longitude_sign_is_inverted_on_disk() {
        let transformer = CoordinateTransformer::new(Datum::WGS84);
        assert_eq!(transformer.to_file_datum(47.5, -121.25), (121.25, 47.5));
        assert_eq!(transformer.to_wgs84(121.25, 47.5), (47.5, -121.25));
    }

    #[test]
    fn nad27_round_trips() {
        let transformer = CoordinateTransformer::new(Datum::NAD27);
        let (stored_lon, stored_lat) = transformer.to_file_datum(39.75, -104.99);
        assert!(stored_lon > 0.0);
        let (lat, lon) = transformer.to_wgs84(stored_lon, stored_lat);
        assert!((lat - 39.75).abs() < 1e-6);
        assert!((lon + 104.99).abs() < 1e-6);
    }

    #[test]
    fn elevation_round_trips_to_the_foot() {
        for feet in [-1000i16, -10, -1, 0, 1, 100, 4392, 14411, i16::MAX] {
            assert_eq!(meters_to_feet(feet_to_meters(feet)), feet);
        }
    }

    #[test]
    fn elevation_truncates_toward_zero() {
        assert_eq!(meters_to_feet(1.0), 3);
        assert_eq!(meters_to_feet(-1.0), -3);
        assert_eq!(meters_to_feet(1e9), i16::MAX);
        assert_eq!(meters_to_feet(f64::NAN), 0);
    }
}
