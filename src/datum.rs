//! Geodetic datums and the conversion between them and WGS84.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("datum '{0}' is not recognized")]
    UnknownDatum(String),
}

/// Converts coordinates between WGS84 and one fixed datum.
///
/// All angles are in degrees.
pub trait DatumConverter {
    /// Converts `(lat, lon)` given in this datum to WGS84.
    fn to_wgs84(&self, lat: f64, lon: f64) -> (f64, f64);

    /// Converts WGS84 `(lat, lon)` to this datum.
    fn from_wgs84(&self, lat: f64, lon: f64) -> (f64, f64);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    pub name: &'static str,
    /// Semi-major axis in meters
    pub a: f64,
    /// Inverse flattening
    pub inv_f: f64,
}

impl Ellipsoid {
    pub const WGS84: Ellipsoid = Ellipsoid::new("WGS84", 6378137.0, 298.257223563);
    pub const GRS80: Ellipsoid = Ellipsoid::new("GRS80", 6378137.0, 298.257222101);
    pub const CLARKE_1866: Ellipsoid = Ellipsoid::new("Clarke 1866", 6378206.4, 294.9786982);
    pub const INTERNATIONAL_1924: Ellipsoid =
        Ellipsoid::new("International 1924", 6378388.0, 297.0);
    pub const AIRY_1830: Ellipsoid = Ellipsoid::new("Airy 1830", 6377563.396, 299.3249646);
    pub const BESSEL_1841: Ellipsoid = Ellipsoid::new("Bessel 1841", 6377397.155, 299.1528128);
    pub const AUSTRALIAN_NATIONAL: Ellipsoid =
        Ellipsoid::new("Australian National", 6378160.0, 298.25);

    const fn new(name: &'static str, a: f64, inv_f: f64) -> Self {
        Self { name, a, inv_f }
    }

    pub fn flattening(&self) -> f64 {
        1.0 / self.inv_f
    }
}

/// A datum defined by its ellipsoid and a 3-parameter shift to WGS84.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    pub name: &'static str,
    pub ellipsoid: Ellipsoid,
    /// Shift of the datum origin relative to WGS84, in meters
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
}

const fn datum(name: &'static str, ellipsoid: Ellipsoid, dx: f64, dy: f64, dz: f64) -> Datum {
    Datum {
        name,
        ellipsoid,
        dx,
        dy,
        dz,
    }
}

pub const DATUMS: &[Datum] = &[
    datum("WGS 84", Ellipsoid::WGS84, 0.0, 0.0, 0.0),
    datum("N. America 1927 mean", Ellipsoid::CLARKE_1866, -8.0, 160.0, 176.0),
    datum("N. America 1983", Ellipsoid::GRS80, 0.0, 0.0, 0.0),
    datum("European 1950 mean", Ellipsoid::INTERNATIONAL_1924, -87.0, -98.0, -121.0),
    datum("Ordnance Survey Great Britain 36", Ellipsoid::AIRY_1830, 375.0, -111.0, 431.0),
    datum("Tokyo mean", Ellipsoid::BESSEL_1841, -148.0, 507.0, 685.0),
    datum("Australian Geod 1984", Ellipsoid::AUSTRALIAN_NATIONAL, -134.0, -48.0, 149.0),
];

const ALIASES: &[(&str, &str)] = &[
    ("NAD27", "N. America 1927 mean"),
    ("NAD27 CONUS", "N. America 1927 mean"),
    ("NAD83", "N. America 1983"),
    ("WGS84", "WGS 84"),
    ("ED50", "European 1950 mean"),
    ("OSGB36", "Ordnance Survey Great Britain 36"),
];

impl Datum {
    pub const WGS84: Datum = DATUMS[0];
    pub const NAD27: Datum = DATUMS[1];

    /// Looks up a datum by its name or one of its common aliases.
    ///
    /// The comparison ignores ASCII case and surrounding whitespace.
    pub fn lookup(name: &str) -> Result<Datum, ConfigError> {
        let wanted = name.trim();
        let canonical = ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(wanted))
            .map_or(wanted, |(_, canonical)| *canonical);

        DATUMS
            .iter()
            .find(|datum| datum.name.eq_ignore_ascii_case(canonical))
            .copied()
            .ok_or_else(|| ConfigError::UnknownDatum(name.to_string()))
    }
}

impl DatumConverter for Datum {
    fn to_wgs84(&self, lat: f64, lon: f64) -> (f64, f64) {
        molodensky(
            lat,
            lon,
            &self.ellipsoid,
            &Ellipsoid::WGS84,
            (self.dx, self.dy, self.dz),
        )
    }

    fn from_wgs84(&self, lat: f64, lon: f64) -> (f64, f64) {
        molodensky(
            lat,
            lon,
            &Ellipsoid::WGS84,
            &self.ellipsoid,
            (-self.dx, -self.dy, -self.dz),
        )
    }
}

/// Standard Molodensky transformation for a point at zero ellipsoidal height.
///
/// The height change is computed by the full formula but discarded: the TPG
/// format carries elevation separately as a plain unit conversion.
fn molodensky(
    lat: f64,
    lon: f64,
    from: &Ellipsoid,
    to: &Ellipsoid,
    (dx, dy, dz): (f64, f64, f64),
) -> (f64, f64) {
    if from == to && dx == 0.0 && dy == 0.0 && dz == 0.0 {
        return (lat, lon);
    }

    let h = 0.0;
    let phi = lat.to_radians();
    let lambda = lon.to_radians();

    let a = from.a;
    let f = from.flattening();
    let b = a * (1.0 - f);
    let da = to.a - a;
    let df = to.flattening() - f;
    let e2 = 2.0 * f - f * f;

    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_lambda, cos_lambda) = lambda.sin_cos();

    let w = 1.0 - e2 * sin_phi * sin_phi;
    let rn = a / w.sqrt();
    let rm = a * (1.0 - e2) / w.powf(1.5);

    let d_phi = (-dx * sin_phi * cos_lambda - dy * sin_phi * sin_lambda
        + dz * cos_phi
        + da * (rn * e2 * sin_phi * cos_phi) / a
        + df * (rm * (a / b) + rn * (b / a)) * sin_phi * cos_phi)
        / (rm + h);

    let d_lambda = (-dx * sin_lambda + dy * cos_lambda) / ((rn + h) * cos_phi);

    (
        (phi + d_phi).to_degrees(),
        (lambda + d_lambda).to_degrees(),
    )
}
