mod shift;

use crate::ellipsoid::Ellipsoid;

/// A datum ties a reference ellipsoid to a projected grid: the projection's
/// true origin and scale, the false origin, and the 7-parameter Helmert set
/// shifting geocentric WGS84 coordinates into the datum's frame.
///
/// UTM aspects carry an identity Helmert set: they are already WGS84.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Datum {
    name: &'static str,
    k_0: f64,
    lat_0: f64,
    lon_0: i32,
    x_0: f64,
    y_0: f64,
    translation: [f64; 3],
    scale: f64,
    rotation: [f64; 3],
    ellipsoid: Ellipsoid,
}

impl Datum {
    /// User defined datum. Translation in meters, scale in parts per
    /// million, rotation in seconds of arc.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        name: &'static str,
        k_0: f64,
        lat_0: f64,
        lon_0: i32,
        x_0: f64,
        y_0: f64,
        translation: [f64; 3],
        scale: f64,
        rotation: [f64; 3],
        ellipsoid: Ellipsoid,
    ) -> Datum {
        Datum {
            name,
            k_0,
            lat_0,
            lon_0,
            x_0,
            y_0,
            translation,
            scale,
            rotation,
            ellipsoid,
        }
    }

    // ----- The registry ----------------------------------------------------------
    //
    // The four datums behind the supported grid systems, fully constructed
    // at compile time. Helmert parameters for the two national grids are
    // the published WGS84-to-local sets.

    /// OSGB36 and the projection parameters of the Ordnance Survey
    /// National Grid.
    pub const NATIONAL_GRID: Datum = Datum::new(
        "Ordnance Survey National Grid",
        0.999_601_271_7,
        49.0,
        -2,
        400_000.0,
        -100_000.0,
        [-446.448, 125.157, -542.06],
        20.4894,
        [-0.1502, -0.247, -0.8421],
        Ellipsoid::AIRY_1830,
    );

    /// Ireland 1965 and the projection parameters of the Irish National
    /// Grid.
    pub const IRISH_NATIONAL_GRID: Datum = Datum::new(
        "Irish National Grid",
        1.000_035,
        53.5,
        -8,
        200_000.0,
        250_000.0,
        [-482.53, 130.596, -564.557],
        -8.15,
        [1.042, 0.214, 0.631],
        Ellipsoid::AIRY_1830_MODIFIED,
    );

    /// The northern aspect of UTM: false northing 0.
    pub const UTM_NORTH: Datum = Datum::new(
        "UTM Northern Hemisphere",
        0.9996,
        0.0,
        -3,
        500_000.0,
        0.0,
        [0.0, 0.0, 0.0],
        0.0,
        [0.0, 0.0, 0.0],
        Ellipsoid::WGS84,
    );

    /// The southern aspect of UTM: false northing 10 000 000 m, so that
    /// northings stay positive down to 80°S.
    pub const UTM_SOUTH: Datum = Datum::new(
        "UTM Southern Hemisphere",
        0.9996,
        0.0,
        -3,
        500_000.0,
        10_000_000.0,
        [0.0, 0.0, 0.0],
        0.0,
        [0.0, 0.0, 0.0],
        Ellipsoid::WGS84,
    );

    // ----- Accessors -------------------------------------------------------------

    /// The name the datum is published under
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The scale factor at the central meridian, *F₀*
    #[must_use]
    pub const fn k_0(&self) -> f64 {
        self.k_0
    }

    /// The latitude of the true origin, in degrees
    #[must_use]
    pub const fn lat_0(&self) -> f64 {
        self.lat_0
    }

    /// The longitude of the true origin (the central meridian), in whole
    /// degrees
    #[must_use]
    pub const fn lon_0(&self) -> i32 {
        self.lon_0
    }

    /// The false easting, i.e. the easting assigned to the true origin
    #[must_use]
    pub const fn x_0(&self) -> f64 {
        self.x_0
    }

    /// The false northing
    #[must_use]
    pub const fn y_0(&self) -> f64 {
        self.y_0
    }

    /// The reference ellipsoid the datum is built on
    #[must_use]
    pub const fn ellipsoid(&self) -> Ellipsoid {
        self.ellipsoid
    }
}

// ----- Tests ---------------------------------------------------------------------
