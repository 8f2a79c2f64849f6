mod cartesians;

/// Representation of a biaxial reference ellipsoid, defined by its
/// semimajor and semiminor axes. Shape descriptors (flattenings,
/// eccentricities, radii of curvature) are derived on demand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    name: &'static str,
    a: f64,
    b: f64,
}

/// WGS84 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        Ellipsoid::WGS84
    }
}

impl Ellipsoid {
    /// User defined ellipsoid
    #[must_use]
    pub const fn new(name: &'static str, semimajor_axis: f64, semiminor_axis: f64) -> Ellipsoid {
        Ellipsoid {
            name,
            a: semimajor_axis,
            b: semiminor_axis,
        }
    }

    // ----- The registry ----------------------------------------------------------
    //
    // The four ellipsoids underlying the supported grid systems, fully
    // constructed at compile time.

    /// The ellipsoid of the WGS84 datum, i.e. of GPS coordinates.
    pub const WGS84: Ellipsoid = Ellipsoid::new("WGS84", 6_378_137.0, 6_356_752.314_245);

    /// The ellipsoid of most current ETRS89-aligned realizations.
    pub const GRS80: Ellipsoid = Ellipsoid::new("GRS80", 6_378_137.0, 6_356_752.3141);

    /// The ellipsoid of the OSGB36 datum, used by the Ordnance Survey
    /// National Grid.
    pub const AIRY_1830: Ellipsoid = Ellipsoid::new("Airy 1830", 6_377_563.396, 6_356_256.909);

    /// The ellipsoid of the Ireland 1965 datum, used by the Irish
    /// National Grid.
    pub const AIRY_1830_MODIFIED: Ellipsoid =
        Ellipsoid::new("Airy 1830 Modified", 6_377_340.189, 6_356_034.447);

    // ----- Size ------------------------------------------------------------------

    /// The name the ellipsoid is published under
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The semimajor axis, *a*
    #[must_use]
    pub const fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b*
    #[must_use]
    pub const fn semiminor_axis(&self) -> f64 {
        self.b
    }

    // ----- Shape -----------------------------------------------------------------

    /// The flattening, *f = 1 - b/a*
    #[must_use]
    pub fn flattening(&self) -> f64 {
        1.0 - self.b / self.a
    }

    /// The third flattening, *n = (a - b) / (a + b)*
    #[must_use]
    pub fn third_flattening(&self) -> f64 {
        (self.a - self.b) / (self.a + self.b)
    }

    /// The squared eccentricity *e² = (a² - b²) / a²*
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        (self.a * self.a - self.b * self.b) / (self.a * self.a)
    }

    // ----- Curvatures ------------------------------------------------------------

    /// The radius of curvature in the prime vertical, *N*
    #[must_use]
    pub fn prime_vertical_radius_of_curvature(&self, latitude: f64) -> f64 {
        self.a / (1.0 - latitude.sin().powi(2) * self.eccentricity_squared()).sqrt()
    }

    /// The meridian radius of curvature, *M*
    #[must_use]
    pub fn meridian_radius_of_curvature(&self, latitude: f64) -> f64 {
        let num = self.a * (1.0 - self.eccentricity_squared());
        let denom = (1.0 - latitude.sin().powi(2) * self.eccentricity_squared()).powf(1.5);
        num / denom
    }
}

// ----- Tests ---------------------------------------------------------------------
