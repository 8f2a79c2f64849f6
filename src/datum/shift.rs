use super::*;
use crate::coordinate::{CartesianCoordinate, GeodeticCoordinate};
use crate::math::angular;

impl Datum {
    /// Re-express a geodetic position in this datum's reference frame:
    /// geodetic to geocentric cartesian on the position's own ellipsoid,
    /// a 7-parameter Helmert shift, and back to geodetic on the datum's
    /// ellipsoid.
    ///
    /// The height that comes out of the inverse conversion is carried
    /// along but not meaningful at the centimeter level; the projection
    /// does not use it.
    #[must_use]
    pub fn shift(&self, coord: &GeodeticCoordinate) -> GeodeticCoordinate {
        let cartesian = coord
            .ellipsoid
            .cartesian(coord.latitude, coord.longitude, coord.height);
        let shifted = self.helmert(&cartesian);
        self.ellipsoid.geodetic(&shifted)
    }

    // The similarity transform between cartesian frames: translation,
    // small-angle rotation, scale. All components of the input are read
    // before any component of the output is formed.
    fn helmert(&self, c: &CartesianCoordinate) -> CartesianCoordinate {
        let [cx, cy, cz] = self.translation;
        let s = 1.0 + self.scale / 1_000_000.0;
        let rx = angular::arcsec_to_rad(self.rotation[0]);
        let ry = angular::arcsec_to_rad(self.rotation[1]);
        let rz = angular::arcsec_to_rad(self.rotation[2]);

        CartesianCoordinate {
            x: cx + s * (c.x - rz * c.y + ry * c.z),
            y: cy + s * (c.y + rz * c.x - rx * c.z),
            z: cz + s * (c.z - ry * c.x + rx * c.y),
        }
    }
}

// ----- Tests ---------------------------------------------------------------------
