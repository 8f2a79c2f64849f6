use super::*;
use crate::coordinate::{CartesianCoordinate, GeodeticCoordinate};

impl Ellipsoid {
    // ----- Cartesian <--> Geodetic conversion ------------------------------------

    /// Geodetic to geocentric cartesian conversion, with the angular input
    /// in degrees and the height in meters above the ellipsoid.
    ///
    /// Follows the derivation given in annexe B of [Os18](crate::Bibliography::Os18).
    #[must_use]
    pub fn cartesian(&self, latitude: f64, longitude: f64, height: f64) -> CartesianCoordinate {
        let phi = latitude.to_radians();
        let lambda = longitude.to_radians();

        let n = self.prime_vertical_radius_of_curvature(phi);
        let aspect = (self.b * self.b) / (self.a * self.a);

        CartesianCoordinate {
            x: (n + height) * phi.cos() * lambda.cos(),
            y: (n + height) * phi.cos() * lambda.sin(),
            z: (n * aspect + height) * phi.sin(),
        }
    }

    /// Geocentric cartesian to geodetic conversion, with the angular output
    /// in degrees, on this ellipsoid.
    ///
    /// The latitude has no closed form; it is recovered by the fixed-point
    /// iteration of [Os18](crate::Bibliography::Os18) annexe B, seeded with
    /// the spherical approximation and iterated to attoradian agreement.
    /// The iteration contracts fast (3-4 rounds in practice), but is capped
    /// to guarantee termination.
    ///
    /// Points on (or numerically indistinguishable from) the rotation axis
    /// have no meaningful longitude and produce non-finite results. The
    /// supported grid systems are all far from the poles.
    #[must_use]
    pub fn geodetic(&self, cartesian: &CartesianCoordinate) -> GeodeticCoordinate {
        let es = self.eccentricity_squared();

        // The perpendicular distance from the point to the rotation axis
        let p = cartesian.x.hypot(cartesian.y);

        let mut phi = (cartesian.z / (p * (1.0 - es))).atan();
        let mut n = self.prime_vertical_radius_of_curvature(phi);
        for _ in 0..20 {
            let prev = phi;
            n = self.prime_vertical_radius_of_curvature(prev);
            phi = ((cartesian.z + es * n * prev.sin()) / p).atan();
            if (prev - phi).abs() < 1e-18 {
                break;
            }
        }

        let lambda = cartesian.y.atan2(cartesian.x);
        let height = p / phi.cos() - n;

        GeodeticCoordinate {
            latitude: phi.to_degrees(),
            longitude: lambda.to_degrees(),
            height,
            ellipsoid: *self,
        }
    }
}

// ----- Tests ---------------------------------------------------------------------
