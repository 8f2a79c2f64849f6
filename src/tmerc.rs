//! Transverse Mercator, following the Redfearn-style series of
//! [Red48](crate::Bibliography::Red48) in the form published by the
//! Ordnance Survey ([Os18](crate::Bibliography::Os18) annexe C).
//!
//! The higher-accuracy Engsager/Poder evaluation is deliberately not used:
//! the services consuming these eastings and northings were calibrated
//! against this series, truncation digits included.

use crate::coordinate::EastingNorthing;
use crate::datum::Datum;

/// Project a geodetic position — already expressed on the datum's own
/// ellipsoid, in degrees — to easting and northing in meters.
///
/// Deterministic and total: no iteration, no failure modes. Accuracy
/// degrades with distance from the central meridian, which is irrelevant
/// inside the coverage of any of the supported grids.
#[must_use]
#[allow(non_snake_case)] // mimic the coefficient names I-VI of the published formulae
pub fn project(latitude: f64, longitude: f64, datum: &Datum) -> EastingNorthing {
    let phi = latitude.to_radians();
    let lambda = longitude.to_radians();

    let ellps = datum.ellipsoid();
    let b = ellps.semiminor_axis();

    let phi_0 = datum.lat_0().to_radians();
    let lambda_0 = f64::from(datum.lon_0()).to_radians();
    let E_0 = datum.x_0();
    let N_0 = datum.y_0();
    let k_0 = datum.k_0();

    let (sin_phi, cos_phi) = phi.sin_cos();
    let tan_phi = phi.tan();

    // Radii of curvature in the prime vertical and the meridian, scaled
    // by the central meridian scale factor
    let nu = k_0 * ellps.prime_vertical_radius_of_curvature(phi);
    let rho = k_0 * ellps.meridian_radius_of_curvature(phi);
    let eta2 = nu / rho - 1.0;

    // The meridional arc from the true origin, via the third-flattening
    // series evaluated at (phi - phi_0) and (phi + phi_0)
    let n = ellps.third_flattening();
    let dphi = phi - phi_0;
    let sphi = phi + phi_0;
    let M = b
        * k_0
        * ((1. + n + 5. / 4. * n.powi(2) + 5. / 4. * n.powi(3)) * dphi
            - (3. * n + 3. * n.powi(2) + 21. / 8. * n.powi(3)) * dphi.sin() * sphi.cos()
            + (15. / 8. * n.powi(2) + 15. / 8. * n.powi(3)) * (2. * dphi).sin() * (2. * sphi).cos()
            - 35. / 24. * n.powi(3) * (3. * dphi).sin() * (3. * sphi).cos());

    let I = M + N_0;
    let II = nu / 2. * sin_phi * cos_phi;
    let III = nu / 24. * sin_phi * cos_phi.powi(3) * (5. - tan_phi.powi(2) + 9. * eta2);
    let IIIA = nu / 720. * sin_phi * cos_phi.powi(5) * (61. - 58. * tan_phi.powi(2) + tan_phi.powi(4));

    let IV = nu * cos_phi;
    let V = nu / 6. * cos_phi.powi(3) * (nu / rho - tan_phi.powi(2));
    let VI = nu / 120.
        * cos_phi.powi(5)
        * (5. - 18. * tan_phi.powi(2) + tan_phi.powi(4) + 14. * eta2
            - 58. * tan_phi.powi(2) * eta2);

    let dl = lambda - lambda_0;
    EastingNorthing {
        easting: E_0 + IV * dl + V * dl.powi(3) + VI * dl.powi(5),
        northing: I + II * dl.powi(2) + III * dl.powi(4) + IIIA * dl.powi(6),
    }
}

// ----- T E S T S -----------------------------------------------------------------
