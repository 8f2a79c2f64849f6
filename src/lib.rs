//! *Conversion of geodetic coordinates to national grid references and UTM*.
//!
//! The crate answers one question: given a WGS84 position, what are its
//! planar coordinates — and its lettered grid code — in the grid system a
//! spectrum regulator expects? Four systems are supported: the Ordnance
//! Survey [National Grid](https://en.wikipedia.org/wiki/Ordnance_Survey_National_Grid)
//! ("GB"), the [Irish National Grid](https://en.wikipedia.org/wiki/Irish_grid_reference_system)
//! ("IE"), plain UTM ("UTM"), and the Dutch convention of UTM forced to
//! zone 32 ("NL").
//!
//! The pipeline
//! ------------
//!
//! For the two national grids the input point is re-expressed on the
//! grid's own datum first: geodetic → geocentric cartesian, a 7-parameter
//! Helmert shift, and an iterative inverse back to geodetic on the Airy
//! ellipsoid. The shifted point (or, for UTM, the raw WGS84 point with its
//! longitude rotated into the zone) then goes through a Redfearn-series
//! Transverse Mercator projection, and the resulting easting/northing is
//! lettered by the 100 km-square tables.
//!
//! ```
//! use gridref::{GeodeticCoordinate, GridSystem};
//!
//! let wimbledon = GeodeticCoordinate::new(51.42762, -0.19080);
//! let r = wimbledon.grid_reference(GridSystem::Gb);
//! assert_eq!(r.code, "TQ2587571398");
//! ```

use thiserror::Error;

mod coordinate;
mod datum;
mod ellipsoid;
mod grid;
pub mod math;
mod tmerc;
mod utm;

pub use coordinate::CartesianCoordinate;
pub use coordinate::Dms;
pub use coordinate::EastingNorthing;
pub use coordinate::GeodeticCoordinate;
pub use datum::Datum;
pub use ellipsoid::Ellipsoid;
pub use grid::GridReference;
pub use grid::GridSystem;

/// The failure modes of the crate. Everything numeric is total over finite
/// input, so only the two selector parses can go wrong.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The grid-system selector is not one of GB, IE, NL, UTM.
    #[error("invalid system: {0}")]
    InvalidSystem(String),

    /// A hemisphere letter in a sexagesimal angle is not one of N, S, E, W.
    #[error("invalid direction: {0}")]
    InvalidDirection(char),
}

/// Literature, that has been useful in designing and implementing this library.
pub enum Bibliography {
    /// Ordnance Survey (2018): *A guide to coordinate systems in Great Britain*, v3.3.
    /// Source of the Redfearn-style projection formulae, the iterative
    /// cartesian-to-geodetic method, and the OSGB36 Helmert parameters.
    Os18,

    /// J.C.B. Redfearn (1948): *Transverse Mercator formulae*.
    /// Empire Survey Review, 9(69), pp. 318–322.
    /// [DOI](https://doi.org/10.1179/sre.1948.9.69.318)
    Red48,

    /// Ordnance Survey of Ireland / Ordnance Survey of Northern Ireland (1996):
    /// *The Irish Grid — A Description of the Co-ordinate Reference System*.
    Osi96,

    /// J.P. Snyder (1987): *Map Projections — A Working Manual*.
    /// USGS Professional Paper 1395. UTM conventions (zones, aspects,
    /// false origins).
    /// [DOI](https://doi.org/10.3133/pp1395)
    Sny87,
}
