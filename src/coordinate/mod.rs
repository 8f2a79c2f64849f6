use log::error;

use crate::datum::Datum;
use crate::ellipsoid::Ellipsoid;
use crate::grid::{GridReference, GridSystem};
use crate::math::angular;
use crate::{tmerc, utm, Error};

/// A geodetic position: latitude and longitude in decimal degrees (north
/// and east positive), height in meters above the reference ellipsoid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticCoordinate {
    pub latitude: f64,
    pub longitude: f64,
    pub height: f64,
    pub ellipsoid: Ellipsoid,
}

/// A geocentric cartesian position in meters: X towards the Greenwich
/// meridian, Z towards the north pole. Transient intermediate of datum
/// shifts, never part of the public result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CartesianCoordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Projected planar coordinates, in meters relative to a grid's true origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EastingNorthing {
    pub easting: f64,
    pub northing: f64,
}

/// A latitude or longitude in degrees-minutes-seconds form, with the sign
/// carried by a hemisphere letter (N, S, E or W, case-insensitive).
#[derive(Clone, Copy, Debug)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
    pub hemisphere: char,
}

// ----- C O N S T R U C T O R S ---------------------------------------------------

impl Dms {
    #[must_use]
    pub fn new(degrees: u16, minutes: u8, seconds: f64, hemisphere: char) -> Dms {
        Dms {
            degrees,
            minutes,
            seconds,
            hemisphere,
        }
    }

    /// The angle as signed decimal degrees: S and W count negative.
    ///
    /// Any hemisphere letter outside N/S/E/W is rejected. The letter is
    /// not cross-checked against the axis the angle is used for.
    pub fn to_decimal_degrees(&self) -> Result<f64, Error> {
        let degrees = angular::dms_to_dd(self.degrees, self.minutes, self.seconds);
        match self.hemisphere.to_ascii_uppercase() {
            'N' | 'E' => Ok(degrees),
            'S' | 'W' => Ok(-degrees),
            _ => {
                error!("invalid direction: {}", self.hemisphere);
                Err(Error::InvalidDirection(self.hemisphere))
            }
        }
    }
}

impl GeodeticCoordinate {
    /// A position from decimal degrees, at height 0 on the WGS84 ellipsoid —
    /// the form in which every upstream data source hands us coordinates.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> GeodeticCoordinate {
        GeodeticCoordinate {
            latitude,
            longitude,
            height: 0.0,
            ellipsoid: Ellipsoid::WGS84,
        }
    }

    /// A position from sexagesimal components with hemisphere letters.
    pub fn from_dms(latitude: Dms, longitude: Dms) -> Result<GeodeticCoordinate, Error> {
        Ok(GeodeticCoordinate::new(
            latitude.to_decimal_degrees()?,
            longitude.to_decimal_degrees()?,
        ))
    }

    // ----- G R I D   R E F E R E N C E S -----------------------------------------

    /// The position expressed in the requested grid system.
    ///
    /// GB and IE re-express the point on the grid's own datum before
    /// projecting; NL is UTM forced to zone 32; UTM resolves the zone from
    /// the longitude.
    #[must_use]
    pub fn grid_reference(&self, system: GridSystem) -> GridReference {
        match system {
            GridSystem::Gb => self.national_grid(&Datum::NATIONAL_GRID, GridSystem::Gb),
            GridSystem::Ie => self.national_grid(&Datum::IRISH_NATIONAL_GRID, GridSystem::Ie),
            GridSystem::Nl => self.utm_zone(32),
            GridSystem::Utm => self.utm(),
        }
    }

    /// The position in the UTM zone its longitude falls in.
    #[must_use]
    pub fn utm(&self) -> GridReference {
        self.utm_zone(utm::zone(self.longitude))
    }

    /// The position in a caller-chosen UTM zone.
    ///
    /// The longitude is rotated into the zone by (30 − zone) × 6° and run
    /// through the projection with its fixed central meridian, rather than
    /// varying the central meridian per zone. Downstream consumers depend
    /// on the exact rounding this produces.
    #[must_use]
    pub fn utm_zone(&self, zone: u8) -> GridReference {
        let northern_hemisphere = self.latitude >= 0.0;
        let datum = utm::datum(self.latitude);
        let rotated = self.longitude + f64::from((30 - i32::from(zone)) * 6);
        let position = tmerc::project(self.latitude, rotated, datum);
        GridReference::new(self, position, GridSystem::Utm, Some(zone), northern_hemisphere)
    }

    fn national_grid(&self, datum: &Datum, system: GridSystem) -> GridReference {
        let local = datum.shift(self);
        let position = tmerc::project(local.latitude, local.longitude, datum);
        GridReference::new(self, position, system, None, true)
    }
}

// ----- T E S T S -----------------------------------------------------------------
