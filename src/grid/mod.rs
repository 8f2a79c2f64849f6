mod squares;

use std::fmt;
use std::str::FromStr;

use log::error;

use crate::coordinate::{EastingNorthing, GeodeticCoordinate};
use crate::Error;

/// Selector for the grid systems the engine can express a position in.
///
/// `Nl` is a routing alias: Dutch lookups are UTM pinned to zone 32, and
/// the resulting reference reports itself as UTM.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridSystem {
    Gb,
    Ie,
    Nl,
    Utm,
}

impl FromStr for GridSystem {
    type Err = Error;

    /// Case-insensitive parse of the wire selectors GB, IE, NL, UTM.
    fn from_str(s: &str) -> Result<GridSystem, Error> {
        match s.to_ascii_uppercase().as_str() {
            "GB" => Ok(GridSystem::Gb),
            "IE" => Ok(GridSystem::Ie),
            "NL" => Ok(GridSystem::Nl),
            "UTM" => Ok(GridSystem::Utm),
            _ => {
                error!("invalid system: {s}");
                Err(Error::InvalidSystem(s.to_string()))
            }
        }
    }
}

impl fmt::Display for GridSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GridSystem::Gb => "GB",
            GridSystem::Ie => "IE",
            GridSystem::Nl => "NL",
            GridSystem::Utm => "UTM",
        })
    }
}

/// A position expressed in a grid system: the projected easting/northing,
/// the original geodetic coordinates, and — where the point falls inside
/// a lettering table's coverage — the alphanumeric reference codes.
///
/// Empty `code`/`short_code` mean "outside supported grid coverage", not
/// an error: most of the world has perfectly good UTM coordinates and no
/// lettered square.
#[derive(Clone, Debug, PartialEq)]
pub struct GridReference {
    pub latitude: f64,
    pub longitude: f64,
    pub easting: f64,
    pub northing: f64,
    pub system: GridSystem,
    /// UTM zone; `None` for the national grids.
    pub zone: Option<u8>,
    pub northern_hemisphere: bool,
    /// Square letters + 5-digit easting + 5-digit northing, or empty.
    pub code: String,
    /// Square letters + 3-digit easting + 3-digit northing, or empty.
    pub short_code: String,
}

impl GridReference {
    pub(crate) fn new(
        coord: &GeodeticCoordinate,
        position: EastingNorthing,
        system: GridSystem,
        zone: Option<u8>,
        northern_hemisphere: bool,
    ) -> GridReference {
        let (code, short_code) = encode(&position, system, zone, northern_hemisphere);
        GridReference {
            latitude: coord.latitude,
            longitude: coord.longitude,
            easting: position.easting,
            northing: position.northing,
            system,
            zone,
            northern_hemisphere,
            code,
            short_code,
        }
    }
}

/// Assemble the lettered codes for a projected position.
///
/// The easting and northing are truncated — never rounded — to whole
/// meters and zero-padded to 8 digits; the downstream services were
/// calibrated against exactly this behavior. The leading three digits of
/// each select the 100 km square.
fn encode(
    position: &EastingNorthing,
    system: GridSystem,
    zone: Option<u8>,
    northern_hemisphere: bool,
) -> (String, String) {
    let easting = format!("{:08}", position.easting as i64);
    let northing = format!("{:08}", position.northing as i64);
    let index = format!("{}{}", &easting[..3], &northing[..3]);

    let square = match system {
        GridSystem::Gb => squares::osgb(&index).map(String::from),
        // Published Irish references carry the island designator ahead of
        // the square letter
        GridSystem::Ie => squares::irish(&index).map(|square| format!("I{square}")),
        GridSystem::Utm if northern_hemisphere && zone == Some(30) => {
            squares::channel_islands(&index).map(String::from)
        }
        _ => None,
    };

    let Some(square) = square else {
        return (String::new(), String::new());
    };

    let code = format!("{square}{}{}", &easting[3..8], &northing[3..8]);
    let short_code = format!("{square}{}{}", &easting[3..6], &northing[3..6]);
    (code, short_code)
}

// ----- T E S T S -----------------------------------------------------------------
