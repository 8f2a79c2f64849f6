//! gr: express a WGS84 position in a national grid or UTM

use clap::Parser;
use gridref::{GeodeticCoordinate, GridSystem};
use log::debug;

/// Look up the grid reference for a geographic position.
///
/// Prints the easting/northing, the zone and hemisphere for UTM, and —
/// where the point is covered by a lettering table — the alphanumeric
/// reference codes.
#[derive(Parser, Debug)]
#[clap(name = "gr")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Grid system: GB, IE, NL or UTM
    #[clap(short, long, default_value = "UTM")]
    system: String,

    /// Latitude in decimal degrees, north positive
    #[clap(allow_hyphen_values = true)]
    latitude: f64,

    /// Longitude in decimal degrees, east positive
    #[clap(allow_hyphen_values = true)]
    longitude: f64,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();

    let system: GridSystem = options.system.parse()?;
    let coord = GeodeticCoordinate::new(options.latitude, options.longitude);
    debug!("{} lookup for {:?}", system, coord);

    let r = coord.grid_reference(system);
    println!("easting:  {:.3}", r.easting);
    println!("northing: {:.3}", r.northing);
    if let Some(zone) = r.zone {
        let aspect = if r.northern_hemisphere { 'N' } else { 'S' };
        println!("zone:     {zone}{aspect}");
    }
    if r.code.is_empty() {
        println!("code:     (outside lettered coverage)");
    } else {
        println!("code:     {}  ({})", r.code, r.short_code);
    }

    Ok(())
}
