//! Survey benchmarks for the full pipeline: WGS84 position in, grid
//! reference out. Eastings carry an asymmetric tolerance band; northings
//! and codes are tight.

use gridref::{Dms, Error, GeodeticCoordinate, GridSystem};

struct Benchmark {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    easting: f64,
    northing: f64,
    code: &'static str,
    short_code: &'static str,
}

fn check_lettered(
    benchmarks: &[Benchmark],
    system: GridSystem,
    easting_low: f64,
    easting_high: f64,
    northing_tolerance: f64,
) {
    for benchmark in benchmarks {
        let lookup = GeodeticCoordinate::new(benchmark.latitude, benchmark.longitude);
        let reference = lookup.grid_reference(system);

        assert!(
            reference.easting > benchmark.easting - easting_low
                && reference.easting < benchmark.easting + easting_high,
            "{}: easting {} too far from {}",
            benchmark.name,
            reference.easting,
            benchmark.easting
        );
        assert!(
            (reference.northing - benchmark.northing).abs() < northing_tolerance,
            "{}: northing {} too far from {}",
            benchmark.name,
            reference.northing,
            benchmark.northing
        );
        assert_eq!(reference.code, benchmark.code, "{}", benchmark.name);
        assert_eq!(reference.short_code, benchmark.short_code, "{}", benchmark.name);
    }
}

#[test]
fn gb_references() {
    let benchmarks = [
        Benchmark {
            name: "The Lizard",
            latitude: 49.97454006765309,
            longitude: -5.212325001930045,
            easting: 169770.,
            northing: 13209.,
            code: "SW6977013209",
            short_code: "SW697132",
        },
        Benchmark {
            name: "Wimbledon",
            latitude: 51.42761719993095,
            longitude: -0.1908007959012176,
            easting: 525876.,
            northing: 171398.,
            code: "TQ2587571398",
            short_code: "TQ258713",
        },
        Benchmark {
            name: "Shetland Islands",
            latitude: 60.419662930284225,
            longitude: -1.3939871714693122,
            easting: 433474.,
            northing: 1170799.,
            code: "HU3347370799",
            short_code: "HU334707",
        },
        Benchmark {
            name: "Aberdeen",
            latitude: 57.152853710141585,
            longitude: -2.1124450090652207,
            easting: 393296.,
            northing: 806892.,
            code: "NJ9329506892",
            short_code: "NJ932068",
        },
        Benchmark {
            name: "Isle of Man",
            latitude: 54.317958131191475,
            longitude: -4.384776130138725,
            easting: 244980.,
            northing: 493998.,
            code: "SC4498093998",
            short_code: "SC449939",
        },
        Benchmark {
            name: "Pembroke",
            latitude: 51.696604453740996,
            longitude: -4.940054429431384,
            easting: 196913.,
            northing: 203855.,
            code: "SM9691303855",
            short_code: "SM969038",
        },
        Benchmark {
            name: "Folkestone",
            latitude: 51.09322953304597,
            longitude: 1.1018199180798527,
            easting: 617298.,
            northing: 137234.,
            code: "TR1729737234",
            short_code: "TR172372",
        },
        Benchmark {
            name: "Isle of Wight",
            latitude: 50.65911346559466,
            longitude: -1.2544484482073506,
            easting: 452795.,
            northing: 84647.,
            code: "SZ5279484647",
            short_code: "SZ527846",
        },
        Benchmark {
            name: "Isles of Scilly",
            latitude: 49.918089161149695,
            longitude: -6.298469138464261,
            easting: 91552.,
            northing: 10849.,
            code: "SV9155410849",
            short_code: "SV915108",
        },
        Benchmark {
            name: "Western Isles of Scilly",
            latitude: 49.949269237524284,
            longitude: -6.355019079981123,
            easting: 87696.,
            northing: 14549.,
            code: "SV8769814549",
            short_code: "SV876145",
        },
    ];

    check_lettered(&benchmarks, GridSystem::Gb, 0.6, 2.8, 0.1);
}

#[test]
fn ie_references() {
    let benchmarks = [
        Benchmark {
            name: "Belfast",
            latitude: 54.596048,
            longitude: -5.930201,
            easting: 333825.,
            northing: 373948.,
            code: "IJ3382573948",
            short_code: "IJ338739",
        },
        Benchmark {
            name: "Londonderry",
            latitude: 55.007925,
            longitude: -7.325037,
            easting: 243234.,
            northing: 418038.,
            code: "IC4323418037",
            short_code: "IC432180",
        },
        Benchmark {
            name: "Enniskillen",
            latitude: 54.138185,
            longitude: -7.352331,
            easting: 242381.,
            northing: 321204.,
            code: "IH4238021204",
            short_code: "IH423212",
        },
        Benchmark {
            name: "Ballycastle",
            latitude: 55.202954,
            longitude: -6.234729,
            easting: 312442.,
            northing: 440964.,
            code: "ID1244140964",
            short_code: "ID124409",
        },
    ];

    check_lettered(&benchmarks, GridSystem::Ie, 0.6, 1.0, 0.4);
}

#[test]
fn channel_islands_references() {
    let benchmarks = [
        Benchmark {
            name: "St. Helier, Jersey",
            latitude: 49.179435,
            longitude: -2.087105,
            easting: 566530.,
            northing: 5447804.,
            code: "CJ6653047804",
            short_code: "CJ665478",
        },
        Benchmark {
            name: "Saint Ouen, Jersey",
            latitude: 49.252992,
            longitude: -2.239540,
            easting: 555339.,
            northing: 5455858.,
            code: "CJ5533955858",
            short_code: "CJ553558",
        },
        Benchmark {
            name: "Torteval, Guernsey",
            latitude: 49.433080,
            longitude: -2.658784,
            easting: 524740.,
            northing: 5475657.,
            code: "CJ2474075657",
            short_code: "CJ247756",
        },
        Benchmark {
            name: "St Anne, Alderney",
            latitude: 49.714151,
            longitude: -2.197707,
            easting: 557837.,
            northing: 5507158.,
            code: "CA5783707158",
            short_code: "CA578071",
        },
    ];

    check_lettered(&benchmarks, GridSystem::Utm, 1.0, 1.0, 1.0);
}

struct UtmBenchmark {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    easting: f64,
    northing: f64,
    zone: u8,
    northern_hemisphere: bool,
}

fn check_utm(benchmarks: &[UtmBenchmark], tolerance: f64) {
    for benchmark in benchmarks {
        let lookup = GeodeticCoordinate::new(benchmark.latitude, benchmark.longitude);
        let reference = lookup.utm();

        assert!(
            (reference.easting - benchmark.easting).abs() < tolerance,
            "{}: easting {} too far from {}",
            benchmark.name,
            reference.easting,
            benchmark.easting
        );
        assert!(
            (reference.northing - benchmark.northing).abs() < tolerance,
            "{}: northing {} too far from {}",
            benchmark.name,
            reference.northing,
            benchmark.northing
        );
        assert_eq!(reference.zone, Some(benchmark.zone), "{}", benchmark.name);
        assert_eq!(
            reference.northern_hemisphere, benchmark.northern_hemisphere,
            "{}",
            benchmark.name
        );
    }
}

#[test]
fn nl_references() {
    let benchmarks = [
        UtmBenchmark {
            name: "Groningen",
            latitude: 53.21484,
            longitude: 6.569683,
            easting: 337725.,
            northing: 5898927.,
            zone: 32,
            northern_hemisphere: true,
        },
        UtmBenchmark {
            name: "Rotterdam",
            latitude: 51.920239,
            longitude: 4.450462,
            easting: 599749.,
            northing: 5753160.,
            zone: 31,
            northern_hemisphere: true,
        },
        UtmBenchmark {
            name: "Venlo",
            latitude: 51.393114,
            longitude: 6.179330,
            easting: 303769.,
            northing: 5697318.,
            zone: 32,
            northern_hemisphere: true,
        },
    ];

    check_utm(&benchmarks, 1.0);
}

#[test]
fn worldwide_utm_references() {
    let benchmarks = [
        UtmBenchmark {
            name: "Kansas City, USA",
            latitude: 38.627346882,
            longitude: -95.3723847,
            easting: 293485.,
            northing: 4278094.,
            zone: 15,
            northern_hemisphere: true,
        },
        UtmBenchmark {
            name: "State of Rio Grande do Sul, Brazil",
            latitude: -28.0123802749,
            longitude: -54.12837482,
            easting: 782380.,
            northing: 6898101.,
            zone: 21,
            northern_hemisphere: false,
        },
        UtmBenchmark {
            name: "Pyongyang, North Korea",
            latitude: 39.1738927,
            longitude: 125.723542987,
            easting: 735276.,
            northing: 4339608.,
            zone: 51,
            northern_hemisphere: true,
        },
    ];

    check_utm(&benchmarks, 1.0);
}

#[test]
fn utm_from_dms() {
    let sydney = GeodeticCoordinate::from_dms(
        Dms::new(32, 39, 54.1237, 'S'),
        Dms::new(151, 22, 11.127897, 'E'),
    )
    .unwrap();
    let reference = sydney.utm();
    assert!((reference.easting - 347128.).abs() < 1.0);
    assert!((reference.northing - 6384672.).abs() < 1.0);
    assert_eq!(reference.zone, Some(56));
    assert!(!reference.northern_hemisphere);

    // Lower-case hemisphere letters are accepted
    let abidjan = GeodeticCoordinate::from_dms(
        Dms::new(6, 11, 5.21378, 'n'),
        Dms::new(4, 25, 27.237894, 'w'),
    )
    .unwrap();
    let reference = abidjan.utm();
    assert!((reference.easting - 342419.).abs() < 1.0);
    assert!((reference.northing - 683842.).abs() < 1.0);
    assert_eq!(reference.zone, Some(30));
    assert!(reference.northern_hemisphere);
}

#[test]
fn invalid_inputs() {
    let err = "XX".parse::<GridSystem>().unwrap_err();
    assert_eq!(err, Error::InvalidSystem("XX".into()));
    assert!(err.to_string().starts_with("invalid system"));

    let err = GeodeticCoordinate::from_dms(
        Dms::new(51, 0, 0., 'X'),
        Dms::new(0, 0, 0., 'E'),
    )
    .unwrap_err();
    assert_eq!(err, Error::InvalidDirection('X'));
    assert!(err.to_string().starts_with("invalid direction"));
}

#[test]
fn lookups_are_idempotent() {
    // Re-deriving a reference from the coordinates it reports reproduces
    // it exactly, zone and hemisphere included
    for (latitude, longitude) in [
        (53.21484, 6.569683),
        (-28.0123802749, -54.12837482),
        (49.179435, -2.087105),
    ] {
        let first = GeodeticCoordinate::new(latitude, longitude).utm();
        let again = GeodeticCoordinate::new(first.latitude, first.longitude).utm();
        assert_eq!(first, again);
    }
}
