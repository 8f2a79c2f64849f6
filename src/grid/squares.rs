//! The 100 km-square lettering tables.
//!
//! Each table is keyed by the 6-digit index formed from the leading three
//! digits of the zero-padded easting and northing, and kept as plain data
//! rather than arithmetic on letters: the maps read like the printed key
//! of the paper series, and a missing key is the regular "outside
//! coverage" outcome rather than a fallthrough.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

/// The two-letter squares of the Ordnance Survey National Grid, 8 columns
/// by 13 rows from SV in the south-west to JN beyond Shetland. The letter
/// I is skipped by convention.
#[rustfmt::skip]
static OSGB: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        // 1200 km north
        ("000012", "HL"), ("001012", "HM"), ("002012", "HN"), ("003012", "HO"),
        ("004012", "HP"), ("005012", "JL"), ("006012", "JM"), ("007012", "JN"),
        // 1100 km
        ("000011", "HQ"), ("001011", "HR"), ("002011", "HS"), ("003011", "HT"),
        ("004011", "HU"), ("005011", "JQ"), ("006011", "JR"), ("007011", "JS"),
        // 1000 km
        ("000010", "HV"), ("001010", "HW"), ("002010", "HX"), ("003010", "HY"),
        ("004010", "HZ"), ("005010", "JV"), ("006010", "JW"), ("007010", "JX"),
        // 900 km
        ("000009", "NA"), ("001009", "NB"), ("002009", "NC"), ("003009", "ND"),
        ("004009", "NE"), ("005009", "OA"), ("006009", "OB"), ("007009", "OC"),
        // 800 km
        ("000008", "NF"), ("001008", "NG"), ("002008", "NH"), ("003008", "NJ"),
        ("004008", "NK"), ("005008", "OF"), ("006008", "OG"), ("007008", "OH"),
        // 700 km
        ("000007", "NL"), ("001007", "NM"), ("002007", "NN"), ("003007", "NO"),
        ("004007", "NP"), ("005007", "OL"), ("006007", "OM"), ("007007", "ON"),
        // 600 km
        ("000006", "NQ"), ("001006", "NR"), ("002006", "NS"), ("003006", "NT"),
        ("004006", "NU"), ("005006", "OQ"), ("006006", "OR"), ("007006", "OS"),
        // 500 km
        ("000005", "NV"), ("001005", "NW"), ("002005", "NX"), ("003005", "NY"),
        ("004005", "NZ"), ("005005", "OV"), ("006005", "OW"), ("007005", "OX"),
        // 400 km
        ("000004", "SA"), ("001004", "SB"), ("002004", "SC"), ("003004", "SD"),
        ("004004", "SE"), ("005004", "TA"), ("006004", "TB"), ("007004", "TC"),
        // 300 km
        ("000003", "SF"), ("001003", "SG"), ("002003", "SH"), ("003003", "SJ"),
        ("004003", "SK"), ("005003", "TF"), ("006003", "TG"), ("007003", "TH"),
        // 200 km
        ("000002", "SL"), ("001002", "SM"), ("002002", "SN"), ("003002", "SO"),
        ("004002", "SP"), ("005002", "TL"), ("006002", "TM"), ("007002", "TN"),
        // 100 km
        ("000001", "SQ"), ("001001", "SR"), ("002001", "SS"), ("003001", "ST"),
        ("004001", "SU"), ("005001", "TQ"), ("006001", "TR"), ("007001", "TS"),
        // 0 km
        ("000000", "SV"), ("001000", "SW"), ("002000", "SX"), ("003000", "SY"),
        ("004000", "SZ"), ("005000", "TV"), ("006000", "TW"), ("007000", "TX"),
    ])
});

/// The single-letter 5×5 squares of the Irish National Grid, A in the
/// north-west to Z in the south-east, skipping I.
#[rustfmt::skip]
static IRISH: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        // 400 km north
        ("000004", "A"), ("001004", "B"), ("002004", "C"), ("003004", "D"), ("004004", "E"),
        // 300 km
        ("000003", "F"), ("001003", "G"), ("002003", "H"), ("003003", "J"), ("004003", "K"),
        // 200 km
        ("000002", "L"), ("001002", "M"), ("002002", "N"), ("003002", "O"), ("004002", "P"),
        // 100 km
        ("000001", "Q"), ("001001", "R"), ("002001", "S"), ("003001", "T"), ("004001", "U"),
        // 0 km
        ("000000", "V"), ("001000", "W"), ("002000", "X"), ("003000", "Y"), ("004000", "Z"),
    ])
});

/// The two UTM zone-30 squares covering the Channel Islands.
static CHANNEL_ISLANDS: Lazy<BTreeMap<&'static str, &'static str>> =
    Lazy::new(|| BTreeMap::from([("005054", "CJ"), ("005055", "CA")]));

pub(crate) fn osgb(index: &str) -> Option<&'static str> {
    OSGB.get(index).copied()
}

pub(crate) fn irish(index: &str) -> Option<&'static str> {
    IRISH.get(index).copied()
}

pub(crate) fn channel_islands(index: &str) -> Option<&'static str> {
    CHANNEL_ISLANDS.get(index).copied()
}

// ----- T E S T S -----------------------------------------------------------------
