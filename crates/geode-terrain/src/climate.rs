//! Latitude/altitude climate model and the Whittaker biome table.
//!
//! Temperature falls with latitude and with altitude above sea level; rainfall
//! follows temperature, dipping in the subtropical dry belts around
//! `|sin(lat)| = 0.5`. Both feed a 45×45 lookup of biome codes.

use std::fmt;

/// Biome classes of the lookup table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Biome {
    /// `I`
    Ice,
    /// `T`
    Tundra,
    /// `G`
    Grassland,
    /// `B`
    Taiga,
    /// `D`
    Desert,
    /// `S`
    Savanna,
    /// `F`
    TemperateForest,
    /// `R`
    TemperateRainforest,
    /// `W`
    XericShrubland,
    /// `E`
    TropicalDryForest,
    /// `O`
    TropicalRainforest,
}

impl Biome {
    /// Every biome, in table-code order.
    pub const ALL: [Biome; 11] = [
        Biome::Ice,
        Biome::Tundra,
        Biome::Grassland,
        Biome::Taiga,
        Biome::Desert,
        Biome::Savanna,
        Biome::TemperateForest,
        Biome::TemperateRainforest,
        Biome::XericShrubland,
        Biome::TropicalDryForest,
        Biome::TropicalRainforest,
    ];

    /// Single-letter code used in the lookup table.
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Biome::Ice => 'I',
            Biome::Tundra => 'T',
            Biome::Grassland => 'G',
            Biome::Taiga => 'B',
            Biome::Desert => 'D',
            Biome::Savanna => 'S',
            Biome::TemperateForest => 'F',
            Biome::TemperateRainforest => 'R',
            Biome::XericShrubland => 'W',
            Biome::TropicalDryForest => 'E',
            Biome::TropicalRainforest => 'O',
        }
    }

    /// Parse a table code.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.code() == code)
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Biome::Ice => "ice",
            Biome::Tundra => "tundra",
            Biome::Grassland => "grassland",
            Biome::Taiga => "taiga",
            Biome::Desert => "desert",
            Biome::Savanna => "savanna",
            Biome::TemperateForest => "temperate forest",
            Biome::TemperateRainforest => "temperate rainforest",
            Biome::XericShrubland => "xeric shrubland",
            Biome::TropicalDryForest => "tropical dry forest",
            Biome::TropicalRainforest => "tropical rainforest",
        }
    }

    /// Look up the biome for a latitude (radians) and elevation.
    #[must_use]
    pub fn classify(latitude: f64, altitude: f64) -> Self {
        let t = temperature(latitude, altitude);
        let r = rainfall(latitude, t);
        Self::from_climate(t, r)
    }

    /// Look up the biome for an already computed temperature and rainfall.
    #[must_use]
    pub fn from_climate(temperature: f64, rainfall: f64) -> Self {
        let row = table_bucket(rainfall * 300.0 - 9.0);
        let column = table_bucket(temperature * 300.0 + 10.0);
        let code = BIOME_TABLE[row][column];
        // Every byte of the table is a valid code; see `test_table_codes_are_known`.
        Self::from_code(code as char).unwrap_or(Biome::Ice)
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Relative temperature at a latitude (radians) and elevation.
///
/// Sunlight scales with `cos(lat)`; land cools at 1.2 per unit of height, the
/// sea floor only at 0.3.
#[must_use]
pub fn temperature(latitude: f64, altitude: f64) -> f64 {
    let y = libm::sin(latitude);
    let sun = libm::sqrt((1.0 - y * y).max(0.0));
    if altitude < 0.0 {
        sun / 8.0 + altitude * 0.3
    } else {
        sun / 8.0 - altitude * 1.2
    }
}

/// Relative rainfall at a latitude (radians) for a given temperature. Never negative.
#[must_use]
pub fn rainfall(latitude: f64, temperature: f64) -> f64 {
    let y = libm::sin(latitude).abs() - 0.5;
    (temperature * 0.65 + 0.1 - 0.011 / (y * y + 0.1)).max(0.0)
}

/// Truncate toward zero, then clamp into the table's `[0, 44]` index range.
fn table_bucket(scaled: f64) -> usize {
    scaled.trunc().clamp(0.0, 44.0) as usize
}

/// Rows are rainfall buckets, columns temperature buckets.
const BIOME_TABLE: [[u8; 45]; 45] = [
    *b"IIITTTTTGGGGGGGGDDDDDDDDDDDDDDDDDDDDDDDDDDDDD",
    *b"IIITTTTTGGGGGGGGDDDDGGDSDDSDDDDDDDDDDDDDDDDDD",
    *b"IITTTTTTTTTBGGGGGGGGGGGSSSSSSDDDDDDDDDDDDDDDD",
    *b"IITTTTTTTTBBBBBBGGGGGGGSSSSSSSSSWWWWWWWDDDDDD",
    *b"IITTTTTTTTBBBBBBGGGGGGGSSSSSSSSSSWWWWWWWWWWDD",
    *b"IIITTTTTTTBBBBBBFGGGGGGSSSSSSSSSSSWWWWWWWWWWW",
    *b"IIIITTTTTTBBBBBBFFGGGGGSSSSSSSSSSSWWWWWWWWWWW",
    *b"IIIIITTTTTBBBBBBFFFFGGGSSSSSSSSSSSWWWWWWWWWWW",
    *b"IIIIITTTTTBBBBBBBFFFFGGGSSSSSSSSSSSWWWWWWWWWW",
    *b"IIIIIITTTTBBBBBBBFFFFFFGGGSSSSSSSSWWWWWWWWWWW",
    *b"IIIIIIITTTBBBBBBBFFFFFFFFGGGSSSSSSWWWWWWWWWWW",
    *b"IIIIIIIITTBBBBBBBFFFFFFFFFFGGSSSSSWWWWWWWWWWW",
    *b"IIIIIIIIITBBBBBBBFFFFFFFFFFFFFSSSSWWWWWWWWWWW",
    *b"IIIIIIIIIITBBBBBBFFFFFFFFFFFFFFFSSEEEWWWWWWWW",
    *b"IIIIIIIIIITBBBBBBFFFFFFFFFFFFFFFFFFEEEEEEWWWW",
    *b"IIIIIIIIIIIBBBBBBFFFFFFFFFFFFFFFFFFEEEEEEEEWW",
    *b"IIIIIIIIIIIBBBBBBRFFFFFFFFFFFFFFFFFEEEEEEEEEE",
    *b"IIIIIIIIIIIIBBBBBBRFFFFFFFFFFFFFFFFEEEEEEEEEE",
    *b"IIIIIIIIIIIIIBBBBBRRRFFFFFFFFFFFFFFEEEEEEEEEE",
    *b"IIIIIIIIIIIIIIIBBBRRRRRFFFFFFFFFFFFEEEEEEEEEE",
    *b"IIIIIIIIIIIIIIIIIBRRRRRRRFFFFFFFFFFEEEEEEEEEE",
    *b"IIIIIIIIIIIIIIIIIRRRRRRRRRRFFFFFFFFEEEEEEEEEE",
    *b"IIIIIIIIIIIIIIIIIIRRRRRRRRRRRRFFFFFEEEEEEEEEE",
    *b"IIIIIIIIIIIIIIIIIIIRRRRRRRRRRRRRFRREEEEEEEEEE",
    *b"IIIIIIIIIIIIIIIIIIIIIRRRRRRRRRRRRRRRREEEEEEEE",
    *b"IIIIIIIIIIIIIIIIIIIIIIIRRRRRRRRRRRRRROOEEEEEE",
    *b"IIIIIIIIIIIIIIIIIIIIIIIIRRRRRRRRRROOOOOEEEEEE",
    *b"IIIIIIIIIIIIIIIIIIIIIIIIIIRRRRRRRRRROOOOOOEEE",
    *b"IIIIIIIIIIIIIIIIIIIIIIIIIIIRRRRRRRRROOOOOOOEE",
    *b"IIIIIIIIIIIIIIIIIIIIIIIIIIIIRRRRRRRROOOOOOOEE",
    *b"IIIIIIIIIIIIIIIIIIIIIIIIIIIIIRRRRRRROOOOOOOOE",
    *b"IIIIIIIIIIIIIIIIIIIIIIIIIIIIIIRRRRROOOOOOOOOO",
    *b"IIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIRROOOOOOOOOOO",
    *b"IIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIROOOOOOOOOOO",
    *b"IIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIROOOOOOOOOOO",
    *b"IIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIOOOOOOOOOO",
    *b"IIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIOOOOOOOOO",
    *b"IIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIOOOOOOOOO",
    *b"IIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIOOOOOOOO",
    *b"IIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIOOOOOOOO",
    *b"IIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIOOOOOOOO",
    *b"IIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIOOOOOOOO",
    *b"IIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIOOOOOOO",
    *b"IIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIOOOOOOO",
    *b"IIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIOOOOOOO",
];
