//! Built-in SI prefix and symbol catalog.
//!
//! Mass is referenced to the gram, so every derived unit with a mass
//! component carries a compensating scale (1 N = 10^3 g m s^-2).

use mu_core::{DimVector, Dimension::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixCatalogEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub scale: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolCatalogEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub dim: DimVector,
    pub dimensionless: &'static [DimVector],
    pub scale: i32,
}

const fn prefix(key: &'static str, name: &'static str, scale: i32) -> PrefixCatalogEntry {
    PrefixCatalogEntry { key, name, scale }
}

const fn symbol(
    key: &'static str,
    name: &'static str,
    dim: DimVector,
    scale: i32,
) -> SymbolCatalogEntry {
    SymbolCatalogEntry {
        key,
        name,
        dim,
        dimensionless: &[],
        scale,
    }
}

const Z: DimVector = DimVector::ZERO;

const RADIAN_FACTORS: [DimVector; 2] = [DimVector::of(Length, 1), DimVector::of(Length, -1)];
const STERADIAN_FACTORS: [DimVector; 2] = [DimVector::of(Length, 2), DimVector::of(Length, -2)];

const STANDARD_PREFIXES: [PrefixCatalogEntry; 21] = [
    prefix("da", "deca", 1),
    prefix("h", "hecto", 2),
    prefix("k", "kilo", 3),
    prefix("M", "mega", 6),
    prefix("G", "giga", 9),
    prefix("T", "tera", 12),
    prefix("P", "peta", 15),
    prefix("E", "exa", 18),
    prefix("Z", "zetta", 21),
    prefix("Y", "yotta", 24),
    prefix("d", "deci", -1),
    prefix("c", "centi", -2),
    prefix("m", "milli", -3),
    prefix("μ", "micro", -6),
    prefix("u", "micro", -6),
    prefix("n", "nano", -9),
    prefix("p", "pico", -12),
    prefix("f", "femto", -15),
    prefix("a", "atto", -18),
    prefix("z", "zepto", -21),
    prefix("y", "yocto", -24),
];

const STANDARD_SYMBOLS: [SymbolCatalogEntry; 33] = [
    // Base dimensions
    symbol("m", "metre", DimVector::of(Length, 1), 0),
    symbol("g", "gram", DimVector::of(Mass, 1), 0),
    symbol("s", "second", DimVector::of(Time, 1), 0),
    symbol("A", "ampere", DimVector::of(Current, 1), 0),
    symbol("K", "kelvin", DimVector::of(Temperature, 1), 0),
    symbol("mol", "mole", DimVector::of(Amount, 1), 0),
    symbol("cd", "candela", DimVector::of(Intensity, 1), 0),
    // Derived units
    SymbolCatalogEntry {
        key: "rad",
        name: "radian",
        dim: Z,
        dimensionless: &RADIAN_FACTORS,
        scale: 0,
    },
    SymbolCatalogEntry {
        key: "sr",
        name: "steradian",
        dim: Z,
        dimensionless: &STERADIAN_FACTORS,
        scale: 0,
    },
    symbol("Hz", "hertz", DimVector::of(Time, -1), 0),
    symbol(
        "N",
        "newton",
        Z.with(Mass, 1).with(Length, 1).with(Time, -2),
        3,
    ),
    symbol(
        "Pa",
        "pascal",
        Z.with(Mass, 1).with(Length, -1).with(Time, -2),
        3,
    ),
    symbol(
        "J",
        "joule",
        Z.with(Mass, 1).with(Length, 2).with(Time, -2),
        3,
    ),
    symbol(
        "W",
        "watt",
        Z.with(Mass, 1).with(Length, 2).with(Time, -3),
        3,
    ),
    symbol("C", "coulomb", Z.with(Time, 1).with(Current, 1), 0),
    symbol(
        "V",
        "volt",
        Z.with(Mass, 1)
            .with(Length, 2)
            .with(Time, -3)
            .with(Current, -1),
        3,
    ),
    symbol(
        "F",
        "farad",
        Z.with(Mass, -1)
            .with(Length, -2)
            .with(Time, 4)
            .with(Current, 2),
        -3,
    ),
    symbol(
        "Ω",
        "ohm",
        Z.with(Mass, 1)
            .with(Length, 2)
            .with(Time, -3)
            .with(Current, -2),
        3,
    ),
    symbol(
        "S",
        "siemens",
        Z.with(Mass, -1)
            .with(Length, -2)
            .with(Time, 3)
            .with(Current, 2),
        -3,
    ),
    symbol(
        "Wb",
        "weber",
        Z.with(Mass, 1)
            .with(Length, 2)
            .with(Time, -2)
            .with(Current, -1),
        3,
    ),
    symbol(
        "T",
        "tesla",
        Z.with(Mass, 1).with(Time, -2).with(Current, -1),
        3,
    ),
    symbol(
        "H",
        "henry",
        Z.with(Mass, 1)
            .with(Length, 2)
            .with(Time, -2)
            .with(Current, -2),
        3,
    ),
    symbol("°C", "degree Celsius", DimVector::of(TemperatureC, 1), 0),
    symbol("℃", "degree Celsius", DimVector::of(TemperatureC, 1), 0),
    SymbolCatalogEntry {
        key: "lm",
        name: "lumen",
        dim: DimVector::of(Intensity, 1),
        dimensionless: &STERADIAN_FACTORS,
        scale: 0,
    },
    symbol("lx", "lux", Z.with(Length, -2).with(Intensity, 1), 0),
    symbol("Bq", "becquerel", DimVector::of(Time, -1), 0),
    symbol("Gy", "gray", Z.with(Length, 2).with(Time, -2), 0),
    symbol("Sv", "sievert", Z.with(Length, 2).with(Time, -2), 0),
    symbol("kat", "katal", Z.with(Amount, 1).with(Time, -1), 0),
    // Non-SI units
    symbol("l", "litre", DimVector::of(Length, 3), -3),
    symbol("L", "litre", DimVector::of(Length, 3), -3),
    symbol("Da", "dalton", Z.with(Mass, 1).with(Amount, -1), 0),
];

pub fn standard_prefixes() -> &'static [PrefixCatalogEntry] {
    &STANDARD_PREFIXES
}

pub fn standard_symbols() -> &'static [SymbolCatalogEntry] {
    &STANDARD_SYMBOLS
}
