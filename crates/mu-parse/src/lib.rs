//! mu-parse: unit expression parser.
//!
//! Turns text such as `kg·m/s^2` or `mg/L` into a [`ParsedUnit`] using a
//! shared set of [`Tables`].
//!
//! # Example
//!
//! ```
//! use mu_core::Dimension;
//! use mu_parse::parse_unit;
//! use mu_tables::build_tables;
//!
//! let tables = build_tables().unwrap();
//! let newton = parse_unit(&tables, "kg m s^-2").unwrap();
//! assert_eq!(newton.product(), tables.symbol("N").unwrap().product());
//! assert_eq!(newton.product().get(Dimension::Time), -2);
//! ```
//!
//! [`ParsedUnit`]: mu_core::ParsedUnit
//! [`Tables`]: mu_tables::Tables

pub mod cursor;
pub mod error;
pub mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use grammar::{MAX_DEPTH, UnitParser, parse_unit};
