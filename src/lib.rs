//! East Asian Width lookups built from the Unicode Character Database.
//!
//! `EastAsianWidth.txt` is parsed once into an immutable [`RangeTable`],
//! which [`WidthLookup`] then answers point queries against. The
//! [`CrossValidator`] audits the table's general categories against an
//! independent classifier.
//!
//! ```no_run
//! use std::sync::Arc;
//! use typewidth::{ucd, EastAsianWidth, WidthLookup};
//!
//! let table = ucd::parse_file("ucd/EastAsianWidth.txt").unwrap();
//! let lookup = WidthLookup::new(Arc::new(table));
//! assert_eq!(lookup.width_of(0x3000), EastAsianWidth::FullWidth);
//! ```

extern crate itertools;
#[macro_use]
extern crate lazy_static;
extern crate linked_hash_map;
#[macro_use]
extern crate log;
extern crate rayon;
extern crate thiserror;
extern crate unicode_general_category;

pub mod category;
pub mod config;
pub mod consts;
pub mod emit;
pub mod error;
pub mod lookup;
pub mod oracle;
pub mod range;
pub mod ucd;
pub mod validate;
pub mod width;

pub use category::{CategoryCode, GeneralCategory};
pub use config::Config;
pub use error::{Error, Result};
pub use lookup::WidthLookup;
pub use oracle::{CategoryOracle, UnicodeOracle};
pub use range::{Entry, RangeTable, Row};
pub use validate::{CrossValidator, Fault, Mismatch, Report};
pub use width::EastAsianWidth;
