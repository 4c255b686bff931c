//! Streaming tokenizer and parser for Well-Known Text (WKT) geometries.
//!
//! The core is [`tokenizer::WktTokenizer`], a lazy, pull-based lexer that
//! recognizes geometry-type keywords (including measured-coordinate suffixes),
//! structural punctuation, the `EMPTY` sentinel, and runs of numeric
//! coordinates, across dialect differences supplied through the
//! [`tokenizer::WordMatcher`] seam. On top of it, [`reader::WktReader`]
//! assembles an owned [`geom::Geometry`] model, and [`writer`] encodes that
//! model back to WKT text.
//!
//! ```
//! use geowkt::{parse_wkt, write_wkt};
//!
//! let geometry = parse_wkt("POLYGON((0 0, 4 0, 4 4, 0 4, 0 0))").unwrap();
//! assert_eq!(write_wkt(&geometry), "POLYGON((0 0,4 0,4 4,0 4,0 0))");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use reader::{parse_wkt, WktReader};
pub use writer::write_wkt;

pub mod algorithm;
pub mod datatypes;
pub mod error;
pub mod geom;
pub mod io;
pub mod reader;
#[cfg(test)]
pub(crate) mod test;
pub mod tokenizer;
pub mod writer;
