use phf::phf_map;

use crate::datatypes::GeometryType;

/// A keyword recognized by a [`WordMatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Word {
    Geometry {
        geometry_type: GeometryType,
        measured: bool,
    },
    Empty,
}

/// Dialect-specific keyword recognition. This is the tokenizer's only
/// customization seam: the tokenizer depends on the matching capability, never
/// on a concrete dialect.
///
/// A match is the maximal ASCII-alphabetic word at `pos`, compared
/// case-insensitively; a word that is a strict prefix of a longer alphabetic
/// run does not match (so `POINTX` is not `POINT`).
pub trait WordMatcher {
    /// Try to recognize a keyword starting at byte `pos`. On success returns
    /// the word and its length in bytes, so the caller can advance past it.
    fn try_match(&self, input: &str, pos: usize) -> Option<(Word, usize)>;
}

static BASE_WORDS: phf::Map<&'static str, (GeometryType, bool)> = phf_map! {
    "POINT" => (GeometryType::Point, false),
    "LINESTRING" => (GeometryType::LineString, false),
    "POLYGON" => (GeometryType::Polygon, false),
    "MULTIPOINT" => (GeometryType::MultiPoint, false),
    "MULTILINESTRING" => (GeometryType::MultiLineString, false),
    "MULTIPOLYGON" => (GeometryType::MultiPolygon, false),
    "GEOMETRYCOLLECTION" => (GeometryType::GeometryCollection, false),
};

static POSTGIS_WORDS: phf::Map<&'static str, (GeometryType, bool)> = phf_map! {
    "POINT" => (GeometryType::Point, false),
    "POINTM" => (GeometryType::Point, true),
    "LINESTRING" => (GeometryType::LineString, false),
    "LINESTRINGM" => (GeometryType::LineString, true),
    "POLYGON" => (GeometryType::Polygon, false),
    "POLYGONM" => (GeometryType::Polygon, true),
    "MULTIPOINT" => (GeometryType::MultiPoint, false),
    "MULTIPOINTM" => (GeometryType::MultiPoint, true),
    "MULTILINESTRING" => (GeometryType::MultiLineString, false),
    "MULTILINESTRINGM" => (GeometryType::MultiLineString, true),
    "MULTIPOLYGON" => (GeometryType::MultiPolygon, false),
    "MULTIPOLYGONM" => (GeometryType::MultiPolygon, true),
    "GEOMETRYCOLLECTION" => (GeometryType::GeometryCollection, false),
    "GEOMETRYCOLLECTIONM" => (GeometryType::GeometryCollection, true),
};

/// The maximal run of ASCII letters starting at `pos`.
fn scan_word(input: &str, pos: usize) -> &str {
    let bytes = input.as_bytes();
    let mut end = pos;
    while end < bytes.len() && bytes[end].is_ascii_alphabetic() {
        end += 1;
    }
    &input[pos..end]
}

fn match_in(
    table: &phf::Map<&'static str, (GeometryType, bool)>,
    input: &str,
    pos: usize,
) -> Option<(Word, usize)> {
    let word = scan_word(input, pos);
    if word.is_empty() {
        return None;
    }
    let upper = word.to_ascii_uppercase();
    if upper == "EMPTY" {
        return Some((Word::Empty, word.len()));
    }
    table
        .get(upper.as_str())
        .map(|&(geometry_type, measured)| {
            (
                Word::Geometry {
                    geometry_type,
                    measured,
                },
                word.len(),
            )
        })
}

/// PostGIS 1.5 style dialect: measured geometries use single M-suffixed
/// keywords (`POINTM`, `LINESTRINGM`, ...). This is the default dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgisDialect;

impl WordMatcher for PostgisDialect {
    fn try_match(&self, input: &str, pos: usize) -> Option<(Word, usize)> {
        match_in(&POSTGIS_WORDS, input, pos)
    }
}

/// Plain Simple-Features dialect: only the seven unsuffixed keywords and
/// `EMPTY`; M-suffixed words do not match and fall through to a syntax error.
#[derive(Debug, Clone, Copy, Default)]
pub struct SfaDialect;

impl WordMatcher for SfaDialect {
    fn try_match(&self, input: &str, pos: usize) -> Option<(Word, usize)> {
        match_in(&BASE_WORDS, input, pos)
    }
}
