//! The WKT tokenizer: a lazy, forward-only lexer over an in-memory string.
//!
//! Tokens are produced on demand through [`WktTokenizer::has_more`] /
//! [`WktTokenizer::next_token`] (or the [`Iterator`] impl); the whole token
//! stream is never materialized. The tokenizer holds only a byte cursor into
//! the borrowed input plus the measured flag of the last geometry keyword,
//! never any token history.
//!
//! Keyword recognition is delegated to a [`WordMatcher`] dialect supplied at
//! construction. Any SRID prefix (`SRID=...;`) is out of scope and assumed
//! stripped upstream.
//!
//! A tokenizer instance is not shareable across callers (it carries mutable
//! cursor state), but independent instances over independently owned input are
//! freely usable from multiple threads. Scans terminate in time linear in
//! input length.

mod token;
mod words;

pub use token::{PointSequence, WktToken};
pub use words::{PostgisDialect, SfaDialect, Word, WordMatcher};

use crate::error::{Result, WktError};
use crate::geom::Coord;

/// Pull-based lexer over one WKT string.
///
/// # Examples
///
/// ```
/// use geowkt::tokenizer::{WktToken, WktTokenizer};
///
/// let mut tokens = WktTokenizer::new("POINT EMPTY");
/// assert!(tokens.has_more());
/// assert!(matches!(tokens.next_token().unwrap(), WktToken::Geometry { .. }));
/// assert_eq!(tokens.next_token().unwrap(), WktToken::Empty);
/// assert!(!tokens.has_more());
/// ```
#[derive(Debug)]
pub struct WktTokenizer<'a, M: WordMatcher = PostgisDialect> {
    input: &'a str,
    pos: usize,
    matcher: M,
    /// Whether the most recent geometry keyword carried the measured suffix.
    /// Decides how a 3-value coordinate's third field is interpreted.
    measured: bool,
}

impl<'a> WktTokenizer<'a, PostgisDialect> {
    /// Tokenizer over `input` with the default [`PostgisDialect`].
    pub fn new(input: &'a str) -> Self {
        Self::with_matcher(input, PostgisDialect)
    }
}

impl<'a, M: WordMatcher> WktTokenizer<'a, M> {
    pub fn with_matcher(input: &'a str, matcher: M) -> Self {
        WktTokenizer {
            input,
            pos: 0,
            matcher,
            measured: false,
        }
    }

    /// Current byte offset into the input.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// True iff another token is available. Skips (and caches the skip of)
    /// insignificant whitespace; otherwise a pure peek.
    pub fn has_more(&mut self) -> bool {
        self.skip_whitespace();
        self.pos < self.input.len()
    }

    /// Produce the next token.
    ///
    /// Callers are expected to check [`has_more`](Self::has_more) first;
    /// calling this at end of input is an error. Any unrecognized lexeme is a
    /// hard [`WktError::Syntax`], never a skipped token, and the tokenizer
    /// must be discarded after a failure.
    pub fn next_token(&mut self) -> Result<WktToken> {
        self.skip_whitespace();
        if self.pos >= self.input.len() {
            return Err(WktError::Syntax {
                pos: self.pos,
                expected: "a token before end of input",
            });
        }
        if let Some((word, len)) = self.matcher.try_match(self.input, self.pos) {
            self.pos += len;
            return Ok(match word {
                Word::Geometry {
                    geometry_type,
                    measured,
                } => {
                    self.measured = measured;
                    WktToken::Geometry {
                        geometry_type,
                        measured,
                    }
                }
                Word::Empty => WktToken::Empty,
            });
        }
        match self.input.as_bytes()[self.pos] {
            b'(' => {
                self.pos += 1;
                Ok(WktToken::StartList)
            }
            b')' => {
                self.pos += 1;
                Ok(WktToken::EndList)
            }
            b',' => {
                self.pos += 1;
                Ok(WktToken::ElementSeparator)
            }
            b if starts_number(b) => self.scan_point_sequence(),
            _ => Err(WktError::Syntax {
                pos: self.pos,
                expected: "a geometry keyword, EMPTY, a parenthesis, a comma, or a coordinate",
            }),
        }
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    /// One floating point literal at the cursor. `lexical` consumes the
    /// longest valid prefix, which accepts forms like `.24`, `-0.5` and `1e-3`
    /// and rejects a bare sign.
    fn scan_number(&mut self) -> Result<f64> {
        match lexical_core::parse_partial::<f64>(&self.input.as_bytes()[self.pos..]) {
            Ok((value, len)) if len > 0 => {
                self.pos += len;
                Ok(value)
            }
            _ => Err(WktError::Syntax {
                pos: self.pos,
                expected: "a floating point literal",
            }),
        }
    }

    /// One coordinate: 2 to 4 whitespace-separated values, terminated by the
    /// first `,`, `)`, or end of input. With 3 values the third is M when the
    /// current geometry keyword was measured, Z otherwise; 4 values are always
    /// Z then M.
    fn scan_coord(&mut self) -> Result<Coord> {
        let mut values = [0f64; 4];
        let mut n = 0;
        loop {
            self.skip_whitespace();
            match self.input.as_bytes().get(self.pos) {
                Some(&b) if starts_number(b) => {
                    if n == 4 {
                        return Err(WktError::Syntax {
                            pos: self.pos,
                            expected: "at most four values per coordinate",
                        });
                    }
                    values[n] = self.scan_number()?;
                    n += 1;
                }
                _ => break,
            }
        }
        if n < 2 {
            return Err(WktError::Syntax {
                pos: self.pos,
                expected: "at least two values per coordinate",
            });
        }
        Ok(match n {
            2 => Coord::xy(values[0], values[1]),
            3 if self.measured => Coord::xym(values[0], values[1], values[2]),
            3 => Coord::xyz(values[0], values[1], values[2]),
            _ => Coord::xyzm(values[0], values[1], values[2], values[3]),
        })
    }

    /// Greedy coordinate-run scan: consumes every coordinate it can starting
    /// at the cursor. A comma continues the run only when followed (after
    /// whitespace) by the start of another numeric literal; the scan stops
    /// before `)` and before any other comma, which then surfaces as an
    /// [`WktToken::ElementSeparator`] on the next call.
    fn scan_point_sequence(&mut self) -> Result<WktToken> {
        let first = self.scan_coord()?;
        let dimension = first.dimension();
        let mut coords = vec![first];
        loop {
            self.skip_whitespace();
            if !self.comma_continues_run() {
                break;
            }
            self.pos += 1;
            let coord = self.scan_coord()?;
            if coord.dimension() != dimension {
                return Err(WktError::Syntax {
                    pos: self.pos,
                    expected: "a coordinate of the same dimension as its predecessors",
                });
            }
            coords.push(coord);
        }
        Ok(WktToken::PointSequence(PointSequence::new(coords, dimension)))
    }

    fn comma_continues_run(&self) -> bool {
        let bytes = self.input.as_bytes();
        if bytes.get(self.pos) != Some(&b',') {
            return false;
        }
        let mut look = self.pos + 1;
        while look < bytes.len() && bytes[look].is_ascii_whitespace() {
            look += 1;
        }
        matches!(bytes.get(look), Some(&b) if starts_number(b))
    }
}

/// First byte of a floating point literal.
fn starts_number(b: u8) -> bool {
    b.is_ascii_digit() || b == b'.' || b == b'-' || b == b'+'
}

/// Forward-only iteration over the same cursor state; not restartable. To
/// re-scan, build a fresh tokenizer over the same input.
impl<'a, M: WordMatcher> Iterator for WktTokenizer<'a, M> {
    type Item = Result<WktToken>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_more() {
            Some(self.next_token())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::{Dimension, GeometryType};
    use approx::ulps_eq;

    fn geometry(geometry_type: GeometryType, measured: bool) -> WktToken {
        WktToken::Geometry {
            geometry_type,
            measured,
        }
    }

    fn sequence(tokens: &mut WktTokenizer) -> PointSequence {
        match tokens.next_token().unwrap() {
            WktToken::PointSequence(sequence) => sequence,
            other => panic!("expected a point sequence, got {other:?}"),
        }
    }

    #[test]
    fn only_whitespace() {
        let mut tokens = WktTokenizer::new("    ");
        assert!(!tokens.has_more());
    }

    #[test]
    fn empty_input() {
        let mut tokens = WktTokenizer::new("");
        assert!(!tokens.has_more());
    }

    #[test]
    fn tokenize_empty_point() {
        let mut tokens = WktTokenizer::new("POINT EMPTY");
        assert!(tokens.has_more());
        assert_eq!(
            tokens.next_token().unwrap(),
            geometry(GeometryType::Point, false)
        );
        assert!(tokens.has_more());
        assert_eq!(tokens.next_token().unwrap(), WktToken::Empty);
        assert!(!tokens.has_more());
    }

    #[test]
    fn tokenize_point() {
        let mut tokens = WktTokenizer::new("POINT (20 33.3)");
        assert_eq!(
            tokens.next_token().unwrap(),
            geometry(GeometryType::Point, false)
        );
        assert_eq!(tokens.next_token().unwrap(), WktToken::StartList);
        let sequence = sequence(&mut tokens);
        assert_eq!(sequence.len(), 1);
        let coord = sequence.coords()[0];
        assert!(ulps_eq!(coord.x, 20.0));
        assert!(ulps_eq!(coord.y, 33.3));
        assert_eq!(coord.z, None);
        assert_eq!(coord.m, None);
        assert_eq!(tokens.next_token().unwrap(), WktToken::EndList);
        assert!(!tokens.has_more());
    }

    #[test]
    fn tokenize_point_3d() {
        let mut tokens = WktTokenizer::new("POINT (20 33.3 .24)");
        assert_eq!(
            tokens.next_token().unwrap(),
            geometry(GeometryType::Point, false)
        );
        assert_eq!(tokens.next_token().unwrap(), WktToken::StartList);
        let sequence = sequence(&mut tokens);
        assert_eq!(sequence.len(), 1);
        assert_eq!(sequence.dimension(), Dimension::Xyz);
        let coord = sequence.coords()[0];
        assert!(ulps_eq!(coord.x, 20.0));
        assert!(ulps_eq!(coord.y, 33.3));
        assert!(ulps_eq!(coord.z.unwrap(), 0.24));
        assert_eq!(coord.m, None);
        assert_eq!(tokens.next_token().unwrap(), WktToken::EndList);
        assert!(!tokens.has_more());
    }

    #[test]
    fn tokenize_point_m() {
        let mut tokens = WktTokenizer::new("POINTM (20 33.3 .24)");
        assert_eq!(
            tokens.next_token().unwrap(),
            geometry(GeometryType::Point, true)
        );
        assert_eq!(tokens.next_token().unwrap(), WktToken::StartList);
        let sequence = sequence(&mut tokens);
        assert_eq!(sequence.len(), 1);
        assert_eq!(sequence.dimension(), Dimension::Xym);
        let coord = sequence.coords()[0];
        assert!(ulps_eq!(coord.x, 20.0));
        assert!(ulps_eq!(coord.y, 33.3));
        assert_eq!(coord.z, None);
        assert!(ulps_eq!(coord.m.unwrap(), 0.24));
        assert_eq!(tokens.next_token().unwrap(), WktToken::EndList);
        assert!(!tokens.has_more());
    }

    #[test]
    fn tokenize_linestring() {
        // The comma between the two coordinate tuples stays inside the run; it
        // must not surface as an element separator.
        let mut tokens = WktTokenizer::new("LINESTRING(20 33.3 .24 , .1 2 3)");
        assert_eq!(
            tokens.next_token().unwrap(),
            geometry(GeometryType::LineString, false)
        );
        assert_eq!(tokens.next_token().unwrap(), WktToken::StartList);
        let sequence = sequence(&mut tokens);
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.dimension(), Dimension::Xyz);
        let coords = sequence.coords();
        assert!(ulps_eq!(coords[0].x, 20.0));
        assert!(ulps_eq!(coords[0].y, 33.3));
        assert!(ulps_eq!(coords[0].z.unwrap(), 0.24));
        assert!(ulps_eq!(coords[1].x, 0.1));
        assert!(ulps_eq!(coords[1].y, 2.0));
        assert!(ulps_eq!(coords[1].z.unwrap(), 3.0));
        assert_eq!(tokens.next_token().unwrap(), WktToken::EndList);
        assert!(!tokens.has_more());
    }

    #[test]
    fn tokenize_polygon() {
        let wkt = "POLYGON((5 5, 1 0, 1 1 ,0 1, 3 3),(0.25 0.25, 0.25 0.5, 0.5 0.5, 0.5 0.25, 0.25 0.25))";
        let mut tokens = WktTokenizer::new(wkt);
        assert_eq!(
            tokens.next_token().unwrap(),
            geometry(GeometryType::Polygon, false)
        );
        assert_eq!(tokens.next_token().unwrap(), WktToken::StartList);
        assert_eq!(tokens.next_token().unwrap(), WktToken::StartList);
        let first = sequence(&mut tokens);
        assert_eq!(first.len(), 5);
        assert_eq!(tokens.next_token().unwrap(), WktToken::EndList);
        assert_eq!(tokens.next_token().unwrap(), WktToken::ElementSeparator);
        assert_eq!(tokens.next_token().unwrap(), WktToken::StartList);
        let second = sequence(&mut tokens);
        assert_eq!(second.len(), 5);
        assert_eq!(tokens.next_token().unwrap(), WktToken::EndList);
        assert_eq!(tokens.next_token().unwrap(), WktToken::EndList);
        assert!(!tokens.has_more());
    }

    #[test]
    fn rescan_is_idempotent() {
        let wkt = "MULTIPOLYGON(((0 0, 1 0, 1 1, 0 0)), ((2 2, 3 2, 3 3, 2 2)))";
        let first: Vec<_> = WktTokenizer::new(wkt).collect::<Result<_>>().unwrap();
        let second: Vec<_> = WktTokenizer::new(wkt).collect::<Result<_>>().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn four_values_are_z_then_m() {
        let mut tokens = WktTokenizer::new("POINT(1 2 3 4)");
        tokens.next_token().unwrap();
        tokens.next_token().unwrap();
        let sequence = sequence(&mut tokens);
        assert_eq!(sequence.dimension(), Dimension::Xyzm);
        let coord = sequence.coords()[0];
        assert!(ulps_eq!(coord.z.unwrap(), 3.0));
        assert!(ulps_eq!(coord.m.unwrap(), 4.0));
    }

    #[test]
    fn negative_and_exponent_literals() {
        let mut tokens = WktTokenizer::new("POINT(-1.5 2e3)");
        tokens.next_token().unwrap();
        tokens.next_token().unwrap();
        let coord = sequence(&mut tokens).coords()[0];
        assert!(ulps_eq!(coord.x, -1.5));
        assert!(ulps_eq!(coord.y, 2000.0));
    }

    #[test]
    fn comma_before_group_is_a_separator() {
        // After the inner list closes, the comma separates sibling groups.
        let mut tokens = WktTokenizer::new("MULTIPOINT((1 2),(3 4))");
        tokens.next_token().unwrap();
        assert_eq!(tokens.next_token().unwrap(), WktToken::StartList);
        assert_eq!(tokens.next_token().unwrap(), WktToken::StartList);
        sequence(&mut tokens);
        assert_eq!(tokens.next_token().unwrap(), WktToken::EndList);
        assert_eq!(tokens.next_token().unwrap(), WktToken::ElementSeparator);
        assert_eq!(tokens.next_token().unwrap(), WktToken::StartList);
        sequence(&mut tokens);
        assert_eq!(tokens.next_token().unwrap(), WktToken::EndList);
        assert_eq!(tokens.next_token().unwrap(), WktToken::EndList);
        assert!(!tokens.has_more());
    }

    #[test]
    fn stray_trailing_comma_surfaces_as_separator() {
        // The run stops before a comma not followed by a coordinate; the
        // parser is the one to reject it.
        let mut tokens = WktTokenizer::new("LINESTRING(1 2,)");
        tokens.next_token().unwrap();
        tokens.next_token().unwrap();
        assert_eq!(sequence(&mut tokens).len(), 1);
        assert_eq!(tokens.next_token().unwrap(), WktToken::ElementSeparator);
        assert_eq!(tokens.next_token().unwrap(), WktToken::EndList);
        assert!(!tokens.has_more());
    }

    #[test]
    fn unrecognized_lexeme_is_a_hard_error() {
        let mut tokens = WktTokenizer::new("POINT (20 ?)");
        tokens.next_token().unwrap();
        tokens.next_token().unwrap();
        let err = tokens.next_token().unwrap_err();
        match err {
            WktError::Syntax { pos, .. } => assert_eq!(pos, 10),
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_word_is_a_hard_error() {
        let mut tokens = WktTokenizer::new("CIRCLE(1 2)");
        let err = tokens.next_token().unwrap_err();
        assert!(matches!(err, WktError::Syntax { pos: 0, .. }));
    }

    #[test]
    fn bare_sign_is_a_hard_error() {
        let mut tokens = WktTokenizer::new("POINT(- 2)");
        tokens.next_token().unwrap();
        tokens.next_token().unwrap();
        assert!(matches!(
            tokens.next_token().unwrap_err(),
            WktError::Syntax { pos: 6, .. }
        ));
    }

    #[test]
    fn single_value_coordinate_is_rejected() {
        let mut tokens = WktTokenizer::new("POINT(20)");
        tokens.next_token().unwrap();
        tokens.next_token().unwrap();
        assert!(tokens.next_token().is_err());
    }

    #[test]
    fn five_value_coordinate_is_rejected() {
        let mut tokens = WktTokenizer::new("POINT(1 2 3 4 5)");
        tokens.next_token().unwrap();
        tokens.next_token().unwrap();
        assert!(tokens.next_token().is_err());
    }

    #[test]
    fn mixed_arity_within_run_is_rejected() {
        let mut tokens = WktTokenizer::new("LINESTRING(1 2, 3 4 5)");
        tokens.next_token().unwrap();
        tokens.next_token().unwrap();
        assert!(tokens.next_token().is_err());
    }

    #[test]
    fn next_token_at_end_of_input_is_an_error() {
        let mut tokens = WktTokenizer::new("  ");
        assert!(!tokens.has_more());
        assert!(matches!(
            tokens.next_token().unwrap_err(),
            WktError::Syntax { pos: 2, .. }
        ));
    }

    #[test]
    fn measured_flag_resets_per_keyword() {
        // Inner POINT reverts to non-measured interpretation after POINTM.
        let mut tokens = WktTokenizer::new("POINTM(1 2 3) POINT(1 2 3)");
        tokens.next_token().unwrap();
        tokens.next_token().unwrap();
        assert_eq!(sequence(&mut tokens).dimension(), Dimension::Xym);
        tokens.next_token().unwrap();
        tokens.next_token().unwrap();
        tokens.next_token().unwrap();
        assert_eq!(sequence(&mut tokens).dimension(), Dimension::Xyz);
    }

    #[test]
    fn iterator_yields_full_stream() {
        let tokens: Vec<_> = WktTokenizer::new("POINT EMPTY")
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(
            tokens,
            vec![geometry(GeometryType::Point, false), WktToken::Empty]
        );
    }

    #[test]
    fn sfa_dialect_rejects_postgis_measure_keyword() {
        let mut tokens = WktTokenizer::with_matcher("POINTM (1 2 3)", SfaDialect);
        assert!(matches!(
            tokens.next_token().unwrap_err(),
            WktError::Syntax { pos: 0, .. }
        ));
    }
}
