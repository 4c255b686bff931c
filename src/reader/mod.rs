//! Builds [`Geometry`] values by pulling tokens from a [`WktTokenizer`].
//!
//! Validation here is structural only: balanced lists, expected token kinds,
//! and a uniform coordinate dimension across the sibling parts of one
//! geometry. Geometric validity (ring closure, polygon simplicity) is a
//! computational engine's concern, not the reader's.

use crate::datatypes::{Dimension, GeometryType};
use crate::error::{Result, WktError};
use crate::geom::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::tokenizer::{PointSequence, PostgisDialect, WktToken, WktTokenizer, WordMatcher};

/// Parse one WKT literal with the default [`PostgisDialect`].
///
/// # Examples
///
/// ```
/// use geowkt::datatypes::GeometryType;
/// use geowkt::parse_wkt;
///
/// let geometry = parse_wkt("LINESTRING(20 33.3, 0.1 2)").unwrap();
/// assert_eq!(geometry.geometry_type(), GeometryType::LineString);
/// ```
pub fn parse_wkt(input: &str) -> Result<Geometry> {
    WktReader::new(input).read()
}

/// Pull-based WKT parser over a dialect-specific tokenizer.
#[derive(Debug)]
pub struct WktReader<'a, M: WordMatcher = PostgisDialect> {
    tokens: WktTokenizer<'a, M>,
}

/// What follows a geometry keyword: the `EMPTY` sentinel or an opened list.
enum Body {
    Empty,
    List,
}

impl<'a> WktReader<'a, PostgisDialect> {
    pub fn new(input: &'a str) -> Self {
        Self::with_matcher(input, PostgisDialect)
    }
}

impl<'a, M: WordMatcher> WktReader<'a, M> {
    pub fn with_matcher(input: &'a str, matcher: M) -> Self {
        WktReader {
            tokens: WktTokenizer::with_matcher(input, matcher),
        }
    }

    /// Consume one complete geometry literal; trailing input is an error.
    pub fn read(&mut self) -> Result<Geometry> {
        let geometry = self.read_geometry()?;
        if self.tokens.has_more() {
            return Err(WktError::TrailingInput {
                pos: self.tokens.pos(),
            });
        }
        Ok(geometry)
    }

    fn next_token(&mut self) -> Result<WktToken> {
        if !self.tokens.has_more() {
            return Err(WktError::UnexpectedToken {
                pos: self.tokens.pos(),
                expected: "a token",
                found: "end of input",
            });
        }
        self.tokens.next_token()
    }

    fn unexpected(&self, expected: &'static str, found: &WktToken) -> WktError {
        WktError::UnexpectedToken {
            pos: self.tokens.pos(),
            expected,
            found: found.describe(),
        }
    }

    fn read_geometry(&mut self) -> Result<Geometry> {
        match self.next_token()? {
            WktToken::Geometry { geometry_type, .. } => self.read_body(geometry_type),
            other => Err(self.unexpected("a geometry keyword", &other)),
        }
    }

    fn read_body(&mut self, geometry_type: GeometryType) -> Result<Geometry> {
        match geometry_type {
            GeometryType::Point => self.read_point().map(Geometry::Point),
            GeometryType::LineString => self.read_line_string().map(Geometry::LineString),
            GeometryType::Polygon => self.read_polygon().map(Geometry::Polygon),
            GeometryType::MultiPoint => self.read_multi_point().map(Geometry::MultiPoint),
            GeometryType::MultiLineString => {
                self.read_multi_line_string().map(Geometry::MultiLineString)
            }
            GeometryType::MultiPolygon => self.read_multi_polygon().map(Geometry::MultiPolygon),
            GeometryType::GeometryCollection => self
                .read_geometry_collection()
                .map(Geometry::GeometryCollection),
        }
    }

    fn open_body(&mut self) -> Result<Body> {
        match self.next_token()? {
            WktToken::Empty => Ok(Body::Empty),
            WktToken::StartList => Ok(Body::List),
            other => Err(self.unexpected("EMPTY or an opening parenthesis", &other)),
        }
    }

    fn expect_start_list(&mut self) -> Result<()> {
        match self.next_token()? {
            WktToken::StartList => Ok(()),
            other => Err(self.unexpected("an opening parenthesis", &other)),
        }
    }

    fn expect_end_list(&mut self) -> Result<()> {
        match self.next_token()? {
            WktToken::EndList => Ok(()),
            other => Err(self.unexpected("a closing parenthesis", &other)),
        }
    }

    fn expect_point_sequence(&mut self) -> Result<PointSequence> {
        match self.next_token()? {
            WktToken::PointSequence(sequence) => Ok(sequence),
            other => Err(self.unexpected("a coordinate sequence", &other)),
        }
    }

    /// Comma-separated elements up to the closing parenthesis of the current
    /// list. The opening parenthesis must already be consumed.
    fn read_elements<T>(
        &mut self,
        mut read_one: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        let mut elements = vec![read_one(self)?];
        loop {
            match self.next_token()? {
                WktToken::ElementSeparator => elements.push(read_one(self)?),
                WktToken::EndList => break,
                other => {
                    return Err(self.unexpected("a comma or a closing parenthesis", &other));
                }
            }
        }
        Ok(elements)
    }

    /// A parenthesized coordinate run, e.g. one polygon ring.
    fn read_ring(&mut self) -> Result<LineString> {
        self.expect_start_list()?;
        let sequence = self.expect_point_sequence()?;
        self.expect_end_list()?;
        Ok(LineString(sequence.into_coords()))
    }

    fn read_point(&mut self) -> Result<Point> {
        match self.open_body()? {
            Body::Empty => Ok(Point::empty()),
            Body::List => {
                let sequence = self.expect_point_sequence()?;
                if sequence.len() != 1 {
                    return Err(WktError::UnexpectedToken {
                        pos: self.tokens.pos(),
                        expected: "a single coordinate",
                        found: "a coordinate sequence",
                    });
                }
                self.expect_end_list()?;
                Ok(Point::new(sequence.coords()[0]))
            }
        }
    }

    fn read_line_string(&mut self) -> Result<LineString> {
        match self.open_body()? {
            Body::Empty => Ok(LineString::empty()),
            Body::List => {
                let sequence = self.expect_point_sequence()?;
                self.expect_end_list()?;
                Ok(LineString(sequence.into_coords()))
            }
        }
    }

    fn read_polygon(&mut self) -> Result<Polygon> {
        match self.open_body()? {
            Body::Empty => Ok(Polygon::empty()),
            Body::List => {
                let rings = self.read_elements(Self::read_ring)?;
                check_uniform_dimension(rings.iter().map(LineString::dimension))?;
                Ok(Polygon(rings))
            }
        }
    }

    fn read_multi_point(&mut self) -> Result<MultiPoint> {
        match self.open_body()? {
            Body::Empty => Ok(MultiPoint::empty()),
            // Both PostGIS multipoint forms: flat `MULTIPOINT(1 2, 3 4)`
            // arrives as one coordinate run; bracketed `MULTIPOINT((1 2), (3 4))`
            // as parenthesized single-coordinate groups.
            Body::List => match self.next_token()? {
                WktToken::PointSequence(sequence) => {
                    self.expect_end_list()?;
                    let points = sequence.coords().iter().copied().map(Point::new).collect();
                    Ok(MultiPoint(points))
                }
                WktToken::StartList => {
                    let first = self.finish_bracketed_point()?;
                    let mut points = vec![first];
                    loop {
                        match self.next_token()? {
                            WktToken::ElementSeparator => {
                                self.expect_start_list()?;
                                points.push(self.finish_bracketed_point()?);
                            }
                            WktToken::EndList => break,
                            other => {
                                return Err(
                                    self.unexpected("a comma or a closing parenthesis", &other)
                                );
                            }
                        }
                    }
                    check_uniform_dimension(points.iter().map(Point::dimension))?;
                    Ok(MultiPoint(points))
                }
                other => Err(self.unexpected("a coordinate or an opening parenthesis", &other)),
            },
        }
    }

    /// Rest of a bracketed multipoint member; its `(` is already consumed.
    fn finish_bracketed_point(&mut self) -> Result<Point> {
        let sequence = self.expect_point_sequence()?;
        if sequence.len() != 1 {
            return Err(WktError::UnexpectedToken {
                pos: self.tokens.pos(),
                expected: "a single coordinate",
                found: "a coordinate sequence",
            });
        }
        self.expect_end_list()?;
        Ok(Point::new(sequence.coords()[0]))
    }

    fn read_multi_line_string(&mut self) -> Result<MultiLineString> {
        match self.open_body()? {
            Body::Empty => Ok(MultiLineString::empty()),
            Body::List => {
                let lines = self.read_elements(Self::read_ring)?;
                check_uniform_dimension(lines.iter().map(LineString::dimension))?;
                Ok(MultiLineString(lines))
            }
        }
    }

    fn read_multi_polygon(&mut self) -> Result<MultiPolygon> {
        match self.open_body()? {
            Body::Empty => Ok(MultiPolygon::empty()),
            Body::List => {
                let polygons = self.read_elements(|reader| {
                    reader.expect_start_list()?;
                    let rings = reader.read_elements(Self::read_ring)?;
                    check_uniform_dimension(rings.iter().map(LineString::dimension))?;
                    Ok(Polygon(rings))
                })?;
                check_uniform_dimension(polygons.iter().map(Polygon::dimension))?;
                Ok(MultiPolygon(polygons))
            }
        }
    }

    fn read_geometry_collection(&mut self) -> Result<GeometryCollection> {
        match self.open_body()? {
            Body::Empty => Ok(GeometryCollection::empty()),
            Body::List => {
                let geometries = self.read_elements(Self::read_geometry_element)?;
                Ok(GeometryCollection(geometries))
            }
        }
    }

    fn read_geometry_element(&mut self) -> Result<Geometry> {
        match self.next_token()? {
            WktToken::Geometry { geometry_type, .. } => self.read_body(geometry_type),
            other => Err(self.unexpected("a geometry keyword", &other)),
        }
    }
}

fn check_uniform_dimension(dimensions: impl IntoIterator<Item = Dimension>) -> Result<()> {
    let mut dimensions = dimensions.into_iter();
    let Some(expected) = dimensions.next() else {
        return Ok(());
    };
    for found in dimensions {
        if found != expected {
            return Err(WktError::MixedDimensions { expected, found });
        }
    }
    Ok(())
}
