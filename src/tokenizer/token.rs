use crate::datatypes::{Dimension, GeometryType};
use crate::geom::Coord;

/// One lexical element of a WKT string.
///
/// For any syntactically valid literal the stream is exactly one
/// [`WktToken::Geometry`] followed by either one [`WktToken::Empty`] or a
/// balanced bracket structure of the remaining variants.
#[derive(Debug, Clone, PartialEq)]
pub enum WktToken {
    /// Start of a geometry literal. `measured` is true iff the keyword carried
    /// the measured-coordinate suffix (e.g. `POINTM`); the flag, not the
    /// number of values per coordinate, decides whether a 3-value coordinate's
    /// third field is M or Z.
    Geometry {
        geometry_type: GeometryType,
        measured: bool,
    },
    /// The `EMPTY` sentinel: zero child elements.
    Empty,
    /// `(`, opening one nesting level.
    StartList,
    /// `)`, closing one nesting level.
    EndList,
    /// `,` between sibling list elements (rings, sub-geometries, groups).
    /// Commas inside a flat coordinate run belong to the run and never surface
    /// as this token.
    ElementSeparator,
    /// A contiguous run of coordinates within a single list level.
    PointSequence(PointSequence),
}

impl WktToken {
    /// Short description of the token kind, for error messages.
    pub(crate) fn describe(&self) -> &'static str {
        match self {
            WktToken::Geometry { .. } => "a geometry keyword",
            WktToken::Empty => "EMPTY",
            WktToken::StartList => "an opening parenthesis",
            WktToken::EndList => "a closing parenthesis",
            WktToken::ElementSeparator => "a comma",
            WktToken::PointSequence(_) => "a coordinate sequence",
        }
    }
}

/// One or more coordinates scanned contiguously within a single list level.
/// All coordinates in a sequence share the same [`Dimension`].
#[derive(Debug, Clone, PartialEq)]
pub struct PointSequence {
    coords: Vec<Coord>,
    dimension: Dimension,
}

impl PointSequence {
    pub(crate) fn new(coords: Vec<Coord>, dimension: Dimension) -> Self {
        debug_assert!(coords.iter().all(|c| c.dimension() == dimension));
        PointSequence { coords, dimension }
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn into_coords(self) -> Vec<Coord> {
        self.coords
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }
}
