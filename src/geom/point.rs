use crate::datatypes::{Dimension, GeometryType};
use crate::geom::Coord;

/// A single position, or the empty point (`POINT EMPTY`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point(pub Option<Coord>);

impl Point {
    pub fn new(coord: Coord) -> Self {
        Point(Some(coord))
    }

    pub fn empty() -> Self {
        Point(None)
    }

    pub fn coord(&self) -> Option<&Coord> {
        self.0.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Defaults to [`Dimension::Xy`] when empty.
    pub fn dimension(&self) -> Dimension {
        self.0.map_or(Dimension::Xy, |coord| coord.dimension())
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::Point
    }
}

impl From<Coord> for Point {
    fn from(coord: Coord) -> Self {
        Point::new(coord)
    }
}
