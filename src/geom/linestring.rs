use crate::datatypes::{Dimension, GeometryType};
use crate::geom::Coord;

/// An ordered run of coordinates. Also used for polygon rings; ring closure is
/// not checked here.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineString(pub Vec<Coord>);

impl LineString {
    pub fn new(coords: Vec<Coord>) -> Self {
        LineString(coords)
    }

    pub fn empty() -> Self {
        LineString(Vec::new())
    }

    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    pub fn num_coords(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn dimension(&self) -> Dimension {
        self.0.first().map_or(Dimension::Xy, |coord| coord.dimension())
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::LineString
    }
}

impl From<Vec<Coord>> for LineString {
    fn from(coords: Vec<Coord>) -> Self {
        LineString(coords)
    }
}
