use crate::datatypes::{Dimension, GeometryType};
use crate::geom::LineString;

/// A polygon as a list of rings: the first ring is the exterior boundary, any
/// further rings are interior holes. Ring validity (closure, simplicity) is the
/// concern of a computational engine, not of this model.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon(pub Vec<LineString>);

impl Polygon {
    pub fn new(rings: Vec<LineString>) -> Self {
        Polygon(rings)
    }

    pub fn empty() -> Self {
        Polygon(Vec::new())
    }

    pub fn exterior(&self) -> Option<&LineString> {
        self.0.first()
    }

    pub fn interiors(&self) -> &[LineString] {
        self.0.get(1..).unwrap_or_default()
    }

    pub fn num_interiors(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn rings(&self) -> &[LineString] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn dimension(&self) -> Dimension {
        self.0.first().map_or(Dimension::Xy, |ring| ring.dimension())
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::Polygon
    }
}
