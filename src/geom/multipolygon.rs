use crate::datatypes::{Dimension, GeometryType};
use crate::geom::Polygon;

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiPolygon(pub Vec<Polygon>);

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        MultiPolygon(polygons)
    }

    pub fn empty() -> Self {
        MultiPolygon(Vec::new())
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.0
    }

    pub fn num_polygons(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn dimension(&self) -> Dimension {
        self.0.first().map_or(Dimension::Xy, |polygon| polygon.dimension())
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiPolygon
    }
}
