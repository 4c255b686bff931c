use crate::datatypes::{Dimension, GeometryType};
use crate::geom::Point;

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiPoint(pub Vec<Point>);

impl MultiPoint {
    pub fn new(points: Vec<Point>) -> Self {
        MultiPoint(points)
    }

    pub fn empty() -> Self {
        MultiPoint(Vec::new())
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn num_points(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn dimension(&self) -> Dimension {
        self.0.first().map_or(Dimension::Xy, |point| point.dimension())
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiPoint
    }
}
