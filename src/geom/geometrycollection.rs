use crate::datatypes::{Dimension, GeometryType};
use crate::geom::Geometry;

/// A heterogeneous list of geometries.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryCollection(pub Vec<Geometry>);

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        GeometryCollection(geometries)
    }

    pub fn empty() -> Self {
        GeometryCollection(Vec::new())
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.0
    }

    pub fn num_geometries(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn dimension(&self) -> Dimension {
        self.0.first().map_or(Dimension::Xy, |geometry| geometry.dimension())
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::GeometryCollection
    }
}
