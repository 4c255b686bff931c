use crate::datatypes::{Dimension, GeometryType};
use crate::geom::LineString;

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiLineString(pub Vec<LineString>);

impl MultiLineString {
    pub fn new(line_strings: Vec<LineString>) -> Self {
        MultiLineString(line_strings)
    }

    pub fn empty() -> Self {
        MultiLineString(Vec::new())
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.0
    }

    pub fn num_line_strings(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn dimension(&self) -> Dimension {
        self.0.first().map_or(Dimension::Xy, |line| line.dimension())
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiLineString
    }
}
