use geo::{Area, Centroid, InteriorPoint};

use crate::algorithm::GeometryEngine;
use crate::error::Result;
use crate::geom::{Coord, Geometry, Point};
use crate::io::geo::geometry_to_geo;

/// [`GeometryEngine`] backed by the `geo` crate.
///
/// Conversions drop Z and M; only the first two dimensions take part in the
/// computations.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoEngine;

fn point_from_geo(point: geo::Point) -> Point {
    Point::new(Coord::xy(point.x(), point.y()))
}

impl GeometryEngine for GeoEngine {
    fn area(&self, geometry: &Geometry) -> Result<f64> {
        if geometry.is_empty() {
            return Ok(0.0);
        }
        Ok(geometry_to_geo(geometry)?.unsigned_area())
    }

    fn centroid(&self, geometry: &Geometry) -> Result<Point> {
        if geometry.is_empty() {
            return Ok(Point::empty());
        }
        let centroid = geometry_to_geo(geometry)?.centroid();
        Ok(centroid.map_or_else(Point::empty, point_from_geo))
    }

    fn point_on_surface(&self, geometry: &Geometry) -> Result<Point> {
        if geometry.is_empty() {
            return Ok(Point::empty());
        }
        let interior = geometry_to_geo(geometry)?.interior_point();
        Ok(interior.map_or_else(Point::empty, point_from_geo))
    }
}
