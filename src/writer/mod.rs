//! Encodes the geometry model back to WKT text.
//!
//! Output follows the PostGIS 1.5 conventions the default tokenizer dialect
//! reads: XYM geometries get the M-suffixed keyword (`POINTM (1 2 3)`), XYZM
//! geometries carry four plain values, empty geometries are written as
//! `<KEYWORD> EMPTY`. Multipoints are written in the flat form.

use std::fmt;

use crate::datatypes::{Dimension, GeometryType};
use crate::geom::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};

/// Encode one geometry as a WKT string.
///
/// The output re-parses to an equivalent value with the default dialect.
pub fn write_wkt(geometry: &Geometry) -> String {
    geometry.to_string()
}

/// Keyword plus the M suffix for measured-without-z geometries.
fn write_keyword(
    f: &mut fmt::Formatter<'_>,
    geometry_type: GeometryType,
    dimension: Dimension,
) -> fmt::Result {
    f.write_str(geometry_type.wkt_keyword())?;
    if dimension == Dimension::Xym {
        f.write_str("M")?;
    }
    Ok(())
}

fn write_coord(f: &mut fmt::Formatter<'_>, coord: &Coord) -> fmt::Result {
    write!(f, "{} {}", coord.x, coord.y)?;
    if let Some(z) = coord.z {
        write!(f, " {z}")?;
    }
    if let Some(m) = coord.m {
        write!(f, " {m}")?;
    }
    Ok(())
}

fn write_coords(f: &mut fmt::Formatter<'_>, coords: &[Coord]) -> fmt::Result {
    for (i, coord) in coords.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write_coord(f, coord)?;
    }
    Ok(())
}

fn write_rings(f: &mut fmt::Formatter<'_>, rings: &[LineString]) -> fmt::Result {
    f.write_str("(")?;
    for (i, ring) in rings.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        f.write_str("(")?;
        write_coords(f, ring.coords())?;
        f.write_str(")")?;
    }
    f.write_str(")")
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_keyword(f, GeometryType::Point, self.dimension())?;
        match self.coord() {
            None => f.write_str(" EMPTY"),
            Some(coord) => {
                f.write_str("(")?;
                write_coord(f, coord)?;
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for LineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_keyword(f, GeometryType::LineString, self.dimension())?;
        if self.is_empty() {
            return f.write_str(" EMPTY");
        }
        f.write_str("(")?;
        write_coords(f, self.coords())?;
        f.write_str(")")
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_keyword(f, GeometryType::Polygon, self.dimension())?;
        if self.is_empty() {
            return f.write_str(" EMPTY");
        }
        write_rings(f, self.rings())
    }
}

impl fmt::Display for MultiPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_keyword(f, GeometryType::MultiPoint, self.dimension())?;
        if self.is_empty() {
            return f.write_str(" EMPTY");
        }
        f.write_str("(")?;
        for (i, point) in self.points().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            match point.coord() {
                Some(coord) => write_coord(f, coord)?,
                // Not representable in the flat form; the dialect has no
                // syntax for an empty member point.
                None => f.write_str("EMPTY")?,
            }
        }
        f.write_str(")")
    }
}

impl fmt::Display for MultiLineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_keyword(f, GeometryType::MultiLineString, self.dimension())?;
        if self.is_empty() {
            return f.write_str(" EMPTY");
        }
        write_rings(f, self.line_strings())
    }
}

impl fmt::Display for MultiPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_keyword(f, GeometryType::MultiPolygon, self.dimension())?;
        if self.is_empty() {
            return f.write_str(" EMPTY");
        }
        f.write_str("(")?;
        for (i, polygon) in self.polygons().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write_rings(f, polygon.rings())?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for GeometryCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_keyword(f, GeometryType::GeometryCollection, self.dimension())?;
        if self.is_empty() {
            return f.write_str(" EMPTY");
        }
        f.write_str("(")?;
        for (i, geometry) in self.geometries().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{geometry}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Geometry::Point(g) => g.fmt(f),
            Geometry::LineString(g) => g.fmt(f),
            Geometry::Polygon(g) => g.fmt(f),
            Geometry::MultiPoint(g) => g.fmt(f),
            Geometry::MultiLineString(g) => g.fmt(f),
            Geometry::MultiPolygon(g) => g.fmt(f),
            Geometry::GeometryCollection(g) => g.fmt(f),
        }
    }
}
