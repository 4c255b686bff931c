//! Fixture geometries shared across unit tests.

use crate::geom::{
    Coord, Geometry, GeometryCollection, LineString, MultiPolygon, Point, Polygon,
};

pub(crate) fn p0() -> Point {
    Point::new(Coord::xy(0., 1.))
}

pub(crate) fn p1() -> Point {
    Point::new(Coord::xy(1., 2.))
}

pub(crate) fn diagonal() -> LineString {
    LineString::new(vec![Coord::xy(0., 0.), Coord::xy(1., 1.), Coord::xy(2., 2.)])
}

pub(crate) fn polygon_with_hole() -> Polygon {
    Polygon::new(vec![
        LineString::new(vec![
            Coord::xy(0., 0.),
            Coord::xy(10., 0.),
            Coord::xy(10., 10.),
            Coord::xy(0., 10.),
            Coord::xy(0., 0.),
        ]),
        LineString::new(vec![
            Coord::xy(2., 2.),
            Coord::xy(2., 4.),
            Coord::xy(4., 4.),
            Coord::xy(4., 2.),
            Coord::xy(2., 2.),
        ]),
    ])
}

pub(crate) fn multi_polygon() -> MultiPolygon {
    MultiPolygon::new(vec![
        polygon_with_hole(),
        Polygon::new(vec![LineString::new(vec![
            Coord::xy(20., 20.),
            Coord::xy(21., 20.),
            Coord::xy(21., 21.),
            Coord::xy(20., 20.),
        ])]),
    ])
}

pub(crate) fn collection() -> GeometryCollection {
    GeometryCollection::new(vec![
        Geometry::Point(p0()),
        Geometry::LineString(diagonal()),
        Geometry::Point(p1()),
    ])
}
