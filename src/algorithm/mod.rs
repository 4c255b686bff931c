//! Computational operations over the geometry model.
//!
//! The parser and tokenizer never compute areas or centroids themselves; those
//! operations are delegated to an external computational-geometry engine
//! behind the [`GeometryEngine`] capability. The crate ships one engine,
//! [`GeoEngine`], backed by the `geo` crate and enabled by the `geo` feature.

#[cfg(feature = "geo")]
mod geo;

#[cfg(feature = "geo")]
pub use geo::GeoEngine;

use crate::error::Result;
use crate::geom::{Geometry, Point};

/// Injected computational-geometry capability.
///
/// Implementations may ignore Z and M values; WKT's spatial operations are
/// defined over the XY plane.
pub trait GeometryEngine {
    /// Unsigned planar area; zero for puntal and lineal geometries.
    fn area(&self, geometry: &Geometry) -> Result<f64>;

    /// Centroid, or the empty point for an empty geometry.
    fn centroid(&self, geometry: &Geometry) -> Result<Point>;

    /// A point guaranteed to lie on the geometry, or the empty point for an
    /// empty geometry.
    fn point_on_surface(&self, geometry: &Geometry) -> Result<Point>;
}
