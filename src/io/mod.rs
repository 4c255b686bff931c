//! Conversions between the geometry model and external crates' models.

#[cfg(feature = "geo")]
pub mod geo;
