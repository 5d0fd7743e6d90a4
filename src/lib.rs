// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Triangulation and barycentric interpolation over simple polygons.
//!
//! The crate splits a polygon, given only as an ordered list of boundary
//! vertices, into triangles by ear-clipping, and then blends per-vertex
//! attributes (typically colors) across those triangles with barycentric
//! weights.
//!
//! ```rust
//! # use polyinterp::algorithms::triangulation::earclip::triangulate_polygon;
//! # use polyinterp::data::Point;
//! let square = [
//!   Point::new([0.0, 0.0]),
//!   Point::new([1.0, 0.0]),
//!   Point::new([1.0, 1.0]),
//!   Point::new([0.0, 1.0]),
//! ];
//! assert_eq!(triangulate_polygon(&square).len(), 2);
//! ```
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Float;

pub mod algorithms;
pub mod data;
pub mod interpolation;
mod orientation;

pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  DuplicatePoints,
  /// The boundary encloses no area; every vertex lies on a single line.
  ZeroArea,
  /// No clippable ear was left before the polygon was reduced to a triangle.
  NoEarFound,
  VertexOutOfBounds { index: usize, len: usize },
  AttributeCountMismatch { vertices: usize, attributes: usize },
  /// A vertex index does not fit the requested element index type.
  IndexOverflow { index: usize },
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::ZeroArea => write!(f, "Polygon encloses zero area"),
      Error::NoEarFound => write!(f, "No valid ear found; polygon cannot be triangulated"),
      Error::VertexOutOfBounds { index, len } => {
        write!(f, "Vertex index {} out of bounds for {} vertices", index, len)
      }
      Error::AttributeCountMismatch {
        vertices,
        attributes,
      } => write!(f, "Expected {} attributes, one per vertex, got {}", vertices, attributes),
      Error::IndexOverflow { index } => {
        write!(f, "Vertex index {} does not fit the element index type", index)
      }
    }
  }
}

impl std::error::Error for Error {}

// Exact conversion; every finite float is a dyadic rational.
pub(crate) fn float_to_rational<T: Float>(f: T) -> Option<BigRational> {
  f.to_f64().and_then(BigRational::from_float)
}

pub(crate) fn rational_half(value: BigRational) -> BigRational {
  value / BigRational::from_integer(BigInt::from(2))
}

#[cfg(test)]
pub mod testing;
