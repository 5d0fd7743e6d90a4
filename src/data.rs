pub(crate) mod point;
pub mod polygon;
mod triangle;
mod vector;

pub use triangle::*;

#[doc(inline)]
pub use crate::data::polygon::Polygon;
pub use point::Point;
pub use vector::Vector;
