pub mod triangulation;

#[doc(inline)]
pub use triangulation::earclip::{triangulate_polygon, triangulate_polygon_with};
