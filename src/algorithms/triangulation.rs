use num_traits::Float;

use crate::data::Polygon;

pub mod earclip;

pub trait Triangulate {
  fn triangulate(self) -> Vec<[usize; 3]>;
}

impl<'a, T: Float> Triangulate for &'a Polygon<T> {
  fn triangulate(self) -> Vec<[usize; 3]> {
    earclip::triangulate_polygon(self.points())
  }
}

impl<'a, T: Float> Triangulate for &'a [crate::data::Point<T, 2>] {
  fn triangulate(self) -> Vec<[usize; 3]> {
    earclip::triangulate_polygon(self)
  }
}
