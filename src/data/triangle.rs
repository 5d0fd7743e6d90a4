use claims::debug_assert_ok;
use num_traits::Float;

use super::Point;
use crate::{Error, Orientation};

/// Barycentric coordinates of a point with respect to a triangle `(a, b, c)`.
///
/// Each weight belongs to the vertex opposite the sub-triangle it was measured
/// from: `u` to `a`, `v` to `b`, `w` to `c`. The weights sum to one, and a
/// weight is negative when the point lies on the far side of the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barycentric<T>([T; 3]);

impl<T: Float> Barycentric<T> {
  pub fn new(weights: [T; 3]) -> Barycentric<T> {
    Barycentric(weights)
  }

  pub fn u(&self) -> T {
    self.0[0]
  }

  pub fn v(&self) -> T {
    self.0[1]
  }

  pub fn w(&self) -> T {
    self.0[2]
  }

  pub fn weights(&self) -> [T; 3] {
    self.0
  }

  /// Closed test: every weight in `[0, 1]`. Points on an edge or on a corner
  /// count as inside. No tolerance is applied, so points that sit exactly on an
  /// edge may land on either side after rounding.
  pub fn is_inside(&self) -> bool {
    self.0.iter().all(|&x| x >= T::zero() && x <= T::one())
  }

  /// Blend one attribute array per corner, e.g. an RGB color.
  pub fn interpolate<const K: usize>(&self, values: [[T; K]; 3]) -> [T; K] {
    let [u, v, w] = self.0;
    array_init::array_init(|i| values[0][i] * u + values[1][i] * v + values[2][i] * w)
  }
}

// FIXME: Support n-dimensional triangles?
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T>([Point<T, 2>; 3]);

impl<T> Triangle<T>
where
  T: Float,
{
  pub fn new(pts: [Point<T, 2>; 3]) -> Triangle<T> {
    let triangle = Triangle(pts);
    debug_assert_ok!(triangle.validate());
    triangle
  }

  pub fn new_unchecked(pts: [Point<T, 2>; 3]) -> Triangle<T> {
    Triangle(pts)
  }

  pub fn validate(&self) -> Result<(), Error> {
    self.view().validate()
  }

  pub fn view(&'_ self) -> TriangleView<'_, T> {
    TriangleView([&self.0[0], &self.0[1], &self.0[2]])
  }

  pub fn barycentric(&self, pt: &Point<T, 2>) -> Option<Barycentric<T>> {
    self.view().barycentric(pt)
  }

  pub fn contains(&self, pt: &Point<T, 2>) -> bool {
    self.view().contains(pt)
  }

  pub fn signed_area(&self) -> T {
    self.view().signed_area()
  }
}

#[derive(Debug, Clone, Copy)]
pub struct TriangleView<'a, T>([&'a Point<T, 2>; 3]);

impl<'a, T> TriangleView<'a, T>
where
  T: Float,
{
  // O(1)
  pub fn new(pts: [&'a Point<T, 2>; 3]) -> TriangleView<'a, T> {
    let triangle = TriangleView(pts);
    debug_assert_ok!(triangle.validate());
    triangle
  }

  pub fn new_unchecked(pts: [&'a Point<T, 2>; 3]) -> TriangleView<'a, T> {
    TriangleView(pts)
  }

  // O(1)
  pub fn validate(&self) -> Result<(), Error> {
    if self.is_degenerate() {
      Err(Error::ZeroArea)
    } else {
      Ok(())
    }
  }

  pub fn points(&self) -> [&'a Point<T, 2>; 3] {
    self.0
  }

  pub fn orientation(&self) -> Orientation {
    let [a, b, c] = self.0;
    Orientation::new(a, b, c)
  }

  /// Twice the signed area: the cross product of the edges `ab` and `ac`.
  pub fn signed_area_2x(&self) -> T {
    let [a, b, c] = self.0;
    signed_area_2x(a, b, c)
  }

  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / (T::one() + T::one())
  }

  pub fn area(&self) -> T {
    self.signed_area().abs()
  }

  /// A triangle is degenerate when the sine of its corner angle at `a` is
  /// within machine epsilon of zero, or when one of the edges at `a` has zero
  /// length. Relative to the edge lengths, so the test does not depend on the
  /// scale of the coordinates.
  pub fn is_degenerate(&self) -> bool {
    let [a, b, c] = self.0;
    let ab = (b - a).magnitude();
    let ac = (c - a).magnitude();
    let area_2x = self.signed_area_2x();
    !(area_2x.abs() > T::epsilon() * ab * ac)
  }

  /// `None` for degenerate triangles, where the coordinates are undefined.
  pub fn barycentric(&self, pt: &Point<T, 2>) -> Option<Barycentric<T>> {
    if self.is_degenerate() {
      return None;
    }
    let [a, b, c] = self.0;
    let total = self.signed_area_2x();
    Some(Barycentric([
      signed_area_2x(pt, b, c) / total,
      signed_area_2x(a, pt, c) / total,
      signed_area_2x(a, b, pt) / total,
    ]))
  }

  // O(1)
  pub fn contains(&self, pt: &Point<T, 2>) -> bool {
    self
      .barycentric(pt)
      .map_or(false, |coords| coords.is_inside())
  }

  /// Unsigned sub-triangle areas `(p, b, c)`, `(a, p, c)` and `(a, b, p)` over
  /// the unsigned area of `(a, b, c)`.
  ///
  /// Inside the triangle these equal the barycentric weights. Outside they do
  /// not sum to one, and a point beyond an edge can still have every ratio in
  /// `[0, 1]`: the ratios only bound the point to the triangle twice the size,
  /// turned upside down, whose edges pass through `a`, `b` and `c`.
  pub fn area_ratios(&self, pt: &Point<T, 2>) -> Option<[T; 3]> {
    if self.is_degenerate() {
      return None;
    }
    let [a, b, c] = self.0;
    let total = self.signed_area_2x().abs();
    Some([
      signed_area_2x(pt, b, c).abs() / total,
      signed_area_2x(a, pt, c).abs() / total,
      signed_area_2x(a, b, pt).abs() / total,
    ])
  }

  /// Every area ratio in `[0, 1]`. Accepts all points of the triangle and
  /// some points outside of it; see [`TriangleView::area_ratios`].
  pub fn within_area_ratios(&self, pt: &Point<T, 2>) -> bool {
    self
      .area_ratios(pt)
      .map_or(false, |ratios| Barycentric(ratios).is_inside())
  }
}

fn signed_area_2x<T: Float>(a: &Point<T, 2>, b: &Point<T, 2>, c: &Point<T, 2>) -> T {
  (b - a).cross(&(c - a))
}

/// Barycentric coordinates of `p` with respect to the triangle `(a, b, c)`.
///
/// The weights are the areas of the sub-triangles `(p, b, c)`, `(a, p, c)` and
/// `(a, b, p)` divided by the area of `(a, b, c)`. Areas are signed, so the
/// result does not depend on the winding of the triangle and points outside the
/// triangle get at least one negative weight.
///
/// Returns `None` when the triangle is degenerate (see
/// [`TriangleView::is_degenerate`]).
///
/// ```rust
/// # use polyinterp::data::{barycentric_coords, Point};
/// let a = Point::new([0.0, 0.0]);
/// let b = Point::new([1.0, 0.0]);
/// let c = Point::new([0.0, 1.0]);
/// let coords = barycentric_coords(&a, &b, &c, &Point::new([0.5, 0.5])).unwrap();
/// assert_eq!(coords.weights(), [0.0, 0.5, 0.5]);
/// ```
pub fn barycentric_coords<T: Float>(
  a: &Point<T, 2>,
  b: &Point<T, 2>,
  c: &Point<T, 2>,
  p: &Point<T, 2>,
) -> Option<Barycentric<T>> {
  TriangleView::new_unchecked([a, b, c]).barycentric(p)
}

/// True if `p` lies inside or on the boundary of the triangle `(a, b, c)`.
/// Degenerate triangles contain no points.
pub fn is_inside_triangle<T: Float>(
  a: &Point<T, 2>,
  b: &Point<T, 2>,
  c: &Point<T, 2>,
  p: &Point<T, 2>,
) -> bool {
  TriangleView::new_unchecked([a, b, c]).contains(p)
}
