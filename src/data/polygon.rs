use num_rational::BigRational;
use num_traits::*;
use ordered_float::OrderedFloat;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::collections::BTreeSet;
use std::ops::Index;

use crate::algorithms::triangulation::earclip::{triangulate_polygon_with, EarClipConfig};
use crate::data::Point;
use crate::{Error, Orientation};

/// A polygon given by its boundary vertices in traversal order.
///
/// The boundary is assumed, not verified, to be simple (non self-intersecting).
/// Either winding is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T> {
  pub(crate) points: Vec<Point<T, 2>>,
}

impl<T> Polygon<T>
where
  T: Float,
{
  pub fn new_unchecked(points: Vec<Point<T, 2>>) -> Polygon<T> {
    Polygon { points }
  }

  pub fn new(points: Vec<Point<T, 2>>) -> Result<Polygon<T>, Error> {
    let p = Self::new_unchecked(points);
    p.validate()?;
    Ok(p)
  }

  /// At least three distinct vertices enclosing a non-zero area.
  pub fn validate(&self) -> Result<(), Error> {
    if self.points.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    let mut seen = BTreeSet::new();
    for pt in self.iter() {
      let key = (OrderedFloat(as_f64(pt.x_coord())), OrderedFloat(as_f64(pt.y_coord())));
      if !seen.insert(key) {
        return Err(Error::DuplicatePoints);
      }
    }
    if self.signed_area_2x().is_zero() {
      return Err(Error::ZeroArea);
    }
    Ok(())
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn points(&self) -> &[Point<T, 2>] {
    &self.points
  }

  pub fn point(&self, idx: usize) -> &Point<T, 2> {
    &self.points[idx]
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T, 2>> {
    self.points.iter()
  }

  pub fn cursor(&self, idx: usize) -> Cursor<'_, T> {
    assert!(idx < self.points.len());
    Cursor {
      polygon: self,
      position: idx,
    }
  }

  pub fn iter_boundary(&self) -> impl Iterator<Item = Cursor<'_, T>> + '_ {
    (0..self.points.len()).map(move |idx| self.cursor(idx))
  }

  /// Directed boundary edges, closing edge included.
  pub fn iter_boundary_edges(&self) -> impl Iterator<Item = (&Point<T, 2>, &Point<T, 2>)> + '_ {
    self.iter_boundary().map(|cursor| (cursor.point(), cursor.next().point()))
  }

  /// Shoelace formula. Positive for counter-clockwise boundaries.
  pub fn signed_area_2x(&self) -> T {
    self
      .iter_boundary_edges()
      .fold(T::zero(), |acc, (p, q)| {
        acc + (*p.x_coord() * *q.y_coord() - *q.x_coord() * *p.y_coord())
      })
  }

  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / (T::one() + T::one())
  }

  pub fn area(&self) -> T {
    self.signed_area().abs()
  }

  /// Exact signed area. `None` if any coordinate is not finite.
  pub fn exact_signed_area(&self) -> Option<BigRational> {
    let mut total = BigRational::zero();
    for (p, q) in self.iter_boundary_edges() {
      let (px, py) = (to_exact(p.x_coord())?, to_exact(p.y_coord())?);
      let (qx, qy) = (to_exact(q.x_coord())?, to_exact(q.y_coord())?);
      total += px * qy - qx * py;
    }
    Some(crate::rational_half(total))
  }

  /// Winding of the boundary, taken from the sign of its area.
  pub fn orientation(&self) -> Orientation {
    Orientation::from_signed(self.signed_area_2x())
  }

  pub fn centroid(&self) -> Point<T, 2> {
    let area_6x = self.signed_area_2x() * <T as NumCast>::from(3).unwrap_or_else(T::nan);
    let (cx, cy) = self
      .iter_boundary_edges()
      .fold((T::zero(), T::zero()), |(cx, cy), (p, q)| {
        let (px, py, qx, qy) = (*p.x_coord(), *p.y_coord(), *q.x_coord(), *q.y_coord());
        let cross = px * qy - qx * py;
        (cx + (px + qx) * cross, cy + (py + qy) * cross)
      });
    Point::new([cx / area_6x, cy / area_6x])
  }

  pub fn ensure_ccw(&mut self) {
    if self.orientation() == Orientation::ClockWise {
      self.points.reverse();
    }
  }

  pub fn push(&mut self, pt: Point<T, 2>) {
    self.points.push(pt)
  }

  pub fn remove(&mut self, idx: usize) -> Result<Point<T, 2>, Error> {
    self.check_index(idx)?;
    Ok(self.points.remove(idx))
  }

  pub fn set_point(&mut self, idx: usize, pt: Point<T, 2>) -> Result<(), Error> {
    self.check_index(idx)?;
    self.points[idx] = pt;
    Ok(())
  }

  pub fn triangulate_with(&self, config: &EarClipConfig) -> Vec<[usize; 3]> {
    triangulate_polygon_with(&self.points, config)
  }

  pub fn map_points<F>(self, f: F) -> Polygon<T>
  where
    F: Fn(Point<T, 2>) -> Point<T, 2>,
  {
    Polygon {
      points: self.points.into_iter().map(f).collect(),
    }
  }

  fn check_index(&self, idx: usize) -> Result<(), Error> {
    if idx < self.points.len() {
      Ok(())
    } else {
      Err(Error::VertexOutOfBounds {
        index: idx,
        len: self.points.len(),
      })
    }
  }
}

fn to_exact<T: Float>(value: &T) -> Option<BigRational> {
  crate::float_to_rational(*value)
}

// Lossless for f32 and f64.
fn as_f64<T: Float>(value: &T) -> f64 {
  value.to_f64().unwrap_or(f64::NAN)
}

impl<T> Polygon<T>
where
  T: Float + SampleUniform,
{
  /// $O(n)$ Random strictly convex polygon with `n` vertices on the unit
  /// circle, counter-clockwise.
  pub fn random_convex<R>(n: usize, rng: &mut R) -> Polygon<T>
  where
    R: Rng + ?Sized,
  {
    Self::random_radial(n, T::one(), rng)
  }

  /// $O(n)$ Random simple polygon, star-shaped around the origin: like
  /// [`Polygon::random_convex`] but every vertex gets its own radius in
  /// `[0.25, 1)`, which produces reflex corners.
  pub fn random_star<R>(n: usize, rng: &mut R) -> Polygon<T>
  where
    R: Rng + ?Sized,
  {
    let quarter = T::one() / (T::one() + T::one()) / (T::one() + T::one());
    Self::random_radial(n, quarter, rng)
  }

  // Vertex i sits at angle (i + jitter) * tau / n with jitter in [0, 1/2), so
  // consecutive angles are less than pi apart and the origin stays inside.
  fn random_radial<R>(n: usize, min_radius: T, rng: &mut R) -> Polygon<T>
  where
    R: Rng + ?Sized,
  {
    let cast = |value: f64| <T as NumCast>::from(value).unwrap_or_else(T::nan);
    let sector = cast(std::f64::consts::TAU / n as f64);
    let half = cast(0.5);
    let points = (0..n)
      .map(|i| {
        let angle = (cast(i as f64) + rng.gen_range(T::zero()..half)) * sector;
        let radius = if min_radius < T::one() {
          rng.gen_range(min_radius..T::one())
        } else {
          T::one()
        };
        Point::new([radius * angle.cos(), radius * angle.sin()])
      })
      .collect();
    Polygon::new_unchecked(points)
  }
}

impl<T> Index<usize> for Polygon<T> {
  type Output = Point<T, 2>;
  fn index(&self, idx: usize) -> &Point<T, 2> {
    &self.points[idx]
  }
}

/// A vertex together with its neighbours on the boundary.
#[derive(Debug)]
pub struct Cursor<'a, T> {
  polygon: &'a Polygon<T>,
  position: usize,
}

impl<'a, T> PartialEq for Cursor<'a, T> {
  fn eq(&self, other: &Cursor<'a, T>) -> bool {
    self.position == other.position
  }
}

// Can't derive it because T should not be 'Clone'.
impl<'a, T> Clone for Cursor<'a, T> {
  fn clone(&self) -> Self {
    Cursor {
      polygon: self.polygon,
      position: self.position,
    }
  }
}
impl<'a, T> Copy for Cursor<'a, T> {}

impl<'a, T> Cursor<'a, T> {
  pub fn index(self) -> usize {
    self.position
  }

  pub fn prev(mut self) -> Cursor<'a, T> {
    let len = self.polygon.points.len();
    self.position = (self.position + len - 1) % len;
    self
  }

  pub fn next(mut self) -> Cursor<'a, T> {
    self.position = (self.position + 1) % self.polygon.points.len();
    self
  }

  pub fn point(self) -> &'a Point<T, 2> {
    &self.polygon.points[self.position]
  }

  /// Turn taken at this vertex when walking the boundary.
  pub fn orientation(&self) -> Orientation
  where
    T: Float,
  {
    Orientation::new(self.prev().point(), self.point(), self.next().point())
  }

  /// A convex corner turns the same way as the polygon itself.
  pub fn is_convex(&self) -> bool
  where
    T: Float,
  {
    self.orientation() == self.polygon.orientation()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use proptest::prelude::*;
  use rand::SeedableRng;
  use test_strategy::proptest;

  fn square() -> Polygon<f64> {
    Polygon::new(vec![
      Point::new([0.0, 0.0]),
      Point::new([1.0, 0.0]),
      Point::new([1.0, 1.0]),
      Point::new([0.0, 1.0]),
    ])
    .unwrap()
  }

  #[test]
  fn square_area() {
    let p = square();
    assert_eq!(p.signed_area(), 1.0);
    assert_eq!(p.orientation(), Orientation::CounterClockWise);
    assert_eq!(p.centroid(), Point::new([0.5, 0.5]));
    assert_eq!(p.exact_signed_area(), Some(BigRational::one()));
  }

  #[test]
  fn clockwise_area_is_negative() {
    let mut p = square().map_points(|pt| Point::new([pt[1], pt[0]]));
    assert_eq!(p.signed_area(), -1.0);
    assert_eq!(p.area(), 1.0);
    p.ensure_ccw();
    assert_eq!(p.signed_area(), 1.0);
  }

  #[test]
  fn validate_errors() {
    assert_eq!(
      Polygon::<f64>::new(vec![Point::new([0.0, 0.0]), Point::new([1.0, 0.0])]),
      Err(Error::InsufficientVertices)
    );
    assert_eq!(
      Polygon::new(vec![
        Point::new([0.0, 0.0]),
        Point::new([1.0, 0.0]),
        Point::new([0.0, 0.0]),
      ]),
      Err(Error::DuplicatePoints)
    );
    assert_eq!(
      Polygon::new(vec![
        Point::new([0.0, 0.0]),
        Point::new([1.0, 0.0]),
        Point::new([2.0, 0.0]),
      ]),
      Err(Error::ZeroArea)
    );
  }

  #[test]
  fn duplicates_in_f32() {
    let mut p: Polygon<f32> = Polygon::new_unchecked(vec![
      Point::new([0.5, 0.0]),
      Point::new([1.0, 1.0]),
      Point::new([0.5, 0.0]),
    ]);
    assert_eq!(p.validate(), Err(Error::DuplicatePoints));
    p.set_point(2, Point::new([0.0, 1.0])).unwrap();
    assert_eq!(p.validate(), Ok(()));
  }

  #[test]
  fn editing() {
    let mut p = square();
    p.push(Point::new([0.5, 2.0]));
    assert_eq!(p.len(), 5);
    assert_eq!(p.remove(4), Ok(Point::new([0.5, 2.0])));
    assert_eq!(
      p.remove(4),
      Err(Error::VertexOutOfBounds { index: 4, len: 4 })
    );
    p.set_point(2, Point::new([2.0, 2.0])).unwrap();
    assert_eq!(p[2], Point::new([2.0, 2.0]));
    assert!(p.set_point(9, Point::zero()).is_err());
  }

  #[test]
  fn cursor_wraps() {
    let p = square();
    let first = p.cursor(0);
    assert_eq!(first.prev().index(), 3);
    assert_eq!(first.next().index(), 1);
    assert_eq!(first.prev().next(), first);
    assert!(p.iter_boundary().all(|c| c.is_convex()));
  }

  #[test]
  fn reflex_corner() {
    let arrow = Polygon::new(vec![
      Point::new([0.0, 0.0]),
      Point::new([2.0, 1.0]),
      Point::new([4.0, 0.0]),
      Point::new([2.0, 3.0]),
    ])
    .unwrap();
    let convex: Vec<bool> = arrow.iter_boundary().map(|c| c.is_convex()).collect();
    assert_eq!(convex, vec![true, false, true, true]);
  }

  #[test]
  fn random_convex_is_convex() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
    let p = Polygon::<f64>::random_convex(20, &mut rng);
    assert!(p.validate().is_ok());
    assert!(p.iter_boundary().all(|c| c.is_convex()));
  }

  #[proptest]
  fn exact_area_agrees(#[strategy(any_star())] poly: Polygon<f64>) {
    let exact = poly.exact_signed_area().unwrap().to_f64().unwrap();
    prop_assert!((exact - poly.signed_area()).abs() < 1e-9);
  }
}
