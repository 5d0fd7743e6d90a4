//! Barycentric interpolation of per-vertex attributes over a triangulated
//! polygon.
//!
//! Colors are blended per triangle, so the result is only as smooth as the
//! triangulation: two triangulations of the same polygon blend differently.
use num_traits::Float;
use std::convert::TryFrom;

use crate::algorithms::triangulation::earclip::{triangulate_polygon_with, EarClipConfig};
use crate::data::{Barycentric, Point, Polygon, TriangleView};
use crate::Error;

pub type Rgb<T> = [T; 3];

/// An ear-clipped triangulation bound to the vertices it indexes into.
#[derive(Debug, Clone)]
pub struct Triangulation<'a, T> {
  points: &'a [Point<T, 2>],
  triangles: Vec<[usize; 3]>,
}

impl<'a, T> Triangulation<'a, T>
where
  T: Float,
{
  pub fn new(points: &'a [Point<T, 2>]) -> Result<Triangulation<'a, T>, Error> {
    Self::with_config(points, &EarClipConfig::default())
  }

  pub fn with_config(
    points: &'a [Point<T, 2>],
    config: &EarClipConfig,
  ) -> Result<Triangulation<'a, T>, Error> {
    if points.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    let triangles = triangulate_polygon_with(points, config);
    if triangles.is_empty() {
      return Err(Error::NoEarFound);
    }
    tracing::debug!(
      vertices = points.len(),
      triangles = triangles.len(),
      "built triangulation"
    );
    Ok(Triangulation { points, triangles })
  }

  pub fn points(&self) -> &'a [Point<T, 2>] {
    self.points
  }

  pub fn triangles(&self) -> &[[usize; 3]] {
    &self.triangles
  }

  pub fn triangle(&self, idx: usize) -> TriangleView<'a, T> {
    let [a, b, c] = self.triangles[idx];
    TriangleView::new_unchecked([&self.points[a], &self.points[b], &self.points[c]])
  }

  /// Sum of the unsigned triangle areas.
  pub fn area(&self) -> T {
    (0..self.triangles.len()).fold(T::zero(), |acc, idx| acc + self.triangle(idx).area())
  }

  /// Triangle indices flattened into an element buffer, three per triangle,
  /// in the index type the buffer is uploaded with (`u16`, `u32`, ...).
  pub fn element_indices<I>(&self) -> Result<Vec<I>, Error>
  where
    I: TryFrom<usize>,
  {
    self
      .triangles
      .iter()
      .flat_map(|triangle| triangle.iter())
      .map(|&idx| I::try_from(idx).map_err(|_| Error::IndexOverflow { index: idx }))
      .collect()
  }

  /// First triangle, in clipping order, that contains `pt`, with the
  /// barycentric coordinates of `pt` in it.
  pub fn locate(&self, pt: &Point<T, 2>) -> Option<(usize, Barycentric<T>)> {
    (0..self.triangles.len()).find_map(|idx| {
      self
        .triangle(idx)
        .barycentric(pt)
        .filter(Barycentric::is_inside)
        .map(|coords| (idx, coords))
    })
  }

  /// Blend one attribute per vertex at `pt`. `Ok(None)` when `pt` is outside
  /// every triangle.
  pub fn interpolate<const K: usize>(
    &self,
    pt: &Point<T, 2>,
    attributes: &[[T; K]],
  ) -> Result<Option<[T; K]>, Error> {
    if attributes.len() != self.points.len() {
      return Err(Error::AttributeCountMismatch {
        vertices: self.points.len(),
        attributes: attributes.len(),
      });
    }
    Ok(self.locate(pt).map(|(idx, coords)| {
      let [a, b, c] = self.triangles[idx];
      coords.interpolate([attributes[a], attributes[b], attributes[c]])
    }))
  }
}

/// Editable polygon with one RGB color per vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct ColoredPolygon<T> {
  polygon: Polygon<T>,
  colors: Vec<Rgb<T>>,
}

impl<T> ColoredPolygon<T>
where
  T: Float,
{
  pub fn new(points: Vec<Point<T, 2>>, colors: Vec<Rgb<T>>) -> Result<ColoredPolygon<T>, Error> {
    if points.len() != colors.len() {
      return Err(Error::AttributeCountMismatch {
        vertices: points.len(),
        attributes: colors.len(),
      });
    }
    Ok(ColoredPolygon {
      polygon: Polygon::new_unchecked(points),
      colors,
    })
  }

  /// Diamond centered on (0.5, 0.5) with red, green, blue and yellow corners.
  pub fn diamond() -> ColoredPolygon<T> {
    let c = |value: f64| <T as num_traits::NumCast>::from(value).unwrap_or_else(T::nan);
    let (zero, one) = (T::zero(), T::one());
    ColoredPolygon {
      polygon: Polygon::new_unchecked(vec![
        Point::new([c(0.25), c(0.5)]),
        Point::new([c(0.5), c(0.25)]),
        Point::new([c(0.75), c(0.5)]),
        Point::new([c(0.5), c(0.75)]),
      ]),
      colors: vec![
        [one, zero, zero],
        [zero, one, zero],
        [zero, zero, one],
        [one, one, zero],
      ],
    }
  }

  pub fn polygon(&self) -> &Polygon<T> {
    &self.polygon
  }

  pub fn colors(&self) -> &[Rgb<T>] {
    &self.colors
  }

  pub fn len(&self) -> usize {
    self.colors.len()
  }

  pub fn is_empty(&self) -> bool {
    self.colors.is_empty()
  }

  /// Append a mid-grey vertex at (0.5, 0.5). Returns its index.
  pub fn add_vertex(&mut self) -> usize {
    let half = T::one() / (T::one() + T::one());
    self.push_vertex(Point::new([half, half]), [half; 3])
  }

  pub fn push_vertex(&mut self, pt: Point<T, 2>, color: Rgb<T>) -> usize {
    self.polygon.push(pt);
    self.colors.push(color);
    self.colors.len() - 1
  }

  pub fn remove_vertex(&mut self, idx: usize) -> Result<(Point<T, 2>, Rgb<T>), Error> {
    let pt = self.polygon.remove(idx)?;
    Ok((pt, self.colors.remove(idx)))
  }

  pub fn move_vertex(&mut self, idx: usize, pt: Point<T, 2>) -> Result<(), Error> {
    self.polygon.set_point(idx, pt)
  }

  pub fn set_color(&mut self, idx: usize, color: Rgb<T>) -> Result<(), Error> {
    let len = self.colors.len();
    let slot = self
      .colors
      .get_mut(idx)
      .ok_or(Error::VertexOutOfBounds { index: idx, len })?;
    *slot = color;
    Ok(())
  }

  pub fn triangulation(&self) -> Result<Triangulation<'_, T>, Error> {
    Triangulation::new(self.polygon.points())
  }

  /// Barycentric color at `pt`, or `None` outside the triangulated area.
  pub fn color_at(&self, pt: &Point<T, 2>) -> Result<Option<Rgb<T>>, Error> {
    self.triangulation()?.interpolate(pt, &self.colors)
  }
}
