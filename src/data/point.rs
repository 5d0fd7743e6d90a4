use array_init::array_init;
use num_traits::{Float, Zero};
use std::ops::Deref;
use std::ops::Index;
use std::ops::Sub;

use super::Vector;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Point<T, const N: usize> {
  pub array: [T; N],
}

// Methods on N-dimensional points.
impl<T, const N: usize> Point<T, N> {
  pub const fn new(array: [T; N]) -> Point<T, N> {
    Point { array }
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point<T, N>) -> T
  where
    T: Float,
  {
    self
      .array
      .iter()
      .zip(rhs.array.iter())
      .fold(T::zero(), |acc, (&a, &b)| acc + (a - b) * (a - b))
  }

  pub fn euclidean_distance(&self, rhs: &Point<T, N>) -> T
  where
    T: Float,
  {
    self.squared_euclidean_distance(rhs).sqrt()
  }

  /// Linear blend; `t = 0` gives `self`, `t = 1` gives `other`.
  pub fn lerp(&self, other: &Point<T, N>, t: T) -> Point<T, N>
  where
    T: Float,
  {
    Point {
      array: array_init(|i| self.array[i] + (other.array[i] - self.array[i]) * t),
    }
  }

  pub fn zero() -> Self
  where
    T: Zero,
  {
    Point {
      array: array_init(|_| Zero::zero()),
    }
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U, N>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Point<T, 2> {
  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }
}

impl<T, const N: usize> Deref for Point<T, N> {
  type Target = [T; N];
  fn deref(&self) -> &[T; N] {
    &self.array
  }
}

// point - point = vector
impl<'a, 'b, T, const N: usize> Sub<&'a Point<T, N>> for &'b Point<T, N>
where
  T: Sub<T, Output = T> + Clone,
{
  type Output = Vector<T, N>;

  fn sub(self: &'b Point<T, N>, other: &'a Point<T, N>) -> Self::Output {
    Vector(array_init(|i| {
      self.array.index(i).clone() - other.array.index(i).clone()
    }))
  }
}

impl<T, const N: usize> Sub<Point<T, N>> for Point<T, N>
where
  T: Sub<T, Output = T> + Clone,
{
  type Output = Vector<T, N>;

  fn sub(self: Point<T, N>, other: Point<T, N>) -> Self::Output {
    Sub::sub(&self, &other)
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;
  use crate::testing::*;

  use proptest::prelude::*;

  proptest! {
    #[test]
    fn squared_euclidean_distance_symmetric(pt1 in any_point(), pt2 in any_point()) {
      prop_assert_eq!(
        pt1.squared_euclidean_distance(&pt2),
        pt2.squared_euclidean_distance(&pt1)
      );
    }

    #[test]
    fn lerp_endpoints(pt1 in any_point(), pt2 in any_point()) {
      prop_assert_eq!(pt1.lerp(&pt2, 0.0), pt1);
    }
  }

  #[test]
  fn sub_gives_vector() {
    let p = Point::new([3.0, 5.0]);
    let q = Point::new([1.0, 1.0]);
    assert_eq!(&p - &q, Vector([2.0, 4.0]));
    assert_eq!(p - q, Vector([2.0, 4.0]));
  }

  #[test]
  fn distance_3_4_5() {
    let p = Point::new([0.0_f32, 0.0]);
    let q = Point::new([3.0, 4.0]);
    assert_eq!(p.euclidean_distance(&q), 5.0);
  }
}
